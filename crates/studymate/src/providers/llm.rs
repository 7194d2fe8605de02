//! LLM provider trait for text generation

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based text generation
///
/// Implementations:
/// - `GeminiClient`: Google Gemini generateContent API
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for a prompt.
    ///
    /// A quota/rate-limit failure must surface as `Error::RateLimited` so
    /// the retry loop can tell it apart from fatal failures.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
