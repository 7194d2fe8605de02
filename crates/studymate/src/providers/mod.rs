//! Provider abstractions for text generation
//!
//! The retry loop and the HTTP handlers only see the `LlmProvider` trait;
//! the concrete Gemini client lives behind it.

pub mod gemini;
pub mod llm;

pub use gemini::GeminiClient;
pub use llm::LlmProvider;
