//! Application state for the study server

use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::StudyConfig;
use crate::providers::{GeminiClient, LlmProvider};
use crate::types::DocumentText;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: StudyConfig,
    /// LLM provider (Gemini)
    llm_provider: Arc<dyn LlmProvider>,
    /// Text of the currently uploaded document. Immutable once set;
    /// replaced wholesale when a new file is uploaded.
    document: RwLock<Option<Arc<DocumentText>>>,
}

impl AppState {
    /// Create new application state with the Gemini provider
    pub fn new(config: StudyConfig) -> Self {
        tracing::info!("Initializing study service state...");

        let llm_provider: Arc<dyn LlmProvider> = Arc::new(GeminiClient::new(&config.llm));
        tracing::info!(
            "LLM provider initialized ({}, model {})",
            llm_provider.name(),
            llm_provider.model()
        );

        Self::with_provider(config, llm_provider)
    }

    /// Create application state with a custom provider (used in tests)
    pub fn with_provider(config: StudyConfig, llm_provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                llm_provider,
                document: RwLock::new(None),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &StudyConfig {
        &self.inner.config
    }

    /// Get the LLM provider
    pub fn llm_provider(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm_provider
    }

    /// Get the current document text, if one has been uploaded
    pub fn document(&self) -> Option<Arc<DocumentText>> {
        self.inner.document.read().clone()
    }

    /// Replace the current document text
    pub fn set_document(&self, doc: DocumentText) {
        *self.inner.document.write() = Some(Arc::new(doc));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;

    struct NullProvider;

    #[async_trait]
    impl LlmProvider for NullProvider {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(String::new())
        }
        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }
        fn name(&self) -> &str {
            "null"
        }
        fn model(&self) -> &str {
            "none"
        }
    }

    fn doc(name: &str, text: &str) -> DocumentText {
        DocumentText {
            filename: name.to_string(),
            text: text.to_string(),
            total_pages: 1,
            truncated: false,
        }
    }

    #[test]
    fn test_upload_replaces_previous_document() {
        let state = AppState::with_provider(StudyConfig::default(), Arc::new(NullProvider));
        assert!(state.document().is_none());

        state.set_document(doc("first.pdf", "AAA"));
        state.set_document(doc("second.pdf", "BBB"));

        let current = state.document().unwrap();
        assert_eq!(current.filename, "second.pdf");
        assert_eq!(current.text, "BBB");
    }
}
