//! Configuration for the study service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Environment variable holding the Gemini API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Main study service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StudyConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// LLM (Gemini) configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Text extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl StudyConfig {
    /// Parse configuration from TOML (no credential resolution)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }

    /// Load configuration from an optional TOML file, then resolve the API
    /// credential from the environment. Fails fast if the credential is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };

        config.llm.api_key = resolve_api_key(std::env::var(API_KEY_ENV).ok())?;

        Ok(config)
    }

    /// Load from `studymate.toml` in the working directory if present,
    /// otherwise use defaults (credential still required).
    pub fn load_default() -> Result<Self> {
        let path = Path::new("studymate.toml");
        if path.exists() {
            Self::load(Some(path))
        } else {
            Self::load(None)
        }
    }
}

/// Validate the API credential taken from the environment.
///
/// Takes the raw value rather than reading the variable itself so the
/// missing/empty paths are testable without mutating process environment.
fn resolve_api_key(value: Option<String>) -> Result<String> {
    let api_key = value.ok_or_else(|| {
        Error::Config(format!(
            "{} is not set - export it before starting the server",
            API_KEY_ENV
        ))
    })?;
    if api_key.trim().is_empty() {
        return Err(Error::Config(format!("{} is set but empty", API_KEY_ENV)));
    }
    Ok(api_key)
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 20MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            max_upload_size: 20 * 1024 * 1024, // 20MB
        }
    }
}

/// LLM (Gemini) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Gemini API base URL
    pub base_url: String,
    /// Generation model name
    pub generate_model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum generation attempts (first try included)
    pub max_attempts: u32,
    /// Backoff step in seconds; attempt n waits n * backoff_step_secs
    pub backoff_step_secs: u64,
    /// API credential, resolved from the environment at load time.
    /// Never read from or written to config files.
    #[serde(skip)]
    pub api_key: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            generate_model: "gemini-2.5-flash-lite".to_string(),
            temperature: 0.3,
            timeout_secs: 120,
            max_attempts: 3,
            backoff_step_secs: 5, // 5s, 10s, 15s...
            api_key: String::new(),
        }
    }
}

/// Text extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum characters of extracted text kept per document.
    /// Bounds prompt size; the rest of the document is dropped.
    pub max_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { max_chars: 10_000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudyConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.extraction.max_chars, 10_000);
        assert_eq!(config.llm.max_attempts, 3);
        assert_eq!(config.llm.backoff_step_secs, 5);
        assert_eq!(config.llm.generate_model, "gemini-2.5-flash-lite");
        assert!(config.llm.api_key.is_empty());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = StudyConfig::from_toml_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9090
            enable_cors = false
            max_upload_size = 1048576

            [extraction]
            max_chars = 5000
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.extraction.max_chars, 5000);
        // Untouched section keeps defaults
        assert_eq!(config.llm.max_attempts, 3);
    }

    #[test]
    fn test_api_key_never_deserialized_from_file() {
        let config = StudyConfig::from_toml_str(
            r#"
            [llm]
            base_url = "http://localhost:1234"
            generate_model = "test-model"
            temperature = 0.0
            timeout_secs = 10
            max_attempts = 2
            backoff_step_secs = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.generate_model, "test-model");
        assert!(config.llm.api_key.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = StudyConfig::from_toml_str("not valid {{ toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let err = resolve_api_key(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_empty_api_key_fails_fast() {
        let err = resolve_api_key(Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_present_api_key_resolves() {
        let key = resolve_api_key(Some("test-key-123".to_string())).unwrap();
        assert_eq!(key, "test-key-123");
    }
}
