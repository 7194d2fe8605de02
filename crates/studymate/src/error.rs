//! Error types for the study service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for study service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Study service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File parsing error
    #[error("Failed to parse file '{filename}': {message}")]
    FileParse { filename: String, message: String },

    /// Unsupported file type
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Quota or rate limit exhausted on the generation service (transient)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other generation failure (not retried)
    #[error("Generation failed: {0}")]
    Generation(String),

    /// No document has been uploaded yet
    #[error("No document uploaded")]
    NoDocument,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this failure is expected to resolve itself after waiting.
    ///
    /// The retry loop dispatches on this tag: only rate-limit/quota failures
    /// are retried, everything else stops the loop immediately.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::RateLimited(_))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::BAD_REQUEST, "config_error", msg.clone()),
            Error::FileParse { filename, message } => (
                StatusCode::BAD_REQUEST,
                "parse_error",
                format!("Failed to parse '{}': {}", filename, message),
            ),
            Error::UnsupportedFileType(ext) => (
                StatusCode::BAD_REQUEST,
                "unsupported_type",
                format!("Unsupported file type: {}", ext),
            ),
            Error::RateLimited(msg) => {
                (StatusCode::TOO_MANY_REQUESTS, "rate_limited", msg.clone())
            }
            Error::Generation(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "llm_error", msg.clone())
            }
            Error::NoDocument => (
                StatusCode::NOT_FOUND,
                "no_document",
                "No document uploaded yet. POST a PDF to /api/upload first.".to_string(),
            ),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Http(err) => (StatusCode::BAD_GATEWAY, "http_error", err.to_string()),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_is_transient() {
        assert!(Error::RateLimited("quota exceeded".to_string()).is_transient());
    }

    #[test]
    fn test_other_errors_are_fatal() {
        assert!(!Error::Generation("boom".to_string()).is_transient());
        assert!(!Error::Config("missing key".to_string()).is_transient());
        assert!(!Error::NoDocument.is_transient());
        assert!(!Error::file_parse("a.pdf", "bad xref").is_transient());
    }
}
