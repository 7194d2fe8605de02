//! API response types

use serde::{Deserialize, Serialize};

use super::{DocumentText, StudyAction};

/// Response to a PDF upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    pub total_pages: u32,
    /// Characters of text kept after the cap
    pub char_count: usize,
    /// True when the character cap cut the document short
    pub truncated: bool,
    /// First few hundred characters of the extracted text
    pub preview: String,
}

impl UploadResponse {
    pub fn from_document(doc: &DocumentText) -> Self {
        Self {
            success: true,
            filename: doc.filename.clone(),
            total_pages: doc.total_pages,
            char_count: doc.char_count(),
            truncated: doc.truncated,
            preview: doc.preview(300),
        }
    }
}

/// Response to a study action (summary / explanation / quiz)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyResponse {
    pub action: StudyAction,
    /// Generated text. On generation failure this is the fixed sentinel
    /// string, indistinguishable from model output except by content.
    pub content: String,
    pub processing_time_ms: u64,
}

/// Current document status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatusResponse {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_count: Option<usize>,
}

impl DocumentStatusResponse {
    pub fn empty() -> Self {
        Self {
            loaded: false,
            filename: None,
            total_pages: None,
            char_count: None,
        }
    }

    pub fn from_document(doc: &DocumentText) -> Self {
        Self {
            loaded: true,
            filename: Some(doc.filename.clone()),
            total_pages: Some(doc.total_pages),
            char_count: Some(doc.char_count()),
        }
    }
}
