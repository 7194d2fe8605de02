//! The extracted document text held for the current session

use serde::{Deserialize, Serialize};

/// Extracted text of the currently uploaded PDF.
///
/// Immutable once produced; replaced wholesale when a new file is uploaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentText {
    /// Original upload filename
    pub filename: String,
    /// Extracted text, already capped at the configured maximum characters
    pub text: String,
    /// Total pages in the source document
    pub total_pages: u32,
    /// Whether the character cap cut the document short
    pub truncated: bool,
}

impl DocumentText {
    /// Number of characters of extracted text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Short preview of the text for upload responses
    pub fn preview(&self, max_chars: usize) -> String {
        let preview: String = self.text.chars().take(max_chars).collect();
        if self.char_count() > max_chars {
            format!("{}...", preview.trim_end())
        } else {
            preview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> DocumentText {
        DocumentText {
            filename: "notes.pdf".to_string(),
            text: text.to_string(),
            total_pages: 1,
            truncated: false,
        }
    }

    #[test]
    fn test_preview_short_text() {
        assert_eq!(doc("hello").preview(100), "hello");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let preview = doc("the quick brown fox jumps").preview(9);
        assert_eq!(preview, "the quick...");
    }

    #[test]
    fn test_char_count_is_characters() {
        assert_eq!(doc("héllo").char_count(), 5);
    }
}
