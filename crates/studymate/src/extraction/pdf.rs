//! PDF text extraction via pdf-extract, with a character cap on the result

use crate::error::{Error, Result};

/// Result of extracting a PDF
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Concatenated page text, capped at the configured maximum characters
    pub text: String,
    /// Total pages in the document
    pub total_pages: u32,
    /// Whether the character cap cut the document short
    pub truncated: bool,
}

/// Extract text from PDF bytes, page by page, capped at `max_chars` characters.
///
/// Best-effort: a page with no extractable text contributes nothing and is
/// not an error. A document from which nothing at all can be extracted
/// (corrupt, encrypted, image-only) is a parse error.
pub fn extract_document_text(filename: &str, data: &[u8], max_chars: usize) -> Result<ExtractedText> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| Error::file_parse(filename, e.to_string()))?;

    let total_chars: usize = pages.iter().map(|p| p.chars().count()).sum();
    let text = assemble_document_text(&pages, max_chars);

    if text.trim().is_empty() {
        return Err(Error::file_parse(
            filename,
            "No text content could be extracted from PDF",
        ));
    }

    // pdf-extract does not report page count; ask lopdf
    let total_pages = match lopdf::Document::load_mem(data) {
        Ok(doc) => doc.get_pages().len() as u32,
        Err(_) => pages.len() as u32,
    };

    Ok(ExtractedText {
        text,
        total_pages,
        truncated: total_chars > max_chars,
    })
}

/// Concatenate page texts in page order and keep the first `max_chars`
/// characters of the result. Empty pages contribute nothing and do not
/// shift where later pages land relative to the cap.
pub fn assemble_document_text<S: AsRef<str>>(pages: &[S], max_chars: usize) -> String {
    pages
        .iter()
        .flat_map(|p| p.as_ref().chars())
        .take(max_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates_in_page_order() {
        let pages = vec!["AAA", "", "BBB"];
        assert_eq!(assemble_document_text(&pages, 10_000), "AAABBB");
    }

    #[test]
    fn test_truncates_to_exact_prefix() {
        let pages = vec!["a".repeat(6_000), "b".repeat(6_000)];
        let text = assemble_document_text(&pages, 10_000);

        assert_eq!(text.chars().count(), 10_000);
        assert_eq!(&text[..6_000], "a".repeat(6_000));
        assert_eq!(&text[6_000..], "b".repeat(4_000));
    }

    #[test]
    fn test_empty_pages_do_not_shift_truncation() {
        let with_gaps = vec!["x".repeat(7_000), String::new(), "y".repeat(7_000)];
        let without_gaps = vec!["x".repeat(7_000), "y".repeat(7_000)];

        assert_eq!(
            assemble_document_text(&with_gaps, 10_000),
            assemble_document_text(&without_gaps, 10_000)
        );
    }

    #[test]
    fn test_cap_counts_characters_not_bytes() {
        // 4 bytes per char; a byte-based cap of 6 would split a char
        let pages = vec!["𝕒𝕓𝕔𝕕"];
        let text = assemble_document_text(&pages, 2);

        assert_eq!(text, "𝕒𝕓");
    }

    #[test]
    fn test_short_document_untouched() {
        let pages = vec!["hello", " ", "world"];
        assert_eq!(assemble_document_text(&pages, 10_000), "hello world");
    }
}
