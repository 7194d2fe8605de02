//! PDF text extraction

pub mod pdf;

pub use pdf::{assemble_document_text, extract_document_text, ExtractedText};
