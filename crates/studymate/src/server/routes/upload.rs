//! PDF upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::extraction::extract_document_text;
use crate::server::state::AppState;
use crate::types::{
    response::{DocumentStatusResponse, UploadResponse},
    DocumentText,
};

/// POST /api/upload - Upload a PDF and extract its text
pub async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut uploaded: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Internal(format!("Failed to read multipart field: {}", e)))?
    {
        // Only file fields matter; the first one wins
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Internal(format!("Failed to read file: {}", e)))?;

        uploaded = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) =
        uploaded.ok_or_else(|| Error::Internal("No file in upload request".to_string()))?;

    let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    if extension != "pdf" {
        return Err(Error::UnsupportedFileType(format!(
            "{} - only PDF uploads are supported",
            extension
        )));
    }

    tracing::info!("Processing file: {} ({} bytes)", filename, data.len());

    // Extraction is CPU-bound; keep it off the async workers
    let max_chars = state.config().extraction.max_chars;
    let extract_filename = filename.clone();
    let extracted = tokio::task::spawn_blocking(move || {
        extract_document_text(&extract_filename, &data, max_chars)
    })
    .await
    .map_err(|e| Error::Internal(format!("Extraction task failed: {}", e)))??;

    let doc = DocumentText {
        filename: filename.clone(),
        text: extracted.text,
        total_pages: extracted.total_pages,
        truncated: extracted.truncated,
    };

    tracing::info!(
        "Extracted {} chars from '{}' ({} pages{})",
        doc.char_count(),
        filename,
        doc.total_pages,
        if doc.truncated { ", truncated" } else { "" }
    );

    let response = UploadResponse::from_document(&doc);
    state.set_document(doc);

    Ok(Json(response))
}

/// GET /api/document - Status of the currently loaded document
pub async fn document_status(State(state): State<AppState>) -> Json<DocumentStatusResponse> {
    let response = match state.document() {
        Some(doc) => DocumentStatusResponse::from_document(&doc),
        None => DocumentStatusResponse::empty(),
    };
    Json(response)
}
