//! API routes for the study server

pub mod study;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with larger body limit for the PDF
        .route(
            "/upload",
            post(upload::upload_pdf).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/document", get(upload::document_status))
        // Study actions
        .route("/summary", post(study::generate_summary))
        .route("/explanation", post(study::generate_explanation))
        .route("/quiz", post(study::generate_quiz))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "studymate",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "PDF study assistant with AI-generated summaries, explanations, and quizzes",
        "endpoints": {
            "POST /api/upload": "Upload a PDF and extract its text",
            "GET /api/document": "Status of the currently loaded document",
            "POST /api/summary": "Generate concise notes from the document",
            "POST /api/explanation": "Explain the document in simple language",
            "POST /api/quiz": "Generate a 5-question multiple-choice quiz"
        }
    }))
}
