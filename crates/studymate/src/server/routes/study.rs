//! Study action endpoints: summary, explanation, quiz

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::generation::{generate_with_retry, PromptBuilder, RetryPolicy};
use crate::server::state::AppState;
use crate::types::{response::StudyResponse, StudyAction};

/// POST /api/summary - Generate concise notes from the document
pub async fn generate_summary(State(state): State<AppState>) -> Result<Json<StudyResponse>> {
    run_action(state, StudyAction::Summary).await
}

/// POST /api/explanation - Explain the document in simple language
pub async fn generate_explanation(State(state): State<AppState>) -> Result<Json<StudyResponse>> {
    run_action(state, StudyAction::Explanation).await
}

/// POST /api/quiz - Generate a 5-question multiple-choice quiz
pub async fn generate_quiz(State(state): State<AppState>) -> Result<Json<StudyResponse>> {
    run_action(state, StudyAction::Quiz).await
}

/// Run one study action against the current document text.
///
/// Generation failures do not surface here as errors: after retries the
/// content is the fixed sentinel string, returned like any other result.
async fn run_action(state: AppState, action: StudyAction) -> Result<Json<StudyResponse>> {
    let start = Instant::now();

    let doc = state.document().ok_or(Error::NoDocument)?;
    tracing::info!("Generating {} for '{}'", action, doc.filename);

    let prompt = PromptBuilder::build(action, &doc.text);
    let policy = RetryPolicy::from(&state.config().llm);
    let content = generate_with_retry(state.llm_provider().as_ref(), &prompt, policy).await;

    let processing_time_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        "Generated {} for '{}' in {}ms",
        action,
        doc.filename,
        processing_time_ms
    );

    Ok(Json(StudyResponse {
        action,
        content,
        processing_time_ms,
    }))
}
