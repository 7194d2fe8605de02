//! studymate: PDF study assistant with AI-generated summaries, explanations, and quizzes
//!
//! Upload a PDF, extract its text, and generate study artifacts through the
//! Gemini generateContent API. Served as an axum HTTP API; any client can
//! render the returned text.

pub mod config;
pub mod error;
pub mod extraction;
pub mod generation;
pub mod providers;
pub mod server;
pub mod types;

pub use config::StudyConfig;
pub use error::{Error, Result};
pub use types::{document::DocumentText, StudyAction};
