//! Shared types for the study service

pub mod document;
pub mod response;

pub use document::DocumentText;

use serde::{Deserialize, Serialize};

/// One of the three user-facing study actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyAction {
    Summary,
    Explanation,
    Quiz,
}

impl StudyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyAction::Summary => "summary",
            StudyAction::Explanation => "explanation",
            StudyAction::Quiz => "quiz",
        }
    }
}

impl std::fmt::Display for StudyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
