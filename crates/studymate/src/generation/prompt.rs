//! Prompt templates for the study actions

use crate::types::StudyAction;

/// Prompt builder for study artifact generation
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the full prompt for a study action over the document text
    pub fn build(action: StudyAction, text: &str) -> String {
        format!("{}\n\n{}", Self::instruction(action), text)
    }

    /// Fixed instruction template per action
    fn instruction(action: StudyAction) -> &'static str {
        match action {
            StudyAction::Summary => {
                "Summarize the following text into clear, concise notes:"
            }
            StudyAction::Explanation => {
                "Explain the following content in simple language for easy understanding:"
            }
            StudyAction::Quiz => {
                "Create 5 multiple-choice questions with 4 options each and indicate the correct answer based on:"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt() {
        let prompt = PromptBuilder::build(StudyAction::Summary, "photosynthesis converts light");
        assert_eq!(
            prompt,
            "Summarize the following text into clear, concise notes:\n\nphotosynthesis converts light"
        );
    }

    #[test]
    fn test_explanation_prompt() {
        let prompt = PromptBuilder::build(StudyAction::Explanation, "entropy");
        assert!(prompt.starts_with(
            "Explain the following content in simple language for easy understanding:\n\n"
        ));
        assert!(prompt.ends_with("entropy"));
    }

    #[test]
    fn test_quiz_prompt_mentions_format() {
        let prompt = PromptBuilder::build(StudyAction::Quiz, "the water cycle");
        assert!(prompt.contains("5 multiple-choice questions"));
        assert!(prompt.contains("4 options"));
        assert!(prompt.ends_with("\n\nthe water cycle"));
    }
}
