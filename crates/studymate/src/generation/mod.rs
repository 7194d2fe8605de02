//! Study artifact generation: prompt templates and the retrying wrapper

pub mod prompt;
pub mod retry;

pub use prompt::PromptBuilder;
pub use retry::{generate_with_retry, RetryPolicy, GENERATION_FAILED};
