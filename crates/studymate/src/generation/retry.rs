//! Bounded retry wrapper around the generation capability
//!
//! Quota/rate-limit failures are masked behind a linear backoff; every other
//! failure stops the loop immediately. When no attempt succeeds, the caller
//! gets a fixed sentinel string instead of an error - deliberately, for
//! parity with the service's original behavior: the response channel carries
//! text, never a failure value.

use std::time::Duration;

use crate::config::LlmConfig;
use crate::providers::LlmProvider;

/// Fixed text returned when generation could not be completed.
///
/// Callers must treat this as a normal string result; it is not
/// distinguishable from model output except by its literal content.
pub const GENERATION_FAILED: &str =
    "Error: Could not get response due to quota or network issues.";

/// Retry behavior for generation calls
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum attempts, first try included
    pub max_attempts: u32,
    /// Attempt n waits n * backoff_step before the next try
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_secs(5), // 5s, 10s, 15s...
        }
    }
}

impl From<&LlmConfig> for RetryPolicy {
    fn from(config: &LlmConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            backoff_step: Duration::from_secs(config.backoff_step_secs),
        }
    }
}

/// Invoke the generation capability, retrying quota/rate-limit failures with
/// linearly increasing backoff.
///
/// - Success returns the generated text as-is.
/// - A transient failure on attempt n sleeps `n * backoff_step`, then retries,
///   up to `max_attempts` attempts.
/// - Any other failure is logged and stops the loop immediately.
/// - Exhaustion (either way) returns [`GENERATION_FAILED`].
pub async fn generate_with_retry(
    provider: &dyn LlmProvider,
    prompt: &str,
    policy: RetryPolicy,
) -> String {
    for attempt in 1..=policy.max_attempts {
        match provider.generate(prompt).await {
            Ok(text) => return text,
            Err(e) if e.is_transient() => {
                let wait = policy.backoff_step * attempt;
                tracing::warn!(
                    "Quota exceeded on attempt {}/{}, retrying in {}s: {}",
                    attempt,
                    policy.max_attempts,
                    wait.as_secs(),
                    e
                );
                tokio::time::sleep(wait).await;
            }
            Err(e) => {
                tracing::error!("Generation failed on attempt {}: {}", attempt, e);
                break;
            }
        }
    }

    GENERATION_FAILED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Provider that replays a fixed script of outcomes
    struct ScriptedProvider {
        script: Mutex<VecDeque<Result<String>>>,
        calls: AtomicU32,
    }

    impl ScriptedProvider {
        fn new(script: Vec<Result<String>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted provider called more times than scripted")
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "test-model"
        }
    }

    fn rate_limited() -> Result<String> {
        Err(Error::RateLimited("quota exceeded".to_string()))
    }

    fn policy() -> RetryPolicy {
        RetryPolicy::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_no_sleep() {
        let provider = ScriptedProvider::new(vec![Ok("generated".to_string())]);
        let start = Instant::now();

        let result = generate_with_retry(&provider, "prompt", policy()).await;

        assert_eq!(result, "generated");
        assert_eq!(provider.calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_then_success_sleeps_linearly() {
        let provider = ScriptedProvider::new(vec![
            rate_limited(),
            rate_limited(),
            Ok("Notes: ...".to_string()),
        ]);
        let start = Instant::now();

        let result = generate_with_retry(&provider, "prompt", policy()).await;

        assert_eq!(result, "Notes: ...");
        assert_eq!(provider.calls(), 3);
        // 5s after attempt 1, 10s after attempt 2
        assert_eq!(start.elapsed(), Duration::from_secs(15));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_return_sentinel() {
        let provider =
            ScriptedProvider::new(vec![rate_limited(), rate_limited(), rate_limited()]);

        let result = generate_with_retry(&provider, "prompt", policy()).await;

        assert_eq!(result, GENERATION_FAILED);
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fatal_error_stops_immediately() {
        let provider = ScriptedProvider::new(vec![
            rate_limited(),
            Err(Error::Generation("connection reset".to_string())),
        ]);
        let start = Instant::now();

        let result = generate_with_retry(&provider, "prompt", policy()).await;

        assert_eq!(result, GENERATION_FAILED);
        // No third attempt after the fatal error
        assert_eq!(provider.calls(), 2);
        // Only the one transient backoff was slept
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fatal_error_on_first_attempt_never_retries() {
        let provider = ScriptedProvider::new(vec![Err(Error::Generation(
            "API key not valid".to_string(),
        ))]);
        let start = Instant::now();

        let result = generate_with_retry(&provider, "prompt", policy()).await;

        assert_eq!(result, GENERATION_FAILED);
        assert_eq!(provider.calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_policy_from_config() {
        let config = LlmConfig {
            max_attempts: 2,
            backoff_step_secs: 1,
            ..LlmConfig::default()
        };
        let provider = ScriptedProvider::new(vec![rate_limited(), Ok("ok".to_string())]);
        let start = Instant::now();

        let result = generate_with_retry(&provider, "prompt", RetryPolicy::from(&config)).await;

        assert_eq!(result, "ok");
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }
}
