//! Retry with exponential backoff for collaborator HTTP calls.
//!
//! This lives in the collaborator integration layer only; the core inference
//! and fusion logic never retries.

use std::time::Duration;
use tokio::time::sleep;

#[derive(Clone, Debug)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub backoff_multiplier: f64,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            backoff_multiplier: 2.0,
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            ..Default::default()
        }
    }

    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let scaled = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32 - 1);
        Duration::from_millis(scaled as u64).min(self.max_delay)
    }
}

/// Runs `f` until it succeeds, attempts run out, or an error is not
/// retryable. The last error is returned unchanged.
pub async fn retry_with_backoff<F, T, E, Fut>(
    config: &RetryConfig,
    mut f: F,
    is_retryable: impl Fn(&E) -> bool,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match f().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(attempt, "succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) => {
                if attempt >= config.max_attempts || !is_retryable(&e) {
                    return Err(e);
                }
                let delay = config.delay_for_attempt(attempt);
                tracing::warn!(
                    error = %e,
                    attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "retrying after failure"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Statuses worth retrying: timeouts, throttling and server-side failures.
pub fn is_http_retryable(status: u16) -> bool {
    matches!(status, 408 | 429 | 500..=599)
}
