//! Exponential-backoff retry for flaky database operations.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for [`retry_with_backoff`].
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt, so `max_retries = 3` means up to 4 calls.
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds.
    pub initial_delay_ms: u64,

    /// Ceiling for the growing delay, in milliseconds.
    pub max_delay_ms: u64,

    /// Growth factor applied to the delay after each failed attempt.
    pub backoff_multiplier: f64,

    /// Randomize each delay to spread out reconnecting clients.
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    /// Default policy: 3 retries, 100ms initial delay doubling up to 5s, jittered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    fn grow(&self, delay_ms: u64) -> u64 {
        ((delay_ms as f64 * self.backoff_multiplier) as u64).min(self.max_delay_ms)
    }

    fn sleep_for(&self, delay_ms: u64) -> Duration {
        let ms = if self.use_jitter {
            apply_jitter(delay_ms)
        } else {
            delay_ms
        };
        Duration::from_millis(ms)
    }
}

/// Runs `operation` until it succeeds or the retry budget is spent,
/// sleeping with exponential backoff between attempts.
///
/// ```ignore
/// let config = RetryConfig::new().with_max_retries(5);
/// let client = retry_with_backoff(|| connect(&url), config).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delay_ms = config.initial_delay_ms;

    for failures in 0..=config.max_retries {
        match operation().await {
            Ok(value) => {
                if failures > 0 {
                    debug!("Operation succeeded after {} retries", failures);
                }
                return Ok(value);
            }
            Err(e) if failures == config.max_retries => {
                warn!(
                    "Operation failed after {} attempts: {}",
                    config.max_retries, e
                );
                return Err(e);
            }
            Err(e) => {
                let pause = config.sleep_for(delay_ms);
                debug!(
                    "Operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                    failures + 1,
                    config.max_retries,
                    e,
                    pause.as_millis()
                );
                tokio::time::sleep(pause).await;
                delay_ms = config.grow(delay_ms);
            }
        }
    }

    unreachable!("loop returns on the final attempt")
}

/// [`retry_with_backoff`] with the default [`RetryConfig`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

/// Scales the delay by a pseudo-random factor in [0.5, 1.0].
fn apply_jitter(delay_ms: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let roll = RandomState::new().hash_one(std::time::SystemTime::now()) % 50;
    let factor = 0.5 + roll as f64 / 100.0;

    (delay_ms as f64 * factor) as u64
}
