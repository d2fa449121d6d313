//! Fixed-interval retry for the initial database connection.
//!
//! One initial attempt, then up to `max_retries` further attempts, each
//! preceded by the same `delay`. There is no backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::error::StorageError;

/// Default delay between connection attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Retry policy for opening the database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait before each retry.
    pub delay: Duration,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
}

impl RetryPolicy {
    /// Create a new retry policy.
    #[must_use]
    pub const fn new(delay: Duration, max_retries: u32) -> Self {
        Self { delay, max_retries }
    }

    /// Policy that tries exactly once.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self::new(Duration::ZERO, 0)
    }

    /// Total number of attempts, including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_DELAY, DEFAULT_MAX_RETRIES)
    }
}

/// Run `connect` until it succeeds or the policy is exhausted.
///
/// # Errors
///
/// Returns [`StorageError::ConnectionExhausted`] carrying the attempt count
/// and the last failure message once every attempt has failed.
pub async fn retry_fixed<T, E, F, Fut>(policy: RetryPolicy, mut connect: F) -> Result<T, StorageError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut last_error = None;

    for attempt in 0..policy.max_attempts() {
        if attempt > 0 {
            tracing::warn!(
                attempt,
                delay_ms = u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying database connection"
            );
            tokio::time::sleep(policy.delay).await;
        }

        match connect().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!(error = %e, attempt, "Database connection attempt failed");
                last_error = Some(e.to_string());
            }
        }
    }

    Err(StorageError::ConnectionExhausted {
        attempts: policy.max_attempts(),
        message: last_error.unwrap_or_else(|| "no connection attempt was made".to_string()),
    })
}
