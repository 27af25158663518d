//! Bounded retry policy for FEC API requests.
//!
//! Transport calls are retried a fixed number of times with a fixed delay
//! between attempts. Only transient failures (timeout, connection error,
//! 429) are retried; everything else returns immediately.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::errors::FecError;

/// Default number of attempts per request (1 initial + 2 retries).
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay between attempts.
const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

/// A bounded fixed-delay retry policy, independent of what it wraps.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BACKOFF)
    }
}

/// Execute an async operation under the given retry policy.
///
/// - Transient errors are retried up to `policy.max_attempts` total attempts,
///   sleeping `policy.backoff` between attempts.
/// - Non-transient errors return immediately.
/// - The final attempt's error propagates to the caller.
pub async fn with_retry<F, Fut, T>(policy: &RetryPolicy, operation: F) -> Result<T, FecError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, FecError>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(e) if e.is_transient() && attempt < policy.max_attempts => {
                tracing::warn!(
                    "Transient FEC API failure (attempt {}/{}): {}",
                    attempt,
                    policy.max_attempts,
                    e
                );
                sleep(policy.backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn succeeds_first_attempt() {
        let policy = RetryPolicy::default();
        let result = with_retry(&policy, || async { Ok::<_, FecError>(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn retries_transient_then_succeeds() {
        tokio::time::pause();

        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);

        let result = with_retry(&policy, move || {
            let attempts = Arc::clone(&attempts_clone);
            async move {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(FecError::Timeout)
                } else {
                    Ok(99)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 99);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausts_attempts_on_persistent_transient_failure() {
        tokio::time::pause();

        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);

        let result = with_retry(&policy, move || {
            let attempts = Arc::clone(&attempts_clone);
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(FecError::Timeout)
            }
        })
        .await;

        assert!(matches!(result, Err(FecError::Timeout)));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_transient_errors_return_immediately() {
        let policy = RetryPolicy::new(3, Duration::from_secs(1));
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);

        let result = with_retry(&policy, move || {
            let attempts = Arc::clone(&attempts_clone);
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(FecError::InvalidApiKey)
            }
        })
        .await;

        assert!(matches!(result, Err(FecError::InvalidApiKey)));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rate_limited_is_retried() {
        tokio::time::pause();

        let policy = RetryPolicy::new(2, Duration::from_millis(50));
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = Arc::clone(&attempts);

        let result = with_retry(&policy, move || {
            let attempts = Arc::clone(&attempts_clone);
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(FecError::RateLimited)
            }
        })
        .await;

        assert!(matches!(result, Err(FecError::RateLimited)));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn policy_floors_attempts_at_one() {
        let policy = RetryPolicy::new(0, Duration::from_secs(1));
        assert_eq!(policy.max_attempts, 1);
    }
}
