//! Exponential backoff controller for busy retries.
//!
//! The dispatcher calls [`Backoff::retry`] whenever the API reports that it
//! is temporarily busy. Each call sleeps for an exponentially growing delay,
//! bounded by a cap, until the configured retry budget is spent.

use std::time::Duration;
use thiserror::Error;

/// Default maximum number of retry attempts.
pub const DEFAULT_RETRIES: u32 = 3;

/// Default base delay in milliseconds for the exponential curve.
pub const DEFAULT_BASE_MS: u64 = 100;

/// Default delay ceiling in milliseconds.
pub const DEFAULT_CAP_MS: u64 = 5000;

/// Returned by [`Backoff::retry`] once the retry budget is spent.
///
/// Terminal: the caller must stop retrying. The attempt counter is not
/// reset automatically; [`Backoff::reset`] is the owner's responsibility
/// once the request cycle completes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("backoff exhausted after {attempts} retry attempts")]
pub struct BackoffExhausted {
    /// Number of retry attempts issued before giving up
    pub attempts: u32,
}

/// Stateful retry/delay policy with exponential backoff.
///
/// One instance is owned by a single dispatcher; the attempt counter is
/// mutated only by [`retry`](Self::retry) and [`reset`](Self::reset). A
/// controller must not be shared across concurrent retry sequences without
/// external locking, since the attempt counter would race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backoff {
    retries: u32,
    attempt: u32,
    base: u64,
    cap: u64,
}

impl Backoff {
    /// Create a controller allowing `retries` attempts beyond the original
    /// call, with `base` and `cap` delay-curve parameters in milliseconds.
    #[must_use]
    pub const fn new(retries: u32, base: u64, cap: u64) -> Self {
        Self {
            retries,
            attempt: 0,
            base,
            cap,
        }
    }

    /// Compute the delay for a given 1-based attempt number:
    /// `min(cap, base * 2^attempt)` milliseconds.
    #[must_use]
    pub const fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        let delay_ms = self.base.saturating_mul(factor);
        let clamped = if delay_ms < self.cap { delay_ms } else { self.cap };
        Duration::from_millis(clamped)
    }

    /// Request permission for another attempt, sleeping for the computed
    /// delay before returning.
    ///
    /// Increments the attempt counter first; once the incremented count
    /// exceeds the retry budget this fails with [`BackoffExhausted`] and
    /// keeps failing until [`reset`](Self::reset) is called.
    ///
    /// # Errors
    ///
    /// Returns [`BackoffExhausted`] when the retry budget is spent.
    pub async fn retry(&mut self) -> std::result::Result<(), BackoffExhausted> {
        self.attempt += 1;
        if self.attempt > self.retries {
            return Err(BackoffExhausted {
                attempts: self.attempt - 1,
            });
        }

        let delay = self.delay_for_attempt(self.attempt);
        tracing::debug!(attempt = self.attempt, ?delay, "backing off before retry");
        tokio::time::sleep(delay).await;

        Ok(())
    }

    /// Reset the attempt counter so the next call sequence starts its own
    /// backoff curve from zero.
    pub fn reset(&mut self) {
        self.attempt = 0;
    }

    /// The configured maximum number of retry attempts.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// The number of retries issued since the last reset.
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES, DEFAULT_BASE_MS, DEFAULT_CAP_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_follows_doubling_curve() {
        let backoff = Backoff::new(3, 100, 5000);
        assert_eq!(backoff.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(backoff.delay_for_attempt(2), Duration::from_millis(400));
        assert_eq!(backoff.delay_for_attempt(3), Duration::from_millis(800));
        assert_eq!(backoff.delay_for_attempt(4), Duration::from_millis(1600));
    }

    #[test]
    fn delay_is_capped() {
        let backoff = Backoff::new(10, 100, 5000);
        assert_eq!(backoff.delay_for_attempt(6), Duration::from_millis(5000));
        assert_eq!(backoff.delay_for_attempt(20), Duration::from_millis(5000));
    }

    #[test]
    fn delay_survives_overflowing_exponents() {
        let backoff = Backoff::new(200, u64::MAX, 250);
        assert_eq!(backoff.delay_for_attempt(100), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn retry_succeeds_exactly_retries_times() {
        let mut backoff = Backoff::new(3, 1, 10);
        for _ in 0..3 {
            backoff.retry().await.unwrap();
        }
        let err = backoff.retry().await.unwrap_err();
        assert_eq!(err, BackoffExhausted { attempts: 3 });
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_persists_until_reset() {
        let mut backoff = Backoff::new(1, 1, 10);
        backoff.retry().await.unwrap();
        assert!(backoff.retry().await.is_err());
        assert!(backoff.retry().await.is_err());

        backoff.reset();
        assert_eq!(backoff.attempt(), 0);
        backoff.retry().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn reset_behaves_like_fresh_controller() {
        let mut used = Backoff::new(3, 100, 5000);
        used.retry().await.unwrap();
        used.retry().await.unwrap();
        used.reset();

        let fresh = Backoff::new(3, 100, 5000);
        assert_eq!(used, fresh);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_sleeps_for_computed_delay() {
        let mut backoff = Backoff::new(3, 100, 5000);
        let start = tokio::time::Instant::now();
        backoff.retry().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn default_matches_documented_constants() {
        let backoff = Backoff::default();
        assert_eq!(backoff.retries(), DEFAULT_RETRIES);
        assert_eq!(backoff.attempt(), 0);
    }
}
