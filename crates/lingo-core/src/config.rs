//! Configuration structures for API clients.
//!
//! Provides a serde-friendly, validated configuration surface consumed by
//! [`ApiClientBuilder::from_config`](crate::client::ApiClientBuilder::from_config).

use crate::backoff::{Backoff, DEFAULT_BASE_MS, DEFAULT_CAP_MS, DEFAULT_RETRIES};
use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Configuration for an API client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    /// Base URL requests are issued against
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Busy-retry policy; omit to disable retries entirely
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryConfig>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Create a configuration with default values and retries enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            retry: Some(RetryConfig::new()),
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Disable busy retries.
    #[must_use]
    pub fn without_retries(mut self) -> Self {
        self.retry = None;
        self
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Busy-retry policy parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct RetryConfig {
    /// Maximum retry attempts beyond the original call
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Base delay for the exponential curve, in milliseconds
    #[serde(default = "default_base_ms")]
    pub base_ms: u64,

    /// Delay ceiling, in milliseconds
    #[serde(default = "default_cap_ms")]
    pub cap_ms: u64,
}

const fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

const fn default_base_ms() -> u64 {
    DEFAULT_BASE_MS
}

const fn default_cap_ms() -> u64 {
    DEFAULT_CAP_MS
}

impl RetryConfig {
    /// Create a retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            retries: default_retries(),
            base_ms: default_base_ms(),
            cap_ms: default_cap_ms(),
        }
    }

    /// Set the maximum retry attempts.
    #[must_use]
    pub const fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Set the base delay in milliseconds.
    #[must_use]
    pub const fn with_base_ms(mut self, base_ms: u64) -> Self {
        self.base_ms = base_ms;
        self
    }

    /// Set the delay ceiling in milliseconds.
    #[must_use]
    pub const fn with_cap_ms(mut self, cap_ms: u64) -> Self {
        self.cap_ms = cap_ms;
        self
    }

    /// Build the backoff controller this policy describes.
    #[must_use]
    pub const fn backoff(&self) -> Backoff {
        Backoff::new(self.retries, self.base_ms, self.cap_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ClientConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.retry.is_some());
    }

    #[test]
    fn invalid_base_url_fails_validation() {
        let config = ClientConfig::new().with_base_url("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn timeout_range_is_enforced() {
        let config = ClientConfig::new().with_timeout(0);
        assert!(config.validate().is_err());

        let config = ClientConfig::new().with_timeout(301);
        assert!(config.validate().is_err());
    }

    #[test]
    fn retry_range_is_enforced() {
        let config = ClientConfig::new().with_retry(RetryConfig::new().with_retries(11));
        assert!(config.validate().is_err());
    }

    #[test]
    fn retry_config_builds_matching_backoff() {
        let retry = RetryConfig::new()
            .with_retries(5)
            .with_base_ms(50)
            .with_cap_ms(1000);
        let backoff = retry.backoff();
        assert_eq!(backoff.retries(), 5);
        assert_eq!(
            backoff.delay_for_attempt(1),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.retry.is_none());

        let config: ClientConfig = serde_json::from_str(r#"{"retry":{}}"#).unwrap();
        let retry = config.retry.unwrap();
        assert_eq!(retry.retries, 3);
        assert_eq!(retry.base_ms, 100);
        assert_eq!(retry.cap_ms, 5000);
    }

    #[test]
    fn round_trips_through_json() {
        let config = ClientConfig::new()
            .with_base_url("https://example.com/v4/")
            .with_retry(RetryConfig::new().with_retries(2));
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_url, "https://example.com/v4/");
        assert_eq!(parsed.retry.unwrap().retries, 2);
    }
}
