//! Error types for Linode API operations.
//!
//! This module provides the error taxonomy surfaced by the dispatcher along
//! with the structured error envelope the API returns on 4xx and 5xx
//! responses, including the "busy" classification that drives the retry loop.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The exact reason string the API uses to signal that the service is
/// temporarily overloaded and the request should be retried.
///
/// Detection is deliberately isolated behind [`ApiErrors::is_busy`] so the
/// comparison can move to a structured error code without touching the
/// retry loop.
pub const BUSY_SENTINEL: &str = "Linode busy.";

/// Main error type for Linode API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Request timed out at the transport level
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection-level failure (DNS, refused, TLS)
    #[error("Connection failed: {0}")]
    Transport(String),

    /// Any other HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failed to read the response body
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Response body was not valid JSON where JSON was expected
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Request payload could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Non-success status whose body did not parse as the error envelope
    #[error("Unexpected API response (status {status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// Structured, non-retryable service error
    #[error("{0}")]
    Api(ApiErrors),

    /// Busy retries were exhausted without the service recovering
    #[error("Retry attempts exhausted after {attempts} tries: {last}")]
    RetriesExhausted {
        /// Number of retry attempts that were issued
        attempts: u32,
        /// The last structured error observed before giving up
        last: ApiErrors,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid base URI or path fragment
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A failure wrapped with the logical operation that produced it
    #[error("{op}: {source}")]
    Context {
        /// Call-site description, e.g. `"failed to make request for ListImages"`
        op: String,
        /// The underlying failure
        source: Box<Error>,
    },
}

/// Specialized result type for Linode API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap this error with call-site context naming the logical operation.
    ///
    /// Resource clients attach context at every dispatch call so a surfaced
    /// failure always names the operation it belongs to.
    #[must_use]
    pub fn context(self, op: impl Into<String>) -> Self {
        Self::Context {
            op: op.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any context wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A single structured error entry from the API error envelope.
///
/// `field` is present when the error relates to a specific request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Request field the error refers to, when applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable reason text
    pub reason: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "With field '{field}', {}", self.reason),
            None => f.write_str(&self.reason),
        }
    }
}

/// The full error envelope the API returns on 4xx and 5xx status codes:
/// an ordered, non-empty sequence of [`ApiError`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    /// The ordered error entries
    pub errors: Vec<ApiError>,
}

impl ApiErrors {
    /// Returns true when any entry carries the busy sentinel reason,
    /// meaning the request may be retried after backing off.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.errors.iter().any(|e| e.reason == BUSY_SENTINEL)
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Transport(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_with_field() {
        let err = ApiError {
            field: Some("label".to_string()),
            reason: "Label is too long.".to_string(),
        };
        assert_eq!(err.to_string(), "With field 'label', Label is too long.");
    }

    #[test]
    fn api_error_display_without_field() {
        let err = ApiError {
            field: None,
            reason: "Not found.".to_string(),
        };
        assert_eq!(err.to_string(), "Not found.");
    }

    #[test]
    fn api_errors_display_preserves_order() {
        let errs = ApiErrors {
            errors: vec![
                ApiError {
                    field: Some("region".to_string()),
                    reason: "Region is required.".to_string(),
                },
                ApiError {
                    field: None,
                    reason: "Something else.".to_string(),
                },
            ],
        };
        assert_eq!(
            errs.to_string(),
            "With field 'region', Region is required.\nSomething else."
        );
    }

    #[test]
    fn busy_detection_is_exact_match() {
        let busy = ApiErrors {
            errors: vec![ApiError {
                field: None,
                reason: BUSY_SENTINEL.to_string(),
            }],
        };
        assert!(busy.is_busy());

        let not_busy = ApiErrors {
            errors: vec![ApiError {
                field: None,
                reason: "Linode busy".to_string(),
            }],
        };
        assert!(!not_busy.is_busy());
    }

    #[test]
    fn busy_detection_scans_all_entries() {
        let errs = ApiErrors {
            errors: vec![
                ApiError {
                    field: Some("label".to_string()),
                    reason: "Label is too long.".to_string(),
                },
                ApiError {
                    field: None,
                    reason: BUSY_SENTINEL.to_string(),
                },
            ],
        };
        assert!(errs.is_busy());
    }

    #[test]
    fn envelope_deserializes_optional_field() {
        let json = r#"{"errors":[{"reason":"Linode busy."},{"field":"size","reason":"Too small."}]}"#;
        let errs: ApiErrors = serde_json::from_str(json).unwrap();
        assert_eq!(errs.errors.len(), 2);
        assert!(errs.errors[0].field.is_none());
        assert_eq!(errs.errors[1].field.as_deref(), Some("size"));
        assert!(errs.is_busy());
    }

    #[test]
    fn context_wraps_and_preserves_root_cause() {
        let err = Error::Decode("bad json".to_string())
            .context("failed to decode ListImages response");
        assert_eq!(
            err.to_string(),
            "failed to decode ListImages response: Failed to decode response: bad json"
        );
        assert!(matches!(err.root_cause(), Error::Decode(_)));
    }

    #[test]
    fn retries_exhausted_includes_last_error() {
        let err = Error::RetriesExhausted {
            attempts: 3,
            last: ApiErrors {
                errors: vec![ApiError {
                    field: None,
                    reason: BUSY_SENTINEL.to_string(),
                }],
            },
        };
        let text = err.to_string();
        assert!(text.contains("exhausted after 3 tries"));
        assert!(text.contains(BUSY_SENTINEL));
    }

    #[test]
    fn from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let api_err: Error = err.into();
        assert!(matches!(api_err, Error::InvalidUrl(_)));
    }

    #[test]
    fn from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let api_err: Error = err.into();
        assert!(matches!(api_err, Error::Decode(_)));
    }
}
