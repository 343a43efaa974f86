//! The API dispatcher: the sole point through which resource clients reach
//! the remote service.
//!
//! [`ApiClient`] composes authenticated requests against a base URI,
//! executes them, classifies responses, and loops through the configured
//! [`Backoff`] controller when the service reports itself busy. Resource
//! clients consume it through the narrow four-verb [`Dispatch`] capability.

use crate::backoff::Backoff;
use crate::config::ClientConfig;
use crate::error::{ApiErrors, Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tokio::sync::Mutex;
use url::Url;
use validator::Validate;

/// Base URI for the Linode v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.linode.com/v4/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The four-verb capability every resource client is built on.
///
/// Implementations return the raw response body; typed (de)serialization
/// and path construction beyond the base URI belong to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Issue a GET against the given relative path.
    async fn fetch(&self, path: &str) -> Result<Bytes>;

    /// Issue a POST with an optional JSON payload. Action endpoints such as
    /// an instance boot post no body at all.
    async fn create(&self, path: &str, payload: Option<Bytes>) -> Result<Bytes>;

    /// Issue a PUT carrying a full-replacement JSON payload.
    async fn replace(&self, path: &str, payload: Bytes) -> Result<Bytes>;

    /// Issue a DELETE against the given relative path.
    async fn remove(&self, path: &str) -> Result<Bytes>;
}

/// Builder for [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    api_key: SecretString,
    base_url: String,
    timeout: Duration,
    backoff: Option<Backoff>,
    http: Option<reqwest::Client>,
}

impl ApiClientBuilder {
    /// Create a builder holding the given API key, targeting the public
    /// API endpoint with no retry policy.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            backoff: None,
            http: None,
        }
    }

    /// Create a builder from a validated [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration fails validation.
    pub fn from_config(api_key: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self::new(api_key)
            .with_base_url(&config.base_url)
            .with_timeout(config.timeout());
        if let Some(retry) = &config.retry {
            builder = builder.with_backoff(retry.backoff());
        }

        Ok(builder)
    }

    /// Override the base URL (useful for test servers and mock endpoints).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach a backoff controller, enabling transparent busy retries.
    #[must_use]
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = Some(backoff);
        self
    }

    /// Supply a pre-built HTTP transport instead of the default.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the base URL cannot be parsed or
    /// [`Error::Http`] when the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<ApiClient> {
        // A trailing slash keeps Url::join from clobbering the version
        // segment of the base path.
        let normalized = if self.base_url.ends_with('/') {
            self.base_url
        } else {
            format!("{}/", self.base_url)
        };
        let base_url = Url::parse(&normalized)?;

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|err| Error::Http(err.to_string()))?,
        };

        Ok(ApiClient {
            http,
            base_url,
            api_key: self.api_key,
            backoff: self.backoff.map(Mutex::new),
        })
    }
}

/// Authenticated dispatcher for the Linode v4 API.
///
/// The configuration is immutable after construction, so a single instance
/// can serve concurrent callers. The one piece of shared mutable state, the
/// backoff attempt counter, sits behind a mutex that is held for the length
/// of one logical call's retry sequence, so concurrent busy retries cannot
/// race the counter.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
    backoff: Option<Mutex<Backoff>>,
}

impl ApiClient {
    /// Construct a client for the public API with no retry policy.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP transport cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ApiClientBuilder::new(api_key).build()
    }

    /// Start building a client.
    pub fn builder(api_key: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(api_key)
    }

    /// Return the base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one logical call: send, classify, and loop through the
    /// backoff controller while the service reports itself busy.
    async fn send(&self, method: Method, path: &str, payload: Option<&Bytes>) -> Result<Bytes> {
        let url = self.base_url.join(path)?;

        // Holding the lock across the whole retry sequence keeps one
        // in-flight sequence per controller at a time.
        let mut backoff = match &self.backoff {
            Some(cell) => Some(cell.lock().await),
            None => None,
        };

        loop {
            let mut request = self.http.request(method.clone(), url.clone()).header(
                AUTHORIZATION,
                format!("Bearer {}", self.api_key.expose_secret()),
            );
            if method == Method::POST || method == Method::PUT {
                request = request.header(CONTENT_TYPE, "application/json");
            }
            if let Some(body) = payload {
                request = request.body(body.clone());
            }

            tracing::debug!(%method, %url, "dispatching API request");
            let response = request.send().await?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|err| Error::Body(err.to_string()))?;

            if status.is_success() {
                // A completed cycle ends the backoff curve; the next call
                // sharing this controller starts from zero.
                if let Some(controller) = backoff.as_deref_mut() {
                    controller.reset();
                }
                return Ok(body);
            }

            let errors: ApiErrors =
                serde_json::from_slice(&body).map_err(|_| Error::UnexpectedResponse {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                })?;

            if errors.is_busy() {
                if let Some(controller) = backoff.as_deref_mut() {
                    match controller.retry().await {
                        Ok(()) => {
                            tracing::warn!(%url, attempt = controller.attempt(), "service busy, retrying");
                            continue;
                        }
                        Err(exhausted) => {
                            tracing::warn!(%url, attempts = exhausted.attempts, "busy retries exhausted");
                            return Err(Error::RetriesExhausted {
                                attempts: exhausted.attempts,
                                last: errors,
                            });
                        }
                    }
                }
            }

            return Err(Error::Api(errors));
        }
    }
}

#[async_trait]
impl Dispatch for ApiClient {
    async fn fetch(&self, path: &str) -> Result<Bytes> {
        self.send(Method::GET, path, None).await
    }

    async fn create(&self, path: &str, payload: Option<Bytes>) -> Result<Bytes> {
        self.send(Method::POST, path, payload.as_ref()).await
    }

    async fn replace(&self, path: &str, payload: Bytes) -> Result<Bytes> {
        self.send(Method::PUT, path, Some(&payload)).await
    }

    async fn remove(&self, path: &str) -> Result<Bytes> {
        self.send(Method::DELETE, path, None).await
    }
}
