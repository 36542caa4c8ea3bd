//! Configuration types for the Cloudflare API client.
//!
//! This module provides the configuration used to construct an
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CloudflareConfig`]: The main configuration struct holding all client settings
//! - [`CloudflareConfigBuilder`]: A builder for constructing [`CloudflareConfig`] instances
//! - [`ApiToken`], [`ApiKey`], [`ApiEmail`], [`UserServiceKey`]: Validated credential newtypes
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::{ApiToken, CloudflareConfig, Credentials};
//!
//! let config = CloudflareConfig::builder()
//!     .credentials(Credentials::token(ApiToken::new("my-token").unwrap()))
//!     .max_retries(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 5);
//! ```

mod newtypes;

pub use newtypes::{ApiEmail, ApiKey, ApiToken, BaseUrl, UserServiceKey};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default lower bound for retry backoff.
pub const DEFAULT_MIN_BACKOFF: Duration = Duration::from_secs(1);

/// Default upper bound for retry backoff.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Default client-side rate limit, in requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 4;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Cloudflare API client.
///
/// # Thread Safety
///
/// `CloudflareConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::{ApiEmail, ApiKey, BaseUrl, CloudflareConfig, Credentials};
///
/// let config = CloudflareConfig::builder()
///     .credentials(Credentials::key(
///         ApiKey::new("global-key").unwrap(),
///         ApiEmail::new("user@example.com").unwrap(),
///     ))
///     .base_url(BaseUrl::new("https://api.cloudflare.com/client/v4").unwrap())
///     .user_agent_prefix("my-tool/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("my-tool/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct CloudflareConfig {
    credentials: Credentials,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    max_retries: u32,
    min_backoff: Duration,
    max_backoff: Duration,
    rate_limit: NonZeroU32,
    timeout: Duration,
    extra_headers: HashMap<String, String>,
}

impl CloudflareConfig {
    /// Creates a new builder for constructing a `CloudflareConfig`.
    #[must_use]
    pub fn builder() -> CloudflareConfigBuilder {
        CloudflareConfigBuilder::new()
    }

    /// Returns the credentials used to authenticate requests.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a retryable failure is retried.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the lower bound for retry backoff.
    #[must_use]
    pub const fn min_backoff(&self) -> Duration {
        self.min_backoff
    }

    /// Returns the upper bound for retry backoff.
    #[must_use]
    pub const fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Returns the client-side rate limit in requests per second.
    #[must_use]
    pub const fn rate_limit(&self) -> NonZeroU32 {
        self.rate_limit
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns headers added to every request.
    #[must_use]
    pub const fn extra_headers(&self) -> &HashMap<String, String> {
        &self.extra_headers
    }
}

// Verify CloudflareConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CloudflareConfig>();
};

/// Builder for constructing [`CloudflareConfig`] instances.
///
/// The only required field is `credentials`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.cloudflare.com/client/v4`
/// - `max_retries`: 3
/// - `min_backoff` / `max_backoff`: 1s / 30s
/// - `rate_limit`: 4 requests per second
/// - `timeout`: 30s
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CloudflareConfigBuilder {
    credentials: Option<Credentials>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    max_retries: Option<u32>,
    min_backoff: Option<Duration>,
    max_backoff: Option<Duration>,
    rate_limit: Option<u32>,
    timeout: Option<Duration>,
    extra_headers: HashMap<String, String>,
}

impl CloudflareConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times 429 and 5xx responses are retried.
    ///
    /// Set to 0 to disable retries.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the lower bound for retry backoff.
    #[must_use]
    pub const fn min_backoff(mut self, backoff: Duration) -> Self {
        self.min_backoff = Some(backoff);
        self
    }

    /// Sets the upper bound for retry backoff.
    #[must_use]
    pub const fn max_backoff(mut self, backoff: Duration) -> Self {
        self.max_backoff = Some(backoff);
        self
    }

    /// Sets the client-side rate limit in requests per second.
    #[must_use]
    pub const fn rate_limit(mut self, per_second: u32) -> Self {
        self.rate_limit = Some(per_second);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`CloudflareConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `credentials` is not set,
    /// [`ConfigError::InvalidRateLimit`] if the rate limit is zero, and
    /// [`ConfigError::InvalidBackoff`] if `min_backoff` exceeds `max_backoff`.
    pub fn build(self) -> Result<CloudflareConfig, ConfigError> {
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        let rate_limit = NonZeroU32::new(self.rate_limit.unwrap_or(DEFAULT_RATE_LIMIT))
            .ok_or_else(|| ConfigError::InvalidRateLimit {
                reason: "at least one request per second must be allowed".to_string(),
            })?;

        let min_backoff = self.min_backoff.unwrap_or(DEFAULT_MIN_BACKOFF);
        let max_backoff = self.max_backoff.unwrap_or(DEFAULT_MAX_BACKOFF);
        if min_backoff > max_backoff {
            return Err(ConfigError::InvalidBackoff {
                min_ms: min_backoff.as_millis(),
                max_ms: max_backoff.as_millis(),
            });
        }

        Ok(CloudflareConfig {
            credentials,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            min_backoff,
            max_backoff,
            rate_limit,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            extra_headers: self.extra_headers,
        })
    }
}
