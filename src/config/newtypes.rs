//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A scoped Cloudflare API token.
///
/// Sent as `Authorization: Bearer <token>`. The `Debug` implementation masks
/// the value to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(token.into(), "API token").map(Self)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A legacy global API key, used together with an [`ApiEmail`].
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only `ApiKey(*****)`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(key.into(), "API key").map(Self)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// The account email that accompanies a global [`ApiKey`].
///
/// Only a light shape check is performed: one `@` with text on both sides.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::ApiEmail;
///
/// assert!(ApiEmail::new("user@example.com").is_ok());
/// assert!(ApiEmail::new("not-an-email").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEmail(String);

impl ApiEmail {
    /// Creates a new validated account email.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the email is empty, or
    /// [`ConfigError::InvalidEmail`] if it is not shaped like an address.
    pub fn new(email: impl Into<String>) -> Result<Self, ConfigError> {
        let email = non_empty(email.into().trim().to_string(), "account email")?;

        let valid = email
            .split_once('@')
            .is_some_and(|(user, domain)| {
                !user.is_empty() && !domain.is_empty() && !domain.contains('@')
            });
        if !valid {
            return Err(ConfigError::InvalidEmail { email });
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for ApiEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An Origin CA user service key.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only `UserServiceKey(*****)`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserServiceKey(String);

impl UserServiceKey {
    /// Creates a new validated user service key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(key.into(), "user service key").map(Self)
    }
}

impl AsRef<str> for UserServiceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserServiceKey(*****)")
    }
}

/// A validated API base URL.
///
/// The URL must use the `http` or `https` scheme and have a non-empty host.
/// Trailing slashes are stripped so that request paths can be appended with
/// a single `/`.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.cloudflare.com/client/v4/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.cloudflare.com/client/v4");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.cloudflare.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production Cloudflare v4 API endpoint.
    pub const DEFAULT: &'static str = "https://api.cloudflare.com/client/v4";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || url[host_start..].contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 26,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

fn non_empty(value: String, credential: &'static str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyCredential { credential });
    }
    Ok(value)
}
