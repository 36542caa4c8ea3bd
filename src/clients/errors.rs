//! HTTP-specific error types for the Cloudflare API client.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_api::clients::{ApiErrorKind, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.code),
//!     Err(HttpError::Response(e)) if e.kind() == ApiErrorKind::NotFound => {
//!         println!("No such resource (ray {:?})", e.ray_id);
//!     }
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} tries", e.tries),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::rest::ResponseInfo;

/// Coarse classification of a failed API response by status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400: the request was malformed or rejected.
    BadRequest,
    /// 401: the credentials were missing or invalid.
    Authentication,
    /// 403: the credentials lack permission for the resource.
    Authorization,
    /// 404: the resource does not exist.
    NotFound,
    /// 429: the account hit the API rate limit.
    RateLimited,
    /// 5xx: Cloudflare failed to serve the request.
    Service,
    /// Any other non-2xx status.
    Other,
}

impl ApiErrorKind {
    /// Classifies an HTTP status code.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            403 => Self::Authorization,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::Service,
            _ => Self::Other,
        }
    }
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// The `errors` field carries the `errors` array of the standard response
/// envelope when the body could be decoded; `message` is a human readable
/// rendering of it (or of the raw body when it could not).
///
/// # Example
///
/// ```rust
/// use cloudflare_api::clients::{ApiErrorKind, HttpResponseError};
/// use cloudflare_api::rest::ResponseInfo;
///
/// let error = HttpResponseError {
///     code: 403,
///     errors: vec![ResponseInfo { code: 10000, message: "Authentication error".to_string() }],
///     message: "10000: Authentication error".to_string(),
///     ray_id: Some("7d1c2a-SJC".to_string()),
/// };
///
/// assert_eq!(error.kind(), ApiErrorKind::Authorization);
/// assert_eq!(error.to_string(), "HTTP status 403: 10000: Authentication error");
/// ```
#[derive(Debug, Error)]
#[error("HTTP status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Errors reported in the response envelope.
    pub errors: Vec<ResponseInfo>,
    /// Human readable error message.
    pub message: String,
    /// The `cf-ray` id of the response, for support requests.
    pub ray_id: Option<String>,
}

impl HttpResponseError {
    /// Returns the classification of this error by status code.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::from_status(self.code)
    }

    /// Returns the numeric API error codes from the envelope.
    #[must_use]
    pub fn error_codes(&self) -> Vec<i64> {
        self.errors.iter().map(|e| e.code).collect()
    }
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request continues to fail with 429 or 5xx
/// responses after all configured retries have been made.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {retries} (HTTP status {code}). Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of retries made after the first attempt.
    pub retries: u32,
    /// Errors reported in the last response envelope.
    pub errors: Vec<ResponseInfo>,
    /// Human readable message from the last response.
    pub message: String,
    /// The `cf-ray` id of the last response.
    pub ray_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty or not absolute.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns the `cf-ray` id, if the error came from a response.
    #[must_use]
    pub fn ray_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.ray_id.as_deref(),
            Self::MaxRetries(e) => e.ray_id.as_deref(),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "bad request",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::NotFound => "not found",
            Self::RateLimited => "rate limited",
            Self::Service => "service",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
