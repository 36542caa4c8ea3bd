//! HTTP client types for Cloudflare API communication.
//!
//! This module provides the shared request layer that every resource binding
//! goes through. It handles authentication, rate limiting, retries, and
//! normalization of failed responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`ApiRequester`]: The transport trait resource bindings are written against
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`RequestRateLimiter`]: Client-side request pacing
//!
//! # Retry Behavior
//!
//! - **Network errors, 429 and 5xx**: retried up to `max_retries` times with
//!   exponential backoff; a 429 `Retry-After` header is honoured
//! - **Other errors (4xx)**: returned immediately without retry
//!
//! The default is 3 retries. Configure via
//! [`CloudflareConfigBuilder::max_retries`](crate::config::CloudflareConfigBuilder::max_retries).

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limiter;
mod requester;

pub use errors::{
    ApiErrorKind, HttpError, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RAY_ID_HEADER};
pub use rate_limiter::RequestRateLimiter;
pub use requester::ApiRequester;
