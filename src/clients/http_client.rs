//! HTTP client for Cloudflare API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Cloudflare API with rate limiting and automatic retries.

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::rate_limiter::RequestRateLimiter;
use crate::clients::requester::ApiRequester;
use crate::config::CloudflareConfig;
use crate::rest::ResponseInfo;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Cloudflare API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and authentication
/// - Client-side rate limiting
/// - Retries with exponential backoff for 429 and 5xx responses
/// - Normalizing failed responses into [`HttpError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the
/// connection pool and the rate limiter.
///
/// # Example
///
/// ```rust,ignore
/// use cloudflare_api::{ApiToken, CloudflareConfig, Credentials, HttpClient};
/// use cloudflare_api::clients::{HttpMethod, HttpRequest};
///
/// let config = CloudflareConfig::builder()
///     .credentials(Credentials::token(ApiToken::new("token")?))
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/zones/023e105f4ecef8ad9ca31a8372d0c353/custom_pages")
///     .build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.cloudflare.com/client/v4`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    rate_limiter: RequestRateLimiter,
    max_retries: u32,
    min_backoff: Duration,
    max_backoff: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

/// The part of the standard envelope needed to describe a failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ResponseInfo>,
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &CloudflareConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}cloudflare-api-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        for (key, value) in config.extra_headers() {
            default_headers.insert(key.clone(), value.clone());
        }

        // Credentials go last so extra headers cannot override authentication.
        for (key, value) in config.credentials().headers() {
            default_headers.insert(key.to_string(), value);
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        tracing::debug!(
            base_url = %config.base_url(),
            auth = config.credentials().scheme(),
            rate_limit = config.rate_limit().get(),
            max_retries = config.max_retries(),
            "Created Cloudflare HTTP client"
        );

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            rate_limiter: RequestRateLimiter::per_second(config.rate_limit()),
            max_retries: config.max_retries(),
            min_backoff: config.min_backoff(),
            max_backoff: config.max_backoff(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the maximum number of retries after the first attempt.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Sends an HTTP request to the Cloudflare API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and header merging
    /// - Waiting on the client-side rate limiter before every attempt
    /// - Retrying network failures (including a failed body read), 429 and
    ///   5xx responses with backoff
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error persists after all retries (`Network`)
    /// - A non-retryable non-2xx response is received (`Response`)
    /// - Retryable failures persist after all retries (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut attempt: u32 = 0;
        loop {
            self.rate_limiter.until_ready().await;

            let mut req_builder = self
                .client
                .request(request.http_method.into(), &url);

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(method = %request.http_method, path = %request.path, attempt, "Sending request");

            let response = match Self::send(req_builder).await {
                Ok(response) => response,
                Err(err) if attempt < self.max_retries => {
                    let delay = self.backoff_delay(attempt, None);
                    tracing::warn!(
                        path = %request.path,
                        error = %err,
                        "Request to Cloudflare API failed, retrying in {delay:?}"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            let code = response.code;

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                status = code,
                ray_id = response.ray_id().unwrap_or_default(),
                "Received response"
            );

            if response.is_ok() {
                return Ok(response);
            }

            if response.is_retryable() && attempt < self.max_retries {
                let delay = self.backoff_delay(attempt, response.retry_after);
                tracing::warn!(
                    path = %request.path,
                    status = code,
                    "Retryable response from Cloudflare API, retrying in {delay:?}"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            let (errors, message) = Self::serialize_error(&response);
            let ray_id = response.ray_id().map(String::from);

            if response.is_retryable() && self.max_retries > 0 {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    retries: self.max_retries,
                    errors,
                    message,
                    ray_id,
                }));
            }

            return Err(HttpError::Response(HttpResponseError {
                code,
                errors,
                message,
                ray_id,
            }));
        }
    }

    /// Sends a request and reads the full response body.
    async fn send(req_builder: reqwest::RequestBuilder) -> Result<HttpResponse, reqwest::Error> {
        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();
        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the delay before retry number `attempt + 1`.
    ///
    /// `min_backoff * 2^attempt` plus up to 25% jitter, capped at
    /// `max_backoff`. A server-provided `Retry-After` takes precedence but is
    /// capped the same way.
    fn backoff_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(retry_after) = retry_after {
            return retry_after.min(self.max_backoff);
        }

        let base = self
            .min_backoff
            .saturating_mul(2_u32.saturating_pow(attempt));
        let jitter_ms = u64::try_from(base.as_millis() / 4).unwrap_or(u64::MAX);
        let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms));

        base.saturating_add(jitter).min(self.max_backoff)
    }

    /// Extracts envelope errors and renders a message for a failed response.
    fn serialize_error(response: &HttpResponse) -> (Vec<ResponseInfo>, String) {
        let envelope: ErrorEnvelope = serde_json::from_slice(&response.body).unwrap_or_default();

        let message = if envelope.errors.is_empty() {
            let text = response.body_text();
            let text = text.trim();
            if text.is_empty() {
                reqwest::StatusCode::from_u16(response.code)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text.chars().take(512).collect()
            }
        } else {
            envelope
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };

        (envelope.errors, message)
    }
}

impl ApiRequester for HttpClient {
    async fn make_request(
        &self,
        method: HttpMethod,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, HttpError> {
        let mut builder = HttpRequest::builder(method, uri);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = self.request(builder.build()?).await?;
        Ok(response.body)
    }
}
