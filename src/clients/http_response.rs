//! HTTP response types for the Cloudflare API client.
//!
//! This module provides the [`HttpResponse`] type for accessing the raw
//! response and the Cloudflare-specific headers that matter to the client.

use std::collections::HashMap;
use std::time::Duration;

/// Header carrying Cloudflare's per-request trace id.
pub const RAY_ID_HEADER: &str = "cf-ray";

/// An HTTP response from the Cloudflare API.
///
/// The body is kept as raw bytes; decoding into a typed envelope is the job
/// of the caller.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Time to wait before retrying (from the `Retry-After` header).
    pub retry_after: Option<Duration>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    ///
    /// Only the delay-seconds form of `Retry-After` is understood; an
    /// HTTP-date value is ignored.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let retry_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64);

        Self {
            code,
            headers,
            body,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the status warrants a retry (429 or any 5xx).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code == 429 || self.code >= 500
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `cf-ray` header value, if present.
    ///
    /// Include this id when reporting problems to Cloudflare support.
    #[must_use]
    pub fn ray_id(&self) -> Option<&str> {
        self.header(RAY_ID_HEADER)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 403, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_is_retryable_only_for_rate_limit_and_server_errors() {
        let retryable = |code| HttpResponse::new(code, HashMap::new(), Vec::new()).is_retryable();

        assert!(retryable(429));
        assert!(retryable(500));
        assert!(retryable(502));
        assert!(!retryable(400));
        assert!(!retryable(404));
        assert!(!retryable(200));
    }

    #[test]
    fn test_retry_after_parsing() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "2.5")]), Vec::new());
        assert_eq!(response.retry_after, Some(Duration::from_millis(2500)));

        let response = HttpResponse::new(
            429,
            headers(&[("retry-after", "Wed, 21 Oct 2015 07:28:00 GMT")]),
            Vec::new(),
        );
        assert!(response.retry_after.is_none());

        let response = HttpResponse::new(429, headers(&[("retry-after", "-1")]), Vec::new());
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_ray_id_extraction() {
        let response = HttpResponse::new(200, headers(&[("cf-ray", "7d1c2a-SJC")]), Vec::new());
        assert_eq!(response.ray_id(), Some("7d1c2a-SJC"));
        assert_eq!(response.header("CF-Ray"), Some("7d1c2a-SJC"));
    }

    #[test]
    fn test_body_text_is_lossy() {
        let response = HttpResponse::new(200, HashMap::new(), b"{\"success\":true}".to_vec());
        assert_eq!(response.body_text(), "{\"success\":true}");
    }
}
