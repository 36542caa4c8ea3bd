//! Transport abstraction used by resource bindings.

use crate::clients::{HttpError, HttpMethod};

/// Something that can send an API request and hand back the raw JSON body.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Resource bindings are generic over this trait, so they
/// can be exercised against an in-memory fake.
///
/// Implementations are expected to return `Err` for any non-2xx response;
/// an `Ok` body is always from a successful response.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::clients::{ApiRequester, HttpError, HttpMethod};
///
/// struct Canned(&'static str);
///
/// impl ApiRequester for Canned {
///     async fn make_request(
///         &self,
///         _method: HttpMethod,
///         _uri: &str,
///         _body: Option<serde_json::Value>,
///     ) -> Result<Vec<u8>, HttpError> {
///         Ok(self.0.as_bytes().to_vec())
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait ApiRequester: Send + Sync {
    /// Sends `method` to `uri` (relative to the API base URL) with an
    /// optional JSON body and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be sent or the API
    /// responded with a non-2xx status.
    async fn make_request(
        &self,
        method: HttpMethod,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, HttpError>;
}
