//! The standard Cloudflare v4 response envelope.
//!
//! Every v4 endpoint wraps its payload the same way:
//!
//! ```json
//! {
//!   "success": true,
//!   "errors": [],
//!   "messages": [],
//!   "result": { ... },
//!   "result_info": { "page": 1, "per_page": 20, "count": 1, "total_count": 1 }
//! }
//! ```
//!
//! [`Response<T>`] mirrors that contract; resource modules alias it for
//! their concrete result type.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::rest::ResourceError;

/// An error or informational message from the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    /// Numeric Cloudflare error/message code.
    #[serde(default)]
    pub code: i64,
    /// Human readable text.
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ResponseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Pagination metadata attached to collection results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Current page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Items on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Items across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    /// Number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

/// The standard response envelope around a `result` of type `T`.
///
/// A missing or `null` `result` decodes to `T::default()`.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::rest::Response;
///
/// let body = r#"{"success":true,"errors":[],"messages":[],"result":["a","b"]}"#;
/// let response: Response<Vec<String>> = serde_json::from_str(body).unwrap();
///
/// assert!(response.success);
/// assert_eq!(response.result, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Response<T> {
    /// Whether the API call was successful.
    #[serde(default)]
    pub success: bool,
    /// Errors reported by the API.
    #[serde(default)]
    pub errors: Vec<ResponseInfo>,
    /// Informational messages reported by the API.
    #[serde(default)]
    pub messages: Vec<ResponseInfo>,
    /// The payload.
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: T,
    /// Pagination metadata, for collection results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

impl<T: DeserializeOwned + Default> Response<T> {
    /// Decodes a response body into the envelope.
    ///
    /// Any `messages` the API attached are logged at `warn` level, since
    /// Cloudflare uses them for deprecation notices.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Unmarshal`] if the body is not a valid
    /// envelope for `T`.
    pub fn from_slice(body: &[u8]) -> Result<Self, ResourceError> {
        let response: Self = serde_json::from_slice(body)?;

        for message in &response.messages {
            tracing::warn!(code = message.code, "Cloudflare API message: {}", message.message);
        }

        Ok(response)
    }

    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_result(self) -> T {
        self.result
    }
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
