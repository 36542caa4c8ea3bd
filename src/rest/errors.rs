//! Error type for resource binding operations.
//!
//! Resource bindings do not classify API failures further: a failed call is
//! either a request failure (anything the shared request layer reports) or
//! a decode failure of the returned JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_api::rest::ResourceError;
//! use cloudflare_api::rest::resources::{CustomPage, CustomPageScope};
//!
//! match CustomPage::list(&client, &CustomPageScope::zone(zone_id)).await {
//!     Ok(pages) => println!("{} pages", pages.len()),
//!     Err(ResourceError::Request(e)) => println!("request failed: {e}"),
//!     Err(ResourceError::Unmarshal(e)) => println!("unexpected payload: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Context tag for failures reported by the request layer.
pub const REQUEST_ERROR_CONTEXT: &str = "error from makeRequest";

/// Context tag for failures decoding the response body.
pub const UNMARSHAL_ERROR_CONTEXT: &str = "error unmarshalling the JSON response";

/// Error type for resource binding operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The request could not be completed.
    #[error("error from makeRequest: {0}")]
    Request(#[from] HttpError),

    /// The response body was not the expected JSON.
    #[error("error unmarshalling the JSON response: {0}")]
    Unmarshal(#[from] serde_json::Error),

    /// A required identifier was empty.
    #[error("required identifier '{field}' is missing")]
    MissingIdentifier {
        /// Which identifier was missing (e.g. `zone_id`).
        field: &'static str,
    },

    /// A required identifier would not address a single path segment.
    #[error("identifier '{field}' has invalid value '{value}'")]
    InvalidIdentifier {
        /// Which identifier was rejected (e.g. `page_id`).
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl ResourceError {
    /// Returns the HTTP status code, if the API answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status(),
            Self::Unmarshal(_)
            | Self::MissingIdentifier { .. }
            | Self::InvalidIdentifier { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};

    #[test]
    fn test_request_error_carries_context_tag() {
        let error = ResourceError::from(HttpError::Response(HttpResponseError {
            code: 404,
            errors: Vec::new(),
            message: "Not Found".to_string(),
            ray_id: None,
        }));

        let message = error.to_string();
        assert!(message.starts_with(REQUEST_ERROR_CONTEXT));
        assert!(message.contains("404"));
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_unmarshal_error_carries_context_tag() {
        let cause = serde_json::from_str::<u32>("nope").unwrap_err();
        let error = ResourceError::from(cause);

        assert!(error.to_string().starts_with(UNMARSHAL_ERROR_CONTEXT));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_source_chain_is_preserved() {
        use std::error::Error as _;

        let error = ResourceError::from(HttpError::InvalidRequest(
            InvalidHttpRequestError::MissingBody {
                method: "PUT".to_string(),
            },
        ));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_missing_identifier_message() {
        let error = ResourceError::MissingIdentifier { field: "zone_id" };
        assert_eq!(error.to_string(), "required identifier 'zone_id' is missing");
    }

    #[test]
    fn test_invalid_identifier_message() {
        let error = ResourceError::InvalidIdentifier {
            field: "page_id",
            value: "..".to_string(),
        };
        assert_eq!(error.to_string(), "identifier 'page_id' has invalid value '..'");
        assert_eq!(error.status(), None);
    }
}
