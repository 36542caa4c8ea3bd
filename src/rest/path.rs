//! URI helpers for resource bindings.
//!
//! Bindings build their URIs by plain concatenation. Identifiers supplied by
//! the caller are checked and percent-encoded as single path segments first,
//! so a stray `/` or `?` in an id cannot change which endpoint is hit. The
//! dot segments `.` and `..` pass through encoding unchanged and are rejected.
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::rest::path_segment;
//!
//! assert_eq!(path_segment("zone_id", "023e105f4ecef8ad9ca31a8372d0c353").unwrap(), "023e105f4ecef8ad9ca31a8372d0c353");
//! assert_eq!(path_segment("page_id", "a/b").unwrap(), "a%2Fb");
//! assert!(path_segment("zone_id", "").is_err());
//! assert!(path_segment("page_id", "..").is_err());
//! ```

use std::borrow::Cow;

use crate::rest::ResourceError;

/// Validates and percent-encodes an identifier for use as one path segment.
///
/// # Errors
///
/// Returns [`ResourceError::MissingIdentifier`] naming `field` if `value` is
/// empty or only whitespace, and [`ResourceError::InvalidIdentifier`] if it
/// is the dot segment `.` or `..`.
pub fn path_segment<'a>(field: &'static str, value: &'a str) -> Result<Cow<'a, str>, ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::MissingIdentifier { field });
    }
    if matches!(value, "." | "..") {
        return Err(ResourceError::InvalidIdentifier {
            field,
            value: value.to_string(),
        });
    }
    Ok(urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers_pass_through() {
        assert_eq!(
            path_segment("zone_id", "023e105f4ecef8ad9ca31a8372d0c353").unwrap(),
            "023e105f4ecef8ad9ca31a8372d0c353"
        );
        assert_eq!(path_segment("page_id", "500_errors").unwrap(), "500_errors");
        assert_eq!(
            path_segment("page_id", "basic_challenge").unwrap(),
            "basic_challenge"
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(path_segment("page_id", "../zones").unwrap(), "..%2Fzones");
        assert_eq!(path_segment("page_id", "a?b=c").unwrap(), "a%3Fb%3Dc");
        assert_eq!(path_segment("page_id", "a b").unwrap(), "a%20b");
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        assert!(matches!(
            path_segment("page_id", ".."),
            Err(ResourceError::InvalidIdentifier { field: "page_id", ref value }) if value == ".."
        ));
        assert!(matches!(
            path_segment("zone_id", "."),
            Err(ResourceError::InvalidIdentifier { field: "zone_id", .. })
        ));
        assert_eq!(path_segment("page_id", "...").unwrap(), "...");
        assert_eq!(path_segment("page_id", "a..b").unwrap(), "a..b");
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        assert!(matches!(
            path_segment("zone_id", ""),
            Err(ResourceError::MissingIdentifier { field: "zone_id" })
        ));
        assert!(matches!(
            path_segment("page_id", "  "),
            Err(ResourceError::MissingIdentifier { field: "page_id" })
        ));
    }
}
