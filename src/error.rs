//! Error types for the Cloudflare API client.
//!
//! This module contains error types used throughout the crate for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyCredential { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A credential value was empty.
    #[error("{credential} cannot be empty. Please provide a valid Cloudflare {credential}.")]
    EmptyCredential {
        /// Which credential was empty (e.g. "API token").
        credential: &'static str,
    },

    /// The account email used with a global API key is invalid.
    #[error("Invalid account email '{email}'. Expected an address of the form 'user@example.com'.")]
    InvalidEmail {
        /// The invalid email that was provided.
        email: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid http(s) URL (e.g., 'https://api.cloudflare.com/client/v4').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The client-side rate limit must allow at least one request per second.
    #[error("Invalid rate limit: {reason}")]
    InvalidRateLimit {
        /// The reason the rate limit is invalid.
        reason: String,
    },

    /// Backoff bounds are inconsistent.
    #[error("Invalid retry backoff: minimum {min_ms}ms exceeds maximum {max_ms}ms")]
    InvalidBackoff {
        /// Minimum backoff in milliseconds.
        min_ms: u128,
        /// Maximum backoff in milliseconds.
        max_ms: u128,
    },
}
