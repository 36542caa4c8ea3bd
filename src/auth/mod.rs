//! Authentication types for the Cloudflare API client.
//!
//! # Overview
//!
//! - [`Credentials`]: One of the three authentication schemes Cloudflare accepts
//!
//! # Schemes
//!
//! - **API token**: scoped token sent as `Authorization: Bearer <token>`
//! - **Global API key**: legacy key sent as `X-Auth-Key` together with `X-Auth-Email`
//! - **User service key**: Origin CA key sent as `X-Auth-User-Service-Key`
//!
//! # Example
//!
//! ```rust
//! use cloudflare_api::{ApiEmail, ApiKey, Credentials};
//!
//! let credentials = Credentials::key(
//!     ApiKey::new("global-key").unwrap(),
//!     ApiEmail::new("user@example.com").unwrap(),
//! );
//!
//! assert_eq!(credentials.scheme(), "api_key");
//! ```

mod credentials;

pub use credentials::{
    Credentials, AUTHORIZATION_HEADER, AUTH_EMAIL_HEADER, AUTH_KEY_HEADER,
    USER_SERVICE_KEY_HEADER,
};
