//! # Cloudflare API Rust Client
//!
//! A Rust client for the Cloudflare v4 API, providing type-safe configuration,
//! authentication handling, and an HTTP request layer shared by typed
//! resource bindings.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CloudflareConfig`] and [`CloudflareConfigBuilder`]
//! - Validated newtypes for API credentials and the API base URL
//! - API token, global API key, and user service key authentication via [`Credentials`]
//! - Async HTTP client with client-side rate limiting and retry logic
//! - Resource bindings for custom pages via [`CustomPage`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudflare_api::{ApiToken, CloudflareConfig, Credentials};
//!
//! // Create configuration using the builder pattern
//! let config = CloudflareConfig::builder()
//!     .credentials(Credentials::token(ApiToken::new("your-api-token").unwrap()))
//!     .user_agent_prefix("my-app/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.cloudflare.com/client/v4");
//! ```
//!
//! ## Custom Pages
//!
//! ```rust,ignore
//! use cloudflare_api::{CustomPage, CustomPageScope, CustomPageState, HttpClient};
//!
//! let client = HttpClient::new(&config)?;
//! let scope = CustomPageScope::zone("023e105f4ecef8ad9ca31a8372d0c353");
//!
//! for page in CustomPage::list(&client, &scope).await? {
//!     println!("{} ({})", page.id, page.state);
//! }
//!
//! let page = CustomPage {
//!     url: "https://example.com/errors/500.html".to_string(),
//!     state: CustomPageState::Customized,
//!     ..Default::default()
//! };
//! CustomPage::update(&client, &scope, "500_errors", &page).await?;
//! ```
//!
//! ## Making Raw Requests
//!
//! ```rust,ignore
//! use cloudflare_api::{HttpClient, HttpMethod, HttpRequest};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/user/tokens/verify")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! println!("cf-ray: {:?}", response.ray_id());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Swappable transport**: Bindings are written against [`ApiRequester`]

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    ApiEmail, ApiKey, ApiToken, BaseUrl, CloudflareConfig, CloudflareConfigBuilder,
    UserServiceKey,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiErrorKind, ApiRequester, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};

// Re-export resource types
pub use rest::resources::{CustomPage, CustomPageScope, CustomPageState};
pub use rest::ResourceError;
