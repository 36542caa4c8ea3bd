//! REST resource infrastructure for the Cloudflare v4 API.
//!
//! This module provides what every resource binding shares:
//!
//! - **[`Response<T>`]**: The standard `success`/`errors`/`messages`/`result` envelope
//! - **[`ResourceError`]**: Request and decode failures, tagged with their origin
//! - **[`path_segment`]**: Validation and encoding of caller-supplied identifiers
//!
//! Individual resources live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_api::{CloudflareConfig, Credentials, ApiToken, HttpClient};
//! use cloudflare_api::rest::resources::{CustomPage, CustomPageScope};
//!
//! let config = CloudflareConfig::builder()
//!     .credentials(Credentials::token(ApiToken::new("token")?))
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! for page in CustomPage::list(&client, &CustomPageScope::zone(zone_id)).await? {
//!     println!("{}: {}", page.id, page.state);
//! }
//! ```

mod errors;
mod path;
mod response;
pub mod resources;

pub use errors::{ResourceError, REQUEST_ERROR_CONTEXT, UNMARSHAL_ERROR_CONTEXT};
pub use path::path_segment;
pub use response::{Response, ResponseInfo, ResultInfo};
