//! Resource bindings for Cloudflare v4 endpoints.
//!
//! Each binding is a plain data struct with async associated functions that
//! take any [`ApiRequester`](crate::clients::ApiRequester), typically an
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Available Resources
//!
//! ## Custom Pages
//!
//! Customer-hosted replacements for Cloudflare's error and challenge pages.
//!
//! ```rust,ignore
//! use cloudflare_api::rest::resources::{CustomPage, CustomPageScope};
//!
//! let scope = CustomPageScope::zone(zone_id);
//! let pages = CustomPage::list(&client, &scope).await?;
//! let page = CustomPage::details(&client, &scope, "500_errors").await?;
//! ```

pub mod custom_page;

pub use custom_page::{
    CustomPage, CustomPageDetailResponse, CustomPageScope, CustomPageState, CustomPagesResponse,
};
