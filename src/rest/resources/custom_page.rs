//! Custom page resource implementation.
//!
//! Custom pages replace Cloudflare's built-in error and challenge pages
//! (e.g. `500_errors`, `basic_challenge`, `waf_block`) with a page hosted by
//! the customer. They are configured per zone or per account.
//!
//! # Endpoints
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | [`CustomPage::list`] | `GET` | `/zones/{zone_id}/custom_pages` |
//! | [`CustomPage::details`] | `GET` | `/zones/{zone_id}/custom_pages/{id}` |
//! | [`CustomPage::update`] | `PUT` | `/zones/{zone_id}/custom_pages/{id}` |
//!
//! The same paths exist under `/accounts/{account_id}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_api::rest::resources::{CustomPage, CustomPageScope, CustomPageState};
//!
//! let scope = CustomPageScope::zone("023e105f4ecef8ad9ca31a8372d0c353");
//!
//! // List pages
//! let pages = CustomPage::list(&client, &scope).await?;
//!
//! // Fetch one
//! let page = CustomPage::details(&client, &scope, "500_errors").await?;
//!
//! // Point it at our own page
//! let page = CustomPage {
//!     url: "https://example.com/errors/500.html".to_string(),
//!     state: CustomPageState::Customized,
//!     ..Default::default()
//! };
//! let updated = CustomPage::update(&client, &scope, "500_errors", &page).await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clients::{ApiRequester, HttpMethod};
use crate::rest::response::null_as_default;
use crate::rest::{path_segment, ResourceError, Response};

/// Whether a custom page is in use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CustomPageState {
    /// Cloudflare's built-in page is served.
    #[default]
    Default,
    /// The page at `url` is served.
    Customized,
    /// A state this client does not know about.
    Other(String),
}

impl CustomPageState {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Customized => "customized",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for CustomPageState {
    fn from(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "customized" => Self::Customized,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CustomPageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CustomPageState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CustomPageState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.as_deref().map_or(Self::Default, Self::from))
    }
}

/// A custom error or challenge page.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - The page identifier (e.g. `500_errors`)
/// - `description` - What the page is used for
/// - `preview_target` - Target used by the dashboard preview
/// - `required_tokens` - Placeholders the hosted page must contain
/// - `created_on` / `modified_on` - Timestamps
///
/// ## Writable Fields
/// - `url` - Where the customized page is hosted
/// - `state` - Whether the customized page is in use
///
/// Read-only fields are skipped when the page is sent in an update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomPage {
    /// The page identifier.
    /// Read-only field.
    #[serde(default, skip_serializing, deserialize_with = "null_as_default")]
    pub id: String,

    /// The URL of the customer-hosted page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Whether the customized page is in use.
    #[serde(default)]
    pub state: CustomPageState,

    /// What the page is used for.
    /// Read-only field.
    #[serde(default, skip_serializing, deserialize_with = "null_as_default")]
    pub description: String,

    /// Target used by the dashboard preview.
    /// Read-only field.
    #[serde(default, skip_serializing, deserialize_with = "null_as_default")]
    pub preview_target: String,

    /// Placeholders (e.g. `::CAPTCHA_BOX::`) the hosted page must contain.
    /// Read-only field.
    #[serde(default, skip_serializing, deserialize_with = "null_as_default")]
    pub required_tokens: Vec<String>,

    /// When the page was created.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub created_on: Option<DateTime<Utc>>,

    /// When the page was last modified.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub modified_on: Option<DateTime<Utc>>,
}

/// The API response containing a list of custom pages.
pub type CustomPagesResponse = Response<Vec<CustomPage>>;

/// The API response containing a single custom page.
pub type CustomPageDetailResponse = Response<CustomPage>;

/// Where a custom page is configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomPageScope {
    /// Pages of a single zone.
    Zone(String),
    /// Pages shared by every zone of an account.
    Account(String),
}

impl CustomPageScope {
    /// Targets the pages of a zone.
    #[must_use]
    pub fn zone(zone_id: impl Into<String>) -> Self {
        Self::Zone(zone_id.into())
    }

    /// Targets the pages of an account.
    #[must_use]
    pub fn account(account_id: impl Into<String>) -> Self {
        Self::Account(account_id.into())
    }

    /// Returns `/zones/{id}` or `/accounts/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if the id is empty and
    /// [`ResourceError::InvalidIdentifier`] if it is `.` or `..`.
    pub fn base_path(&self) -> Result<String, ResourceError> {
        match self {
            Self::Zone(id) => Ok(format!("/zones/{}", path_segment("zone_id", id)?)),
            Self::Account(id) => Ok(format!("/accounts/{}", path_segment("account_id", id)?)),
        }
    }

    /// Returns the URI listing custom pages in this scope.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if the scope id is empty.
    pub fn custom_pages_uri(&self) -> Result<String, ResourceError> {
        Ok(self.base_path()? + "/custom_pages")
    }

    /// Returns the URI of one custom page in this scope.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if the scope id or
    /// `page_id` is empty and [`ResourceError::InvalidIdentifier`] if either
    /// is `.` or `..`.
    pub fn custom_page_uri(&self, page_id: &str) -> Result<String, ResourceError> {
        let page_id = path_segment("page_id", page_id)?;
        Ok(format!("{}/{page_id}", self.custom_pages_uri()?))
    }
}

impl CustomPage {
    /// Lists the custom pages of a zone or account.
    ///
    /// `GET /zones/{zone_id}/custom_pages`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Request`] if the request fails and
    /// [`ResourceError::Unmarshal`] if the response is not a list of pages.
    pub async fn list<R: ApiRequester>(
        client: &R,
        scope: &CustomPageScope,
    ) -> Result<Vec<Self>, ResourceError> {
        let uri = scope.custom_pages_uri()?;
        let res = client.make_request(HttpMethod::Get, &uri, None).await?;
        let r = CustomPagesResponse::from_slice(&res)?;
        Ok(r.into_result())
    }

    /// Returns the details of one custom page.
    ///
    /// `GET /zones/{zone_id}/custom_pages/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Request`] if the request fails and
    /// [`ResourceError::Unmarshal`] if the response is not a page.
    pub async fn details<R: ApiRequester>(
        client: &R,
        scope: &CustomPageScope,
        page_id: &str,
    ) -> Result<Self, ResourceError> {
        let uri = scope.custom_page_uri(page_id)?;
        let res = client.make_request(HttpMethod::Get, &uri, None).await?;
        let r = CustomPageDetailResponse::from_slice(&res)?;
        Ok(r.into_result())
    }

    /// Updates a custom page and returns the stored result.
    ///
    /// `PUT /zones/{zone_id}/custom_pages/{id}`
    ///
    /// Only the writable fields (`url`, `state`) of `page` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Request`] if the request fails and
    /// [`ResourceError::Unmarshal`] if the response is not a page.
    pub async fn update<R: ApiRequester>(
        client: &R,
        scope: &CustomPageScope,
        page_id: &str,
        page: &Self,
    ) -> Result<Self, ResourceError> {
        let uri = scope.custom_page_uri(page_id)?;
        let body = serde_json::to_value(page)?;
        let res = client.make_request(HttpMethod::Put, &uri, Some(body)).await?;
        let r = CustomPageDetailResponse::from_slice(&res)?;
        Ok(r.into_result())
    }
}
