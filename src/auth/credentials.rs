//! Credentials and authentication header injection.
//!
//! Cloudflare accepts three mutually exclusive authentication schemes. The
//! [`Credentials`] enum captures exactly one of them and knows which headers
//! it contributes to a request.

use crate::config::{ApiEmail, ApiKey, ApiToken, UserServiceKey};

/// Header carrying a scoped API token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Header carrying a global API key.
pub const AUTH_KEY_HEADER: &str = "X-Auth-Key";
/// Header carrying the account email paired with a global API key.
pub const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";
/// Header carrying an Origin CA user service key.
pub const USER_SERVICE_KEY_HEADER: &str = "X-Auth-User-Service-Key";

/// Authentication credentials for the Cloudflare API.
///
/// # Example
///
/// ```rust
/// use cloudflare_api::{ApiToken, Credentials};
///
/// let credentials = Credentials::token(ApiToken::new("abc123").unwrap());
/// let headers = credentials.headers();
///
/// assert_eq!(headers, vec![("Authorization", "Bearer abc123".to_string())]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// A scoped API token (recommended).
    Token(ApiToken),

    /// A legacy global API key with its account email.
    Key {
        /// The global API key.
        key: ApiKey,
        /// The account email.
        email: ApiEmail,
    },

    /// An Origin CA user service key.
    UserServiceKey(UserServiceKey),
}

impl Credentials {
    /// Creates token credentials.
    #[must_use]
    pub const fn token(token: ApiToken) -> Self {
        Self::Token(token)
    }

    /// Creates global API key credentials.
    #[must_use]
    pub const fn key(key: ApiKey, email: ApiEmail) -> Self {
        Self::Key { key, email }
    }

    /// Creates Origin CA user service key credentials.
    #[must_use]
    pub const fn user_service_key(key: UserServiceKey) -> Self {
        Self::UserServiceKey(key)
    }

    /// Returns a short, non-secret name for the scheme, for logging.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::Token(_) => "api_token",
            Self::Key { .. } => "api_key",
            Self::UserServiceKey(_) => "user_service_key",
        }
    }

    /// Returns the headers these credentials add to every request.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Token(token) => {
                vec![(AUTHORIZATION_HEADER, format!("Bearer {}", token.as_ref()))]
            }
            Self::Key { key, email } => vec![
                (AUTH_KEY_HEADER, key.as_ref().to_string()),
                (AUTH_EMAIL_HEADER, email.as_ref().to_string()),
            ],
            Self::UserServiceKey(key) => {
                vec![(USER_SERVICE_KEY_HEADER, key.as_ref().to_string())]
            }
        }
    }
}
