//! Integration tests for configuration and client construction.

use cloudflare_api::{
    ApiEmail, ApiKey, ApiToken, BaseUrl, CloudflareConfig, ConfigError, Credentials,
    CustomPage, CustomPageScope, HttpClient,
};
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = CloudflareConfig::builder()
        .credentials(Credentials::token(ApiToken::new("token").unwrap()))
        .build()
        .unwrap();

    assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.min_backoff(), Duration::from_secs(1));
    assert_eq!(config.max_backoff(), Duration::from_secs(30));
    assert_eq!(config.rate_limit().get(), 4);
    assert!(config.user_agent_prefix().is_none());
    assert!(config.extra_headers().is_empty());
}

#[test]
fn test_config_requires_credentials() {
    let result = CloudflareConfig::builder().build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "credentials"
        })
    ));
}

#[test]
fn test_config_rejects_invalid_settings() {
    let credentials = || Credentials::token(ApiToken::new("token").unwrap());

    let result = CloudflareConfig::builder()
        .credentials(credentials())
        .rate_limit(0)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidRateLimit { .. })));

    let result = CloudflareConfig::builder()
        .credentials(credentials())
        .min_backoff(Duration::from_secs(10))
        .max_backoff(Duration::from_secs(1))
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidBackoff {
            min_ms: 10_000,
            max_ms: 1_000
        })
    ));
}

#[test]
fn test_secrets_never_appear_in_debug_output() {
    let config = CloudflareConfig::builder()
        .credentials(Credentials::key(
            ApiKey::new("super-secret-global-key").unwrap(),
            ApiEmail::new("user@example.com").unwrap(),
        ))
        .build()
        .unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-global-key"));

    let client = HttpClient::new(&config).unwrap();
    assert_eq!(
        client.default_headers().get("X-Auth-Key").map(String::as_str),
        Some("super-secret-global-key")
    );
}

#[test]
fn test_invalid_values_fail_fast() {
    assert!(matches!(
        ApiToken::new("   "),
        Err(ConfigError::EmptyCredential { .. })
    ));
    assert!(matches!(
        ApiEmail::new("not-an-email"),
        Err(ConfigError::InvalidEmail { .. })
    ));
    assert!(matches!(
        BaseUrl::new("ftp://api.cloudflare.com"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn test_custom_page_uris_are_built_from_scope() {
    let scope = CustomPageScope::zone("023e105f4ecef8ad9ca31a8372d0c353");
    assert_eq!(
        scope.custom_page_uri("ratelimit_block").unwrap(),
        "/zones/023e105f4ecef8ad9ca31a8372d0c353/custom_pages/ratelimit_block"
    );
}

#[test]
fn test_public_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<CloudflareConfig>();
    assert_send_sync::<HttpClient>();
    assert_send_sync::<CustomPage>();
    assert_send_sync::<CustomPageScope>();
}
