//! Integration tests for the HTTP client functionality.
//!
//! These tests verify header injection, request building, response parsing,
//! and retry behavior against a mock server.

use cloudflare_api::clients::{ApiErrorKind, ApiRequester, SDK_VERSION};
use cloudflare_api::{
    ApiEmail, ApiKey, ApiToken, BaseUrl, CloudflareConfig, Credentials, HttpClient, HttpError,
    HttpMethod, HttpRequest, InvalidHttpRequestError, UserServiceKey,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer, credentials: Credentials) -> CloudflareConfig {
    CloudflareConfig::builder()
        .credentials(credentials)
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .min_backoff(Duration::from_millis(1))
        .max_backoff(Duration::from_millis(5))
        .rate_limit(1000)
        .build()
        .unwrap()
}

fn token() -> Credentials {
    Credentials::token(ApiToken::new("test-token").unwrap())
}

// ============================================================================
// Header Injection
// ============================================================================

#[tokio::test]
async fn test_token_request_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .and(header(
            "User-Agent",
            format!("cloudflare-api-rust/{SDK_VERSION}").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&server, token())).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/user/tokens/verify")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_global_key_request_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(header("X-Auth-Key", "global-key"))
        .and(header("X-Auth-Email", "user@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::key(
        ApiKey::new("global-key").unwrap(),
        ApiEmail::new("user@example.com").unwrap(),
    );
    let client = HttpClient::new(&create_config(&server, credentials)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/zones")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_user_service_key_request_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/certificates"))
        .and(header("X-Auth-User-Service-Key", "v1.0-origin-ca-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::user_service_key(UserServiceKey::new("v1.0-origin-ca-key").unwrap());
    let client = HttpClient::new(&create_config(&server, credentials)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/certificates")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_configured_and_per_request_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(header("X-Team", "edge"))
        .and(header("X-Request-Id", "abc-123"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = CloudflareConfig::builder()
        .credentials(token())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .header("X-Team", "edge")
        .rate_limit(1000)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/zones")
        .query_param("per_page", "50")
        .header("X-Request-Id", "abc-123")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

// ============================================================================
// Request Bodies
// ============================================================================

#[tokio::test]
async fn test_make_request_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/zones/abc/settings/always_online"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"value": "on"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":{"value":"on"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&server, token())).unwrap();
    let body = client
        .make_request(
            HttpMethod::Patch,
            "/zones/abc/settings/always_online",
            Some(json!({"value": "on"})),
        )
        .await
        .unwrap();

    assert_eq!(body, br#"{"result":{"value":"on"}}"#);
}

#[tokio::test]
async fn test_get_request_has_no_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("Content-Type"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&server, token())).unwrap();
    client
        .make_request(HttpMethod::Get, "/zones", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_make_request_put_without_body_is_invalid() {
    let server = MockServer::start().await;

    let client = HttpClient::new(&create_config(&server, token())).unwrap();
    let result = client.make_request(HttpMethod::Put, "/zones/abc", None).await;

    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(
            InvalidHttpRequestError::MissingBody { .. }
        ))
    ));
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_forbidden_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones/abc"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("cf-ray", "8a1b2c3d4e5f6071-LHR")
                .set_body_json(json!({
                    "success": false,
                    "errors": [
                        {"code": 9109, "message": "Unauthorized to access requested resource"}
                    ],
                    "messages": [],
                    "result": null
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&server, token())).unwrap();
    let error = client
        .make_request(HttpMethod::Get, "/zones/abc", None)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(403));
    assert_eq!(error.ray_id(), Some("8a1b2c3d4e5f6071-LHR"));

    let HttpError::Response(response) = &error else {
        panic!("expected a response error, got {error:?}");
    };
    assert_eq!(response.kind(), ApiErrorKind::Authorization);
    assert_eq!(response.error_codes(), vec![9109]);
}

#[tokio::test]
async fn test_error_without_envelope_uses_body_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no route for that URI"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&server, token())).unwrap();
    let error = client
        .make_request(HttpMethod::Get, "/nowhere", None)
        .await
        .unwrap_err();

    let HttpError::Response(response) = &error else {
        panic!("expected a response error, got {error:?}");
    };
    assert!(response.errors.is_empty());
    assert_eq!(response.message, "no route for that URI");
}

#[tokio::test]
async fn test_zero_retries_returns_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = CloudflareConfig::builder()
        .credentials(token())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .max_retries(0)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    let error = client
        .make_request(HttpMethod::Get, "/zones", None)
        .await
        .unwrap_err();

    let HttpError::Response(response) = &error else {
        panic!("expected a response error, got {error:?}");
    };
    assert_eq!(response.code, 503);
    assert_eq!(response.message, "Service Unavailable");
}

#[tokio::test]
async fn test_retries_are_counted_per_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let config = CloudflareConfig::builder()
        .credentials(token())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .max_retries(2)
        .min_backoff(Duration::from_millis(1))
        .max_backoff(Duration::from_millis(2))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    let error = client
        .make_request(HttpMethod::Get, "/zones", None)
        .await
        .unwrap_err();

    let HttpError::MaxRetries(exhausted) = &error else {
        panic!("expected retries to be exhausted, got {error:?}");
    };
    assert_eq!(exhausted.retries, 2);
    assert_eq!(exhausted.code, 500);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let config = CloudflareConfig::builder()
        .credentials(token())
        .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
        .max_retries(0)
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let error = client
        .make_request(HttpMethod::Get, "/zones", None)
        .await
        .unwrap_err();

    assert!(matches!(error, HttpError::Network(_)));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_timed_out_attempt_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let config = CloudflareConfig::builder()
        .credentials(token())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .max_retries(1)
        .min_backoff(Duration::from_millis(1))
        .max_backoff(Duration::from_millis(2))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let body = client
        .make_request(HttpMethod::Get, "/zones", None)
        .await
        .unwrap();

    assert_eq!(body, br#"{"result":[]}"#);
}
