//! Tests for the HTTP client module

use super::*;
use crate::error::{Error, FetchErrorKind};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("people-pager/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://swapi.dev")
        .timeout(Duration::from_secs(5))
        .header("Accept", "application/json")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://swapi.dev".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://swapi.dev/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("/api/people/"),
        "https://swapi.dev/api/people/"
    );
    assert_eq!(
        client.build_url("api/people/"),
        "https://swapi.dev/api/people/"
    );
    assert_eq!(
        client.build_url("https://other.example/api/people/?page=2"),
        "https://other.example/api/people/?page=2"
    );
}

#[tokio::test]
async fn test_http_client_get_json_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "results": [{"name": "C-3PO"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client
        .get_json("/api/people/", &[("page", "2")])
        .await
        .unwrap();

    assert_eq!(data["results"][0]["name"], "C-3PO");
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("Accept", "application/json")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let data: serde_json::Value = client.get_json("/api/people/", &[]).await.unwrap();

    assert_eq!(data["ok"], true);
}

#[tokio::test]
async fn test_http_client_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/api/people/", &[])
        .await
        .unwrap_err();

    match &err {
        Error::HttpStatus { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
    assert_eq!(err.kind(), FetchErrorKind::Server);
}

#[tokio::test]
async fn test_http_client_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .get_json::<serde_json::Value>("/api/people/", &[])
        .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 503, .. })));
}

#[tokio::test]
async fn test_http_client_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/api/people/", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.kind(), FetchErrorKind::Decode);
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/api/slow", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
    assert_eq!(err.kind(), FetchErrorKind::Transport);
}

#[tokio::test]
async fn test_http_client_connection_refused() {
    // Port 9 (discard) is not expected to accept HTTP connections locally
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .get_json::<serde_json::Value>("/api/people/", &[])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Transport);
}
