//! HTTP client behavior against a mock server: envelope unwrapping,
//! auth headers, and the unauthorized hook.

mod common;

use billfold::api::{ApiClient, ApiError};
use billfold::session::SessionStore;

use common::mock_server::{MockResponse, MockServer};
use common::{build_client, test_config, unauthorized_count};

#[tokio::test]
async fn get_unwraps_the_envelope_and_sends_headers() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    tc.session
        .set_auth("token-1".to_string(), "user123".to_string())
        .expect("persist auth");
    server
        .enqueue(MockResponse::ok(
            r#"{"id": 7, "username": "user123", "nickName": "Sam"}"#,
        ))
        .await;

    let data: Option<serde_json::Value> = tc
        .client
        .get("user/info", &[])
        .await
        .expect("request succeeds");

    assert_eq!(data.expect("payload")["nickName"], "Sam");
    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/dev-api/app/user/info");
    assert_eq!(requests[0].header("authorization"), Some("Bearer token-1"));
    assert!(requests[0]
        .header("x-request-id")
        .is_some_and(|id| !id.is_empty()));
    assert_eq!(unauthorized_count(&tc), 0);
}

#[tokio::test]
async fn signed_out_requests_skip_the_bearer_header() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::ok(r#"{"uuid": "u-1", "img": "aGVsbG8="}"#))
        .await;

    let _: Option<serde_json::Value> = tc
        .client
        .get("captchaImage", &[])
        .await
        .expect("request succeeds");

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn business_rejection_carries_the_server_message() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::rejection(500, "captcha mismatch"))
        .await;

    let result: Result<Option<serde_json::Value>, _> = tc.client.post("login", &()).await;

    match result {
        Err(ApiError::Server { code, message }) => {
            assert_eq!(code, 500);
            assert_eq!(message, "captcha mismatch");
        }
        other => panic!("Expected Server, got {:?}", other),
    }
    assert_eq!(unauthorized_count(&tc), 0);
}

#[tokio::test]
async fn envelope_401_maps_to_unauthorized_and_fires_the_hook_once() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::rejection(401, "token expired"))
        .await;

    let result: Result<Option<serde_json::Value>, _> = tc.client.get("bill/list", &[]).await;

    match result {
        Err(ApiError::Unauthorized { message }) => assert_eq!(message, "token expired"),
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
    assert_eq!(unauthorized_count(&tc), 1);
}

#[tokio::test]
async fn bare_http_401_fires_the_hook_too() {
    let server = MockServer::start().await;
    let tc = build_client(&server);
    server
        .enqueue(MockResponse::http(401, r#"{"error": "no token"}"#))
        .await;

    let result: Result<Option<serde_json::Value>, _> = tc.client.get("bill/list", &[]).await;

    match result {
        Err(ApiError::Unauthorized { message }) => assert_eq!(message, "Session expired"),
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
    assert_eq!(unauthorized_count(&tc), 1);
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("create temp dir");
    let session = SessionStore::load_or_default(&dir.path().join("session.toml"));
    let mut config = test_config(&server);
    config.server.request_timeout_secs = 1;
    let client = ApiClient::new(&config, session, || {}).expect("build client");
    server
        .enqueue(MockResponse::ok_empty().with_delay(2500))
        .await;

    let result: Result<Option<serde_json::Value>, _> = client.get("bill/list", &[]).await;

    assert!(matches!(result, Err(ApiError::Timeout)));
}
