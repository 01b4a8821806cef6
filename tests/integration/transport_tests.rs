//! REST transport behavior against a live HTTP server.

use std::time::Duration;

use pocketbase_bootstrap::transport::{Method, RestTransport, TransportClient};
use pocketbase_bootstrap::{Client, ErrorKind};
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::FakePocketBase;

fn transport(pb: &FakePocketBase) -> RestTransport {
    RestTransport::builder()
        .base_url(pb.api_url())
        .expect("base url should parse")
        .timeout(Duration::from_secs(5))
        .build()
        .expect("transport should build")
}

#[tokio::test]
async fn test_health_under_api_prefix() {
    let pb = FakePocketBase::healthy().await;

    let report = pb.client().health().require_healthy().await.expect("instance is healthy");

    assert_eq!(report.status, 200);
    assert_eq!(report.message, "API is healthy.");
    assert_eq!(pb.received("GET", "/api/health").await.len(), 1);
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let pb = FakePocketBase::healthy().await;
    let client = Client::builder()
        .url(format!("{}/", pb.api_url()))
        .build()
        .expect("client should build");

    assert!(client.health().check_healthy().await);
}

#[tokio::test]
async fn test_every_request_declares_json() {
    let pb = FakePocketBase::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&pb.server)
        .await;

    let response = transport(&pb)
        .request(Method::Get, "/health", None, None)
        .await
        .expect("request should complete");
    assert!(response.is_ok());
}

#[test_case("get", 200 ; "lowercase get")]
#[test_case("POST", 201 ; "post")]
#[test_case("Patch", 200 ; "mixed case patch")]
#[tokio::test]
async fn test_dispatch_supported_methods(verb: &str, status: u16) {
    let pb = FakePocketBase::start().await;
    Mock::given(method(verb.to_uppercase().as_str()))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&pb.server)
        .await;

    let response = transport(&pb)
        .dispatch(verb, "/collections", Some(&json!({})), None)
        .await
        .expect("request should complete");
    assert_eq!(response.status, status);
}

#[test_case("DELETE" ; "delete")]
#[test_case("PUT" ; "put")]
#[test_case("" ; "empty")]
#[tokio::test]
async fn test_dispatch_rejects_other_methods(verb: &str) {
    let pb = FakePocketBase::start().await;

    let err = transport(&pb)
        .dispatch(verb, "/collections", None, None)
        .await
        .expect_err("method should be rejected");

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.message().contains("Unknown method"));
    assert!(pb.server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_error_status_keeps_body() {
    let pb = FakePocketBase::start().await;
    Mock::given(method("POST"))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "message": "Failed to create collection.",
            "data": {}
        })))
        .mount(&pb.server)
        .await;

    let response = transport(&pb)
        .request(Method::Post, "/collections", Some(&json!({"name": "x"})), None)
        .await
        .expect("status is not an error");

    assert_eq!(response.status, 400);
    assert_eq!(response.error_message(), "Failed to create collection.");
    assert!(response.text.contains("\"code\":400"));
}

#[tokio::test]
async fn test_slow_instance_times_out() {
    let pb = FakePocketBase::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&pb.server)
        .await;

    let client = Client::builder()
        .url(pb.api_url())
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client should build");
    let err = client.health().probe().await.expect_err("probe should time out");

    assert_eq!(err.kind(), ErrorKind::Timeout);
}

#[test_case("localhost:4002/api" ; "missing scheme")]
#[test_case("ftp://localhost/api" ; "unsupported scheme")]
#[test_case("not a url" ; "garbage")]
fn test_rejects_unusable_base_urls(url: &str) {
    let err = Client::builder().url(url).build().expect_err("url should be rejected");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
