//! End-to-end provisioning runs against a fake instance.

use pocketbase_bootstrap::catalog::{BEHAVIORS, CLASSES, USERS};
use pocketbase_bootstrap::{
    AdminCredentials, CATALOG, Client, ErrorKind, Inventory, Outcome, Presence, Provisioner,
};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::FakePocketBase;

#[tokio::test]
async fn test_fresh_instance_gets_all_collections() {
    let pb = FakePocketBase::healthy().await;
    pb.mount_listing(&[]).await;
    pb.mount_accept_all().await;

    let report = Provisioner::new(pb.client()).run().await.expect("run should complete");

    assert_eq!(report.created(), 3);
    assert!(report.is_success());
    assert_eq!(pb.posted_names().await, ["users", "behaviors", "classes"]);
}

#[tokio::test]
async fn test_second_run_is_a_no_op() {
    let pb = FakePocketBase::healthy().await;
    pb.mount_listing(&[]).await;
    pb.mount_accept_all().await;
    Provisioner::new(pb.client()).run().await.expect("first run should complete");

    // The instance now holds all three collections.
    pb.server.reset().await;
    pb.mount_health(200).await;
    pb.mount_listing(&["users", "behaviors", "classes"]).await;
    Mock::given(method("POST"))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&pb.server)
        .await;

    let report = Provisioner::new(pb.client()).run().await.expect("second run should complete");

    assert_eq!(report.already_present(), 3);
    assert_eq!(report.created(), 0);
    assert!(pb.posted_names().await.is_empty());
}

#[tokio::test]
async fn test_partially_provisioned_instance() {
    let pb = FakePocketBase::healthy().await;
    pb.mount_listing(&["users", "_pb_users_auth_"]).await;
    pb.mount_accept_all().await;

    let report = Provisioner::new(pb.client()).run().await.expect("run should complete");

    assert_eq!(report.outcome("users").map(|o| &o.outcome), Some(&Outcome::AlreadyPresent));
    assert_eq!(pb.posted_names().await, ["behaviors", "classes"]);
}

#[tokio::test]
async fn test_summary_lists_every_collection() {
    let pb = FakePocketBase::healthy().await;
    Mock::given(method("GET"))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"name": "users"}]})))
        .mount(&pb.server)
        .await;
    pb.mount_accept_all().await;

    let report = Provisioner::new(pb.client()).run().await.expect("run should complete");
    let summary = report.to_string();

    assert!(summary.starts_with(&format!("Summary for {}", pb.api_url())));
    assert!(summary.contains("✓ users: already present"));
    assert!(summary.contains("✓ behaviors: created"));
    assert!(summary.contains("✓ classes: created"));
    assert!(summary.ends_with("3 collections: 2 created, 1 already present, 0 failed"));
}

#[tokio::test]
async fn test_one_failure_does_not_stop_the_rest() {
    let pb = FakePocketBase::healthy().await;
    pb.mount_listing(&["users"]).await;
    Mock::given(method("POST"))
        .and(path("/api/collections"))
        .and(body_partial_json(json!({"name": "behaviors"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "message": "Failed to create collection.",
            "data": {"name": {"code": "validation_collection_name_exists"}}
        })))
        .mount(&pb.server)
        .await;
    pb.mount_accept_all().await;

    let report = Provisioner::new(pb.client()).run().await.expect("run should complete");

    let behaviors = &report.outcome("behaviors").expect("behaviors outcome").outcome;
    assert!(matches!(
        behaviors,
        Outcome::Failed(reason)
            if reason.status == Some(400) && reason.message.contains("Failed to create collection.")
    ));
    assert!(report.outcome("classes").expect("classes outcome").outcome.is_created());
    assert_eq!(report.failed(), 1);
    assert!(!report.is_success());
    assert_eq!(pb.posted_names().await, ["behaviors", "classes"]);
}

#[tokio::test]
async fn test_auth_protected_listing_attempts_every_collection() {
    let pb = FakePocketBase::healthy().await;
    pb.mount_locked_listing().await;
    pb.mount_accept_all().await;

    let report = Provisioner::new(pb.client()).run().await.expect("run should complete");

    assert_eq!(report.inventory, Inventory::Unknown);
    assert!(report.outcomes.iter().all(|o| o.presence == Presence::Unknown));
    assert_eq!(pb.posted_names().await, ["users", "behaviors", "classes"]);
}

#[tokio::test]
async fn test_auth_protected_existing_collections_fail_individually() {
    let pb = FakePocketBase::healthy().await;
    pb.mount_locked_listing().await;
    Mock::given(method("POST"))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "message": "Failed to create collection.",
            "data": {}
        })))
        .mount(&pb.server)
        .await;

    let report = Provisioner::new(pb.client()).run().await.expect("run should complete");

    assert_eq!(report.failed(), 3);
    assert_eq!(pb.posted_names().await.len(), 3);
}

#[tokio::test]
async fn test_unhealthy_instance_is_left_untouched() {
    let pb = FakePocketBase::start().await;
    pb.mount_health(500).await;
    Mock::given(method("GET"))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&pb.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&pb.server)
        .await;

    let err = Provisioner::new(pb.client()).run().await.expect_err("run should abort");

    assert_eq!(err.kind(), ErrorKind::Unhealthy);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_unreachable_instance_aborts() {
    let pb = FakePocketBase::start().await;
    let url = pb.api_url();
    drop(pb);

    let client = Client::builder().url(url).build().expect("client should build");
    let err = Provisioner::new(client).run().await.expect_err("run should abort");

    assert_eq!(err.kind(), ErrorKind::Unhealthy);
}

#[tokio::test]
async fn test_forbidden_listing_aborts() {
    let pb = FakePocketBase::healthy().await;
    Mock::given(method("GET"))
        .and(path("/api/collections"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&pb.server)
        .await;
    pb.mount_accept_all().await;

    let err = Provisioner::new(pb.client()).run().await.expect_err("run should abort");

    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert!(pb.posted_names().await.is_empty());
}

#[tokio::test]
async fn test_creation_bodies_match_catalog() {
    let pb = FakePocketBase::healthy().await;
    pb.mount_listing(&[]).await;
    for spec in [&USERS, &BEHAVIORS, &CLASSES] {
        Mock::given(method("POST"))
            .and(path("/api/collections"))
            .and(header("content-type", "application/json"))
            .and(body_json(spec.to_json().expect("catalog serializes")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&pb.server)
            .await;
    }

    let report = Provisioner::new(pb.client()).run().await.expect("run should complete");
    assert_eq!(report.created(), 3);

    let posted = pb.received("POST", "/api/collections").await;
    let users: serde_json::Value = posted[0].body_json().expect("users body");
    assert_eq!(users, serde_json::to_value(&CATALOG[0]).expect("users serializes"));
    assert_eq!(users["type"], "auth");
    assert_eq!(users["options"]["allowEmailAuth"], true);
    assert_eq!(users["listRule"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_admin_token_flows_to_listing_and_creation() {
    let pb = FakePocketBase::healthy().await;
    Mock::given(method("POST"))
        .and(path("/api/admins/auth-with-password"))
        .and(body_json(json!({"identity": "admin@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "admin-jwt",
            "admin": {"id": "a1", "email": "admin@example.com"}
        })))
        .expect(1)
        .mount(&pb.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/collections"))
        .and(bearer_token("admin-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"name": "users"}]})))
        .expect(1)
        .mount(&pb.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/collections"))
        .and(bearer_token("admin-jwt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&pb.server)
        .await;

    let client = pb.client();
    let credentials = AdminCredentials::new("admin@example.com", "secret");
    let token = client.admins().authenticate(&credentials).await.expect("login should succeed");

    let report = Provisioner::new(client)
        .with_token(token)
        .run()
        .await
        .expect("run should complete");

    assert_eq!(report.created(), 2);
    let health = pb.received("GET", "/api/health").await;
    assert!(!health[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_rejected_admin_login() {
    let pb = FakePocketBase::healthy().await;
    Mock::given(method("POST"))
        .and(path("/api/admins/auth-with-password"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "message": "Failed to authenticate.",
            "data": {}
        })))
        .mount(&pb.server)
        .await;

    let credentials = AdminCredentials::new("admin@example.com", "wrong");
    let err = pb
        .client()
        .admins()
        .authenticate(&credentials)
        .await
        .expect_err("login should fail");

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.status(), Some(400));
}
