//! Pre-scripted PocketBase instances.

use serde_json::json;

use crate::client::HEALTH_PATH;
use crate::control::COLLECTIONS_PATH;
use crate::transport::{Method, MockTransport};

/// A healthy instance that lists `existing` and accepts every creation.
pub fn healthy_instance<I, S>(existing: I) -> MockTransport
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mock = MockTransport::new();
    script_health(&mock);
    let items: Vec<_> = existing
        .into_iter()
        .map(|name| json!({"name": name.into()}))
        .collect();
    mock.respond_json(Method::Get, COLLECTIONS_PATH, 200, json!({"items": items}));
    script_creation(&mock);
    mock
}

/// A healthy instance whose listing requires admin auth and which accepts
/// every creation.
pub fn locked_instance() -> MockTransport {
    let mock = MockTransport::new();
    script_health(&mock);
    mock.respond_json(
        Method::Get,
        COLLECTIONS_PATH,
        401,
        json!({
            "code": 401,
            "message": "The request requires admin authorization token to be set.",
            "data": {}
        }),
    );
    script_creation(&mock);
    mock
}

fn script_health(mock: &MockTransport) {
    mock.respond_json(
        Method::Get,
        HEALTH_PATH,
        200,
        json!({"code": 200, "message": "API is healthy.", "data": {}}),
    );
}

fn script_creation(mock: &MockTransport) {
    mock.respond_json(Method::Post, COLLECTIONS_PATH, 200, json!({"id": "created"}));
}
