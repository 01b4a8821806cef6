//! Common harness: a wiremock server scripted as a PocketBase instance.

use pocketbase_bootstrap::Client;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// A fake PocketBase instance.
pub struct FakePocketBase {
    pub server: MockServer,
}

impl FakePocketBase {
    /// Starts a server with nothing mounted.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Starts a server that answers the health probe with 200.
    pub async fn healthy() -> Self {
        let pb = Self::start().await;
        pb.mount_health(200).await;
        pb
    }

    /// Admin API base URL for this instance.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// An unauthenticated client pointed at this instance.
    pub fn client(&self) -> Client {
        Client::builder()
            .url(self.api_url())
            .build()
            .expect("client should build")
    }

    pub async fn mount_health(&self, status: u16) {
        let body = if status == 200 {
            json!({"code": 200, "message": "API is healthy.", "data": {}})
        } else {
            json!({"code": status, "message": "Something went wrong.", "data": {}})
        };
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Scripts `GET /collections` to list `names`.
    pub async fn mount_listing(&self, names: &[&str]) {
        let items: Vec<_> = names
            .iter()
            .map(|name| json!({"id": format!("id_{name}"), "name": name, "type": "base"}))
            .collect();
        Mock::given(method("GET"))
            .and(path("/api/collections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "perPage": 30,
                "totalItems": items.len(),
                "items": items,
            })))
            .mount(&self.server)
            .await;
    }

    /// Scripts `GET /collections` to demand admin auth.
    pub async fn mount_locked_listing(&self) {
        Mock::given(method("GET"))
            .and(path("/api/collections"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "message": "The request requires admin authorization token to be set.",
                "data": {}
            })))
            .mount(&self.server)
            .await;
    }

    /// Scripts every `POST /collections` to succeed.
    pub async fn mount_accept_all(&self) {
        Mock::given(method("POST"))
            .and(path("/api/collections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "new"})))
            .mount(&self.server)
            .await;
    }

    /// Requests the server received for `verb` on `route`.
    pub async fn received(&self, verb: &str, route: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == verb && r.url.path() == route)
            .collect()
    }

    /// Collection names posted for creation, in order.
    pub async fn posted_names(&self) -> Vec<String> {
        self.received("POST", "/api/collections")
            .await
            .iter()
            .map(|r| {
                let body: Value = r.body_json().expect("creation body should be JSON");
                body["name"].as_str().unwrap_or_default().to_string()
            })
            .collect()
    }
}
