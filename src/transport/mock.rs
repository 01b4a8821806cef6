//! Mock transport implementation for testing.
//!
//! Responses are scripted per `(method, path)` and every request is recorded,
//! so tests can assert on exactly what would have gone over the wire.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde_json::Value;

use super::traits::{Method, TransportClient, TransportResponse};
use crate::{Error, ErrorKind};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Request method.
    pub method: Method,
    /// Path relative to the base URL.
    pub path: String,
    /// JSON body, if one was sent.
    pub body: Option<Value>,
    /// Bearer token, if one was sent.
    pub token: Option<String>,
}

/// What a scripted route answers with.
#[derive(Debug, Clone)]
enum Scripted {
    Response(TransportResponse),
    Failure(ErrorKind, String),
}

impl Scripted {
    fn materialize(&self) -> Result<TransportResponse, Error> {
        match self {
            Scripted::Response(response) => Ok(response.clone()),
            Scripted::Failure(kind, message) => Err(Error::new(*kind, message.clone())),
        }
    }
}

#[derive(Debug, Default)]
struct Route {
    /// One-shot answers consumed in order before the sticky answer applies.
    queued: VecDeque<Scripted>,
    sticky: Option<Scripted>,
}

/// Mock transport for testing.
///
/// Unscripted routes answer `404` with PocketBase's not-found envelope.
///
/// ```rust
/// use pocketbase_bootstrap::testing::MockTransport;
/// use pocketbase_bootstrap::transport::{Method, TransportClient};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockTransport::new();
/// mock.respond(Method::Get, "/health", 200, r#"{"code":200}"#);
///
/// let response = mock.request(Method::Get, "/health", None, None).await.unwrap();
/// assert_eq!(response.status, 200);
/// assert_eq!(mock.request_count(), 1);
/// # }
/// ```
pub struct MockTransport {
    base_url: String,
    routes: RwLock<HashMap<(Method, String), Route>>,
    requests: RwLock<Vec<RecordedRequest>>,
    request_count: AtomicU64,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("base_url", &self.base_url)
            .field("request_count", &self.request_count())
            .finish_non_exhaustive()
    }
}

impl MockTransport {
    /// Creates a new mock transport with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(crate::config::DEFAULT_BASE_URL)
    }

    /// Creates a new mock transport reporting `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            routes: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
            request_count: AtomicU64::new(0),
        }
    }

    /// Answers every `method path` request with `status` and `text`.
    pub fn respond(&self, method: Method, path: &str, status: u16, text: impl Into<String>) {
        self.route(method, path).sticky =
            Some(Scripted::Response(TransportResponse::new(status, text)));
    }

    /// Answers every `method path` request with `status` and a JSON body.
    pub fn respond_json(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond(method, path, status, body.to_string());
    }

    /// Answers the next `method path` request only, ahead of any sticky answer.
    pub fn respond_once(&self, method: Method, path: &str, status: u16, text: impl Into<String>) {
        self.route(method, path)
            .queued
            .push_back(Scripted::Response(TransportResponse::new(status, text)));
    }

    /// Fails every `method path` request as if the exchange never completed.
    pub fn fail(&self, method: Method, path: &str, kind: ErrorKind, message: impl Into<String>) {
        self.route(method, path).sticky = Some(Scripted::Failure(kind, message.into()));
    }

    /// Fails the next `method path` request only.
    pub fn fail_once(
        &self,
        method: Method,
        path: &str,
        kind: ErrorKind,
        message: impl Into<String>,
    ) {
        self.route(method, path)
            .queued
            .push_back(Scripted::Failure(kind, message.into()));
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Returns every recorded request, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().clone()
    }

    /// Returns the recorded requests matching `method` and `path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .read()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    /// Forgets recorded requests. Scripts are kept.
    pub fn clear_requests(&self) {
        self.requests.write().clear();
        self.request_count.store(0, Ordering::Relaxed);
    }

    fn route(&self, method: Method, path: &str) -> parking_lot::MappedRwLockWriteGuard<'_, Route> {
        parking_lot::RwLockWriteGuard::map(self.routes.write(), |routes| {
            routes.entry((method, path.to_string())).or_default()
        })
    }

    fn answer(&self, method: Method, path: &str) -> Result<TransportResponse, Error> {
        let mut routes = self.routes.write();
        let Some(route) = routes.get_mut(&(method, path.to_string())) else {
            return Ok(not_found());
        };
        match route.queued.pop_front().or_else(|| route.sticky.clone()) {
            Some(scripted) => scripted.materialize(),
            None => Ok(not_found()),
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found() -> TransportResponse {
    TransportResponse::new(
        404,
        r#"{"code":404,"message":"The requested resource wasn't found.","data":{}}"#,
    )
}

#[async_trait::async_trait]
impl TransportClient for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<TransportResponse, Error> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        self.requests.write().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
            token: token.map(str::to_string),
        });
        self.answer(method, path)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
