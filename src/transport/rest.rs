//! REST transport implementation using reqwest.
//!
//! One call is one HTTP exchange: no retries, no connection-level fallbacks.
//! Non-2xx statuses come back as ordinary [`TransportResponse`]s.

use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::TlsConfig;
use crate::transport::traits::{Method, TransportClient, TransportResponse};
use crate::user_agent;
use crate::{Error, ErrorKind};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect timeout, capped by the request timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// REST Transport
// ============================================================================

/// REST transport using reqwest.
///
/// Paths are appended to the base URL's path, so a base of
/// `http://localhost:4002/api` and a path of `/collections` resolve to
/// `http://localhost:4002/api/collections`.
#[derive(Clone)]
pub struct RestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl std::fmt::Debug for RestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RestTransport {
    /// Creates a new REST transport builder.
    pub fn builder() -> RestTransportBuilder {
        RestTransportBuilder::new()
    }

    /// Creates a new REST transport with the given configuration.
    pub fn new(base_url: Url, tls_config: &TlsConfig, timeout: Duration) -> Result<Self, Error> {
        let mut client_builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .user_agent(user_agent::user_agent());

        if tls_config.skip_verification {
            tracing::warn!("TLS certificate verification is disabled");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        for pem in tls_config.ca_pems()? {
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                Error::configuration(format!("Invalid CA certificate: {}", e)).with_source(e)
            })?;
            client_builder = client_builder.add_root_certificate(cert);
        }

        let client = client_builder.build().map_err(|e| {
            Error::configuration(format!("Failed to create HTTP client: {}", e)).with_source(e)
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves `path` under the base URL's path.
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        join_path(&self.base_url, path)
    }

    /// Builds request headers. The JSON content type is sent on every request.
    fn build_headers(&self, token: Option<&str>) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let auth_value = format!("Bearer {}", token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value)
                    .map_err(|_| Error::invalid_argument("Invalid auth token format"))?,
            );
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl TransportClient for RestTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<TransportResponse, Error> {
        let url = self.endpoint(path)?;
        let headers = self.build_headers(token)?;

        let mut request = match method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
            Method::Patch => self.client.patch(url.clone()),
        }
        .headers(headers);

        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(map_reqwest_error)?;

        tracing::debug!(
            method = %method,
            url = %url,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "admin API request completed"
        );

        Ok(TransportResponse::new(status, text))
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for REST transport.
#[derive(Debug)]
pub struct RestTransportBuilder {
    base_url: Option<Url>,
    tls_config: TlsConfig,
    timeout: Duration,
}

impl RestTransportBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            tls_config: TlsConfig::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the base URL.
    ///
    /// Only `http` and `https` URLs that can carry a path are accepted.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.base_url = Some(parse_base_url(url.as_ref())?);
        Ok(self)
    }

    /// Sets the TLS configuration.
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the REST transport.
    pub fn build(self) -> Result<RestTransport, Error> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("Base URL is required"))?;

        RestTransport::new(base_url, &self.tls_config, self.timeout)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parses and validates an admin API base URL.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw)
        .map_err(|e| Error::configuration(format!("Invalid base URL {:?}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::configuration(format!(
                "Unsupported URL scheme {:?}, expected http or https",
                other
            )));
        }
    }

    if url.cannot_be_a_base() {
        return Err(Error::configuration(format!(
            "Base URL {:?} cannot carry a path",
            raw
        )));
    }

    Ok(url)
}

/// Appends the segments of `path` to `base`, keeping any prefix such as `/api`.
fn join_path(base: &Url, path: &str) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::configuration("Base URL cannot carry a path"))?
        .pop_if_empty()
        .extend(path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}

/// Maps reqwest errors to bootstrap errors.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::new(ErrorKind::Timeout, format!("Request timed out: {}", e)).with_source(e)
    } else if e.is_connect() {
        Error::connection(format!("Connection failed: {}", e)).with_source(e)
    } else {
        Error::new(ErrorKind::Transport, format!("HTTP error: {}", e)).with_source(e)
    }
}

// ============================================================================
// Tests
// ============================================================================


// Wiremock-based async tests
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod wiremock_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_transport(server: &MockServer) -> RestTransport {
        RestTransport::builder()
            .base_url(format!("{}/api", server.uri()))
            .unwrap()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_under_api_prefix() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/health"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_test_transport(&server);
        let response = transport
            .request(Method::Get, "/health", None, None)
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Some(json!({"code": 200})));
    }

    #[tokio::test]
    async fn test_post_sends_json_body_and_token() {
        let server = MockServer::start().await;
        let payload = json!({"name": "classes", "type": "base"});

        Mock::given(method("POST"))
            .and(path("/api/collections"))
            .and(header("authorization", "Bearer tok"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "x"})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_test_transport(&server);
        let response = transport
            .request(Method::Post, "/collections", Some(&payload), Some("tok"))
            .await
            .unwrap();
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_patch_is_supported() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/collections/users"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_test_transport(&server);
        let response = transport
            .dispatch("PATCH", "/collections/users", Some(&json!({})), None)
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_error_status_is_a_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/collections"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "message": "The request requires admin authorization token to be set.",
                "data": {}
            })))
            .mount(&server)
            .await;

        let transport = create_test_transport(&server);
        let response = transport
            .request(Method::Get, "/collections", None, None)
            .await
            .unwrap();
        assert_eq!(response.status, 401);
        assert!(response.error_message().contains("admin authorization"));
    }

    #[tokio::test]
    async fn test_unsupported_method_sends_nothing() {
        let server = MockServer::start().await;
        let transport = create_test_transport(&server);

        let err = transport
            .dispatch("DELETE", "/collections/users", None, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("DELETE"));

        let received = server.received_requests().await.unwrap();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let transport = RestTransport::builder()
            .base_url(format!("{}/api", server.uri()))
            .unwrap()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();

        let err = transport
            .request(Method::Get, "/health", None, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert!(err.kind().is_transport());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let transport = RestTransport::builder()
            .base_url(format!("{}/api", uri))
            .unwrap()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let err = transport
            .request(Method::Get, "/health", None, None)
            .await
            .unwrap_err();
        assert!(err.kind().is_transport());
    }
}
