//! Transport trait definitions and common types.
//!
//! This module defines the transport abstraction used by every higher-level
//! client: one request in, one status/body pair out.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

// ============================================================================
// Method
// ============================================================================

/// HTTP methods the admin API is driven with.
///
/// Anything else is rejected while parsing, before a request is built:
///
/// ```rust
/// use pocketbase_bootstrap::transport::Method;
/// use pocketbase_bootstrap::ErrorKind;
///
/// assert_eq!("patch".parse::<Method>().unwrap(), Method::Patch);
///
/// let err = "DELETE".parse::<Method>().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
}

impl Method {
    /// Returns the canonical upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            _ => Err(Error::invalid_argument(format!("Unknown method: {}", s))),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Result of one completed HTTP exchange.
///
/// Any status code, including 4xx and 5xx, is represented here. Only failures
/// to complete the exchange are reported as [`Error`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body parsed as JSON, when it is valid JSON.
    pub body: Option<Value>,
    /// Raw response text.
    pub text: String,
}

impl TransportResponse {
    /// Builds a response from a status and raw text, parsing the JSON body if
    /// the text is valid JSON.
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        let text = text.into();
        let body = serde_json::from_str(&text).ok();
        Self { status, body, text }
    }

    /// Returns `true` if the status is exactly 200, the only status the admin
    /// API uses for success on these endpoints.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Deserializes the JSON body into `T`.
    ///
    /// Fails with `InvalidResponse` if the body was not JSON or does not match.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let body = self.body.clone().ok_or_else(|| {
            Error::invalid_response(format!(
                "expected a JSON body from HTTP {}, got: {}",
                self.status,
                snippet(&self.text)
            ))
        })?;
        serde_json::from_value(body).map_err(Error::from)
    }

    /// Returns the service's human-readable error message.
    ///
    /// PocketBase wraps errors as `{"code":..,"message":..,"data":..}`. Falls
    /// back to the raw text when no `message` field is present.
    pub fn error_message(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(&self.text)
    }
}

/// Truncates long bodies for diagnostics.
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// Core transport trait for admin API communication.
///
/// Implemented by [`RestTransport`](crate::transport::RestTransport) and
/// [`MockTransport`](crate::testing::MockTransport). Every call performs at
/// most one outbound request and never retries.
#[async_trait::async_trait]
pub trait TransportClient: Send + Sync {
    /// Sends one request.
    ///
    /// * `path` is appended to the base URL's path.
    /// * `body` is serialized as JSON when present.
    /// * `token`, when present, is sent as `Authorization: Bearer <token>`.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<TransportResponse, Error>;

    /// Sends one request given a method name.
    ///
    /// Unsupported method names fail with `InvalidArgument` without touching
    /// the network.
    async fn dispatch(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<TransportResponse, Error> {
        let method: Method = method.parse()?;
        self.request(method, path, body, token).await
    }

    /// Returns the base URL requests are resolved against.
    fn base_url(&self) -> &str;
}
