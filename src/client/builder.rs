//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use super::{Client, inner::ClientInner};
use crate::{
    Error,
    config::TlsConfig,
    transport::{DEFAULT_TIMEOUT, RestTransport},
};

/// Marker type: URL not yet provided.
#[derive(Debug)]
pub struct NoUrl;

/// Marker type: URL has been provided.
#[derive(Debug)]
pub struct HasUrl;

/// Builder for creating [`Client`] instances.
///
/// ## Required Configuration
///
/// - `url()`: the admin API base URL, including any path prefix such as `/api`
///
/// ## Optional Configuration
///
/// - `timeout()`: per-request timeout (default 30 s)
/// - `tls_config()`: custom CA or skipped verification
///
/// `build()` only exists once a URL has been supplied:
///
/// ```compile_fail
/// use pocketbase_bootstrap::Client;
///
/// let client = Client::builder().build();
/// ```
#[derive(Debug)]
pub struct ClientBuilder<UrlState> {
    url: Option<String>,
    tls_config: TlsConfig,
    timeout: Duration,
    _url_state: PhantomData<UrlState>,
}

impl ClientBuilder<NoUrl> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            tls_config: TlsConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            _url_state: PhantomData,
        }
    }

    /// Sets the admin API base URL.
    ///
    /// The URL is validated by [`build`](ClientBuilder::build).
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl> {
        ClientBuilder {
            url: Some(url.into()),
            tls_config: self.tls_config,
            timeout: self.timeout,
            _url_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ClientBuilder<U> {
    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }
}

impl ClientBuilder<HasUrl> {
    /// Builds a client backed by the REST transport.
    ///
    /// Fails with `Configuration` if the URL is not an `http(s)` URL or the
    /// TLS material cannot be loaded.
    pub fn build(self) -> Result<Client, Error> {
        let url = self
            .url
            .ok_or_else(|| Error::configuration("Base URL is required"))?;

        if self.timeout.is_zero() {
            return Err(Error::configuration("Timeout must be greater than zero"));
        }

        let transport = RestTransport::builder()
            .base_url(&url)?
            .tls_config(self.tls_config)
            .timeout(self.timeout)
            .build()?;

        tracing::debug!(url = %url, timeout_ms = self.timeout.as_millis() as u64, "client built");

        Ok(Client {
            inner: Arc::new(ClientInner::new(Arc::new(transport))),
        })
    }
}
