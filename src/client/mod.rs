//! Client types for talking to a PocketBase admin API.
//!
//! - [`Client`]: top-level handle owning the transport
//! - [`HealthClient`]: liveness probe
//! - [`CollectionsClient`](crate::control::CollectionsClient): inventory and creation
//! - [`AdminAuthClient`](crate::auth::AdminAuthClient): admin token acquisition
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pocketbase_bootstrap::Client;
//!
//! let client = Client::builder()
//!     .url("http://localhost:4002/api")
//!     .build()?;
//!
//! if client.health().check_healthy().await {
//!     let inventory = client.collections().list_existing(None).await?;
//!     println!("{}", inventory);
//! }
//! ```

mod builder;
mod health;
mod inner;

pub use builder::{ClientBuilder, HasUrl, NoUrl};
pub use health::{HEALTH_PATH, HealthClient, HealthReport};

use std::sync::Arc;

use crate::auth::AdminAuthClient;
use crate::config::Settings;
use crate::control::CollectionsClient;
use crate::transport::TransportClient;

/// Handle on one PocketBase instance.
///
/// `Client` is `Clone`; clones share the same transport.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    ///
    /// The builder uses the typestate pattern so a client cannot be built
    /// without a base URL.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use pocketbase_bootstrap::Client;
    ///
    /// let client = Client::builder()
    ///     .url("http://localhost:4002/api")
    ///     .timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.url(), "http://localhost:4002/api");
    /// ```
    pub fn builder() -> ClientBuilder<NoUrl> {
        ClientBuilder::new()
    }

    /// Creates a REST client from resolved settings.
    pub fn from_settings(settings: &Settings) -> crate::Result<Self> {
        Self::builder()
            .url(settings.base_url.as_str())
            .timeout(settings.timeout)
            .tls_config(settings.tls.clone())
            .build()
    }

    /// Creates a client over an arbitrary transport.
    pub fn from_transport<T: TransportClient + 'static>(transport: T) -> Self {
        Self::from_shared_transport(Arc::new(transport))
    }

    /// Creates a client over a transport the caller keeps a handle to.
    pub fn from_shared_transport<T: TransportClient + 'static>(transport: Arc<T>) -> Self {
        Self {
            inner: Arc::new(inner::ClientInner::new(transport)),
        }
    }

    /// Returns the base URL of the client.
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Returns the health-check client.
    pub fn health(&self) -> HealthClient {
        HealthClient::new(self.clone())
    }

    /// Returns the collections client.
    pub fn collections(&self) -> CollectionsClient {
        CollectionsClient::new(self.clone())
    }

    /// Returns the admin authentication client.
    pub fn admins(&self) -> AdminAuthClient {
        AdminAuthClient::new(self.clone())
    }

    /// Returns the underlying transport.
    pub(crate) fn transport(&self) -> &dyn TransportClient {
        self.inner.transport.as_ref()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.inner.url)
            .finish_non_exhaustive()
    }
}
