//! Configuration types for a provisioning run.
//!
//! - [`Settings`]: everything fixed at process start
//! - [`TlsConfig`]: TLS settings for HTTPS instances

mod tls;

pub use tls::TlsConfig;

use std::time::Duration;

use crate::auth::AdminCredentials;
use crate::transport::DEFAULT_TIMEOUT;

/// Base URL of a local PocketBase instance's admin API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4002/api";

/// Settings for one provisioning run.
///
/// Read once at startup and never re-read.
///
/// ## Default Values
///
/// - `base_url`: `http://localhost:4002/api`
/// - `timeout`: 30s
/// - `tls`: system roots, verification on
/// - `admin`: none (unauthenticated flow)
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use pocketbase_bootstrap::{AdminCredentials, Settings};
///
/// let settings = Settings::builder()
///     .base_url("https://pb.example.com/api")
///     .timeout(Duration::from_secs(10))
///     .admin(AdminCredentials::new("admin@example.com", "password"))
///     .build();
///
/// assert!(settings.admin.is_some());
/// assert_eq!(Settings::default().base_url, "http://localhost:4002/api");
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct Settings {
    /// Admin API base URL, including the `/api` prefix.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,

    /// Per-request timeout.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,

    /// TLS settings.
    #[builder(default)]
    pub tls: TlsConfig,

    /// Admin credentials; when set, a token is acquired before provisioning.
    pub admin: Option<AdminCredentials>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
