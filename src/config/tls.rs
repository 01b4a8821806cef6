//! TLS configuration for HTTPS admin endpoints.

use std::path::PathBuf;

/// Configuration for TLS connections to the admin API.
///
/// Plain `http://` base URLs ignore this entirely. For HTTPS deployments the
/// system roots are used unless a custom CA is supplied.
///
/// ```rust
/// use pocketbase_bootstrap::TlsConfig;
///
/// let config = TlsConfig::builder()
///     .ca_cert_file("/etc/ssl/pb-ca.crt")
///     .build();
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct TlsConfig {
    /// Custom CA certificate file path.
    #[builder(into)]
    pub ca_cert_file: Option<PathBuf>,

    /// Custom CA certificate PEM data.
    #[builder(into)]
    pub ca_cert_pem: Option<String>,

    /// Whether to skip certificate verification.
    ///
    /// **WARNING**: Only for a local instance behind a self-signed certificate.
    #[builder(default = false)]
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates a TLS config that skips certificate verification.
    pub fn insecure() -> Self {
        Self::builder().skip_verification(true).build()
    }

    /// Returns `true` if a custom CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }

    /// Reads the configured CA material as PEM bytes, file first.
    pub(crate) fn ca_pems(&self) -> crate::Result<Vec<Vec<u8>>> {
        let mut pems = Vec::new();
        if let Some(ref path) = self.ca_cert_file {
            let pem = std::fs::read(path).map_err(|e| {
                crate::Error::configuration(format!(
                    "Failed to read certificate {:?}: {}",
                    path, e
                ))
                .with_source(e)
            })?;
            pems.push(pem);
        }
        if let Some(ref pem) = self.ca_cert_pem {
            pems.push(pem.as_bytes().to_vec());
        }
        Ok(pems)
    }
}
