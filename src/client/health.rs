//! Liveness checks.
//!
//! ```rust,ignore
//! // Boolean gate
//! if !client.health().check_healthy().await {
//!     return;
//! }
//!
//! // Diagnostics for any status
//! let report = client.health().probe().await?;
//! println!("{}", report);
//! ```

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::Client;
use crate::transport::{Method, TransportResponse};
use crate::{Error, Result};

/// Liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Result of one health probe.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    /// HTTP status returned by the liveness endpoint.
    pub status: u16,
    /// Service message (`"API is healthy."` on a live instance) or raw body.
    pub message: String,
    /// Round-trip latency of the probe.
    pub latency: Duration,
    /// When the probe completed.
    pub checked_at: DateTime<Utc>,
}

impl HealthReport {
    fn from_response(response: &TransportResponse, latency: Duration) -> Self {
        Self {
            status: response.status,
            message: response.error_message().trim().to_string(),
            latency,
            checked_at: Utc::now(),
        }
    }

    /// Returns `true` iff the status is exactly 200.
    pub fn is_healthy(&self) -> bool {
        self.status == 200
    }
}

impl std::fmt::Display for HealthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_healthy() { "healthy" } else { "unhealthy" };
        write!(f, "{} (HTTP {}, {:?})", state, self.status, self.latency)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

/// Client for the liveness endpoint.
///
/// Access via `client.health()`.
#[derive(Clone, Debug)]
pub struct HealthClient {
    client: Client,
}

impl HealthClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns `true` iff `GET /health` answers exactly 200.
    ///
    /// Any other status and any transport failure yield `false`.
    pub async fn check_healthy(&self) -> bool {
        match self.probe().await {
            Ok(report) => report.is_healthy(),
            Err(err) => {
                tracing::debug!(error = %err, "health probe failed");
                false
            }
        }
    }

    /// Probes the liveness endpoint and reports whatever it answered.
    ///
    /// Only transport failures are errors.
    pub async fn probe(&self) -> Result<HealthReport> {
        let started = Instant::now();
        let response = self
            .client
            .transport()
            .request(Method::Get, HEALTH_PATH, None, None)
            .await?;
        Ok(HealthReport::from_response(&response, started.elapsed()))
    }

    /// Probes the liveness endpoint and fails unless it is healthy.
    ///
    /// Both an unhealthy status and a transport failure are reported as
    /// `Unhealthy`; the transport error is kept as the source.
    pub async fn require_healthy(&self) -> Result<HealthReport> {
        let started = Instant::now();
        let response = self
            .client
            .transport()
            .request(Method::Get, HEALTH_PATH, None, None)
            .await
            .map_err(|e| {
                Error::unhealthy(format!("PocketBase not reachable at {}: {}", self.client.url(), e))
                    .with_source(e)
            })?;

        let report = HealthReport::from_response(&response, started.elapsed());
        if !report.is_healthy() {
            return Err(
                Error::unhealthy(format!("PocketBase not healthy (HTTP {})", response.status))
                    .with_status(response.status, response.text),
            );
        }

        tracing::info!(latency_ms = report.latency.as_millis() as u64, "service is healthy");
        Ok(report)
    }
}
