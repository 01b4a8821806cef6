//! Shared client state.

use std::sync::Arc;

use crate::transport::TransportClient;

/// State shared by every clone of a [`Client`](super::Client).
pub(crate) struct ClientInner {
    /// Base URL as reported by the transport.
    pub(crate) url: String,
    pub(crate) transport: Arc<dyn TransportClient>,
}

impl ClientInner {
    pub(crate) fn new(transport: Arc<dyn TransportClient>) -> Self {
        Self {
            url: transport.base_url().to_string(),
            transport,
        }
    }
}
