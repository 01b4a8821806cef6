//! Transport layer for admin API communication.
//!
//! - REST transport (via reqwest) for a live PocketBase instance
//! - Mock transport for tests without a network
//!
//! Higher-level clients ([`HealthClient`](crate::client::HealthClient),
//! [`CollectionsClient`](crate::control::CollectionsClient)) sit on top of
//! [`TransportClient`] and decide which statuses are acceptable.

pub(crate) mod mock;
pub(crate) mod rest;
pub(crate) mod traits;

pub use mock::{MockTransport, RecordedRequest};
pub use rest::{DEFAULT_TIMEOUT, RestTransport, RestTransportBuilder};
pub use traits::{Method, TransportClient, TransportResponse};
