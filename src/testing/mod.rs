//! Testing utilities.
//!
//! - [`MockTransport`]: scripted responses, recorded requests
//! - [`healthy_instance`] / [`locked_instance`]: ready-made scripts
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use pocketbase_bootstrap::testing::healthy_instance;
//! use pocketbase_bootstrap::{Client, Provisioner};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mock = Arc::new(healthy_instance(["users"]));
//! let client = Client::from_shared_transport(mock.clone());
//!
//! let report = Provisioner::new(client).run().await.unwrap();
//! assert_eq!(report.already_present(), 1);
//! assert_eq!(report.created(), 2);
//! # }
//! ```

mod fixtures;

pub use crate::transport::{MockTransport, RecordedRequest};
pub use fixtures::{healthy_instance, locked_instance};
