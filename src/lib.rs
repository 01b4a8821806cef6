//! # pocketbase-bootstrap
//!
//! Idempotent collection provisioning for PocketBase over its admin HTTP API.
//!
//! A run checks that the instance is healthy, lists the collections it
//! already has, and creates whichever catalog entries are missing. Existing
//! collections are never modified or deleted.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pocketbase_bootstrap::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> pocketbase_bootstrap::Result<()> {
//!     let client = Client::builder()
//!         .url("http://localhost:4002/api")
//!         .build()?;
//!
//!     let report = Provisioner::new(client).run().await?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Status ≠ Error**: the transport returns non-2xx statuses as ordinary
//!   responses; callers decide which statuses they cannot proceed from
//! - **Three-valued presence**: a 401 on listing yields `Inventory::Unknown`,
//!   and unknown presence always attempts creation
//! - **Best effort**: one collection failing never stops the others; only an
//!   unhealthy service or an unusable listing aborts a run
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod provision;
pub mod types;

// Transport layer
pub mod transport;

// Admin API
pub mod control;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

mod user_agent;

// Re-export main types at crate root for convenience
pub use auth::{AdminCredentials, BearerToken};
pub use catalog::CATALOG;
pub use client::{Client, ClientBuilder};
pub use config::{DEFAULT_BASE_URL, Settings, TlsConfig};
pub use error::{Error, ErrorKind, Result};
pub use provision::{CollectionOutcome, Outcome, ProvisionEvent, ProvisionReport, Provisioner};
pub use types::{CollectionSpec, FieldSpec, Inventory, Presence};
