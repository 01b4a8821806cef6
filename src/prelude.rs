//! Prelude module for convenient imports.
//!
//! ```rust
//! use pocketbase_bootstrap::prelude::*;
//! ```

pub use crate::{
    auth::{AdminCredentials, BearerToken},
    catalog::CATALOG,
    client::{Client, ClientBuilder, HealthReport},
    config::{Settings, TlsConfig},
    error::{Error, ErrorKind, Result},
    provision::{CollectionOutcome, FailureReason, Outcome, ProvisionEvent, ProvisionReport, Provisioner},
    types::{CollectionSpec, FieldSpec, FieldType, Inventory, Presence},
};
