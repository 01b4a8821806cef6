//! Administrator authentication.
//!
//! The default provisioning flow is unauthenticated. When an instance locks
//! down its admin API, credentials can be exchanged for a bearer token that is
//! then attached to inventory and creation calls:
//!
//! ```rust,ignore
//! use pocketbase_bootstrap::{AdminCredentials, Client, Provisioner};
//!
//! let client = Client::builder().url("http://localhost:4002/api").build()?;
//! let token = client
//!     .admins()
//!     .authenticate(&AdminCredentials::new("admin@example.com", "password"))
//!     .await?;
//! let report = Provisioner::new(client).with_token(token).run().await?;
//! ```

mod admin;
mod credentials;

pub use admin::{ADMIN_AUTH_PATH, AdminAuthClient};
pub use credentials::{AdminCredentials, BearerToken};
