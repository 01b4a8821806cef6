//! Error types for the bootstrap crate.
//!
//! ## Key Invariant
//!
//! A non-2xx HTTP status is a normal, inspectable response at the transport
//! layer, never an `Err`. Only callers that cannot proceed from a status
//! (health check, inventory listing, admin login) turn it into an [`Error`].
//!
//! ```rust,ignore
//! // transport: a 401 is Ok(response) with response.status == 401
//! let response = transport.request(Method::Get, "/collections", None, None).await?;
//!
//! // inventory: a 401 is Ok(Inventory::Unknown), a 500 is Err(UnexpectedStatus)
//! let inventory = client.collections().list_existing(None).await?;
//! ```

mod core;
mod kind;

pub use self::core::Error;
pub use self::kind::ErrorKind;

/// A specialized `Result` type for bootstrap operations.
pub type Result<T> = std::result::Result<T, Error>;
