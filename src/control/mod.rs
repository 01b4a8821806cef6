//! Collection management over the admin API.
//!
//! The only administrative operations this tool performs are listing
//! existing collections and creating missing ones. Updates and deletions are
//! never issued.
//!
//! ```rust,ignore
//! let collections = client.collections();
//!
//! let inventory = collections.list_existing(None).await?;
//! if inventory.presence("classes").should_create() {
//!     collections.create(&catalog::CLASSES, None).await?;
//! }
//! ```

mod collections;
mod types;

pub use collections::{COLLECTIONS_PATH, CollectionsClient};
pub use types::{CollectionSummary, Page};
