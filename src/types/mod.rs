//! Schema and inventory types.
//!
//! - [`CollectionSpec`] / [`FieldSpec`]: static schema definitions, serialized
//!   as creation bodies
//! - [`Inventory`] / [`Presence`]: what the service already has

mod collection;
mod field;
mod inventory;

pub use collection::{AccessRules, AuthOptions, CollectionKind, CollectionSpec, Rule};
pub use field::{DefaultValue, FieldSpec, FieldType, SelectOptions};
pub use inventory::{Inventory, Presence};
