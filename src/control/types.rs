//! Wire types for the collections endpoints.

use serde::Deserialize;

/// A page of results from a PocketBase list endpoint.
///
/// `items` is required; a 200 body without it is not a listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
}

/// An existing collection as listed by `GET /collections`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionSummary {
    /// Collection name.
    pub name: String,
}
