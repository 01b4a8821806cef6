//! Collection inventory and creation.

use crate::client::Client;
use crate::control::{CollectionSummary, Page};
use crate::transport::{Method, TransportResponse};
use crate::types::{CollectionSpec, Inventory};
use crate::{Error, Result};

/// Collections endpoint, used for both listing and creation.
pub const COLLECTIONS_PATH: &str = "/collections";

/// Client for the collections endpoints.
///
/// Access via `client.collections()`.
///
/// ## Example
///
/// ```rust,ignore
/// let collections = client.collections();
///
/// match collections.list_existing(None).await? {
///     Inventory::Known(names) => println!("{} collections", names.len()),
///     Inventory::Unknown => println!("listing is auth-protected"),
/// }
///
/// let response = collections.create(&catalog::BEHAVIORS, None).await?;
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CollectionsClient {
    client: Client,
}

impl CollectionsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists the names of existing collections.
    ///
    /// | Response                     | Result                        |
    /// |------------------------------|-------------------------------|
    /// | 200 with an `items` list     | `Ok(Inventory::Known(names))` |
    /// | 401                          | `Ok(Inventory::Unknown)`      |
    /// | 200 with an unreadable body  | `Err(InvalidResponse)`        |
    /// | any other status             | `Err(UnexpectedStatus)`       |
    /// | transport failure            | the transport error           |
    pub async fn list_existing(&self, token: Option<&str>) -> Result<Inventory> {
        let response = self
            .client
            .transport()
            .request(Method::Get, COLLECTIONS_PATH, None, token)
            .await?;

        match response.status {
            200 => {
                let page: Page<CollectionSummary> = response.json().map_err(|e| {
                    Error::invalid_response(format!(
                        "could not read collection listing: {}",
                        e.message()
                    ))
                    .with_status(response.status, response.text.clone())
                })?;
                let inventory: Inventory = page.items.into_iter().map(|c| c.name).collect();
                tracing::info!(%inventory, "listed existing collections");
                Ok(inventory)
            }
            401 => {
                tracing::info!("collection listing is auth-protected, inventory unknown");
                Ok(Inventory::Unknown)
            }
            status => Err(Error::unexpected_status(
                "GET /collections",
                status,
                response.text,
            )),
        }
    }

    /// Submits `spec` as a new collection.
    ///
    /// The spec is validated first; an invalid spec fails with
    /// `InvalidArgument` and nothing is sent. Any completed exchange is
    /// returned as-is, so the caller decides what a non-200 status means.
    pub async fn create(
        &self,
        spec: &CollectionSpec,
        token: Option<&str>,
    ) -> Result<TransportResponse> {
        spec.validate()?;
        let body = spec.to_json()?;

        tracing::debug!(collection = spec.name, "creating collection");
        self.client
            .transport()
            .request(Method::Post, COLLECTIONS_PATH, Some(&body), token)
            .await
    }
}
