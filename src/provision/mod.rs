//! The provisioning pass.
//!
//! ```text
//!   health ──✗──► Err(Unhealthy)                         (nothing created)
//!     │
//!     ✓
//!   inventory ──✗──► Err(UnexpectedStatus | ...)          (nothing created)
//!     │
//!     ├─ Known(names) ─┐
//!     └─ Unknown ──────┤
//!                      ▼
//!   for each spec:  Present ──► AlreadyPresent
//!                   Absent / Unknown ──► POST ──► Created | Failed
//!                      │
//!                      ▼
//!                ProvisionReport
//! ```
//!
//! A failed collection never stops the ones after it.

mod outcome;
mod report;

pub use outcome::{CollectionOutcome, FailureReason, Outcome};
pub use report::ProvisionReport;

use chrono::Utc;

use crate::auth::BearerToken;
use crate::catalog::CATALOG;
use crate::client::{Client, HealthReport};
use crate::types::{CollectionSpec, Inventory, Presence};
use crate::Result;

/// Progress notifications emitted while a run proceeds.
#[derive(Debug)]
pub enum ProvisionEvent<'a> {
    /// The health probe is about to be sent.
    CheckingHealth,
    /// The service answered healthy.
    HealthChecked(&'a HealthReport),
    /// The inventory listing is about to be sent.
    ListingInventory,
    /// The inventory snapshot the run will work from.
    InventoryListed(&'a Inventory),
    /// A creation request is about to be sent.
    Creating {
        /// Collection name.
        name: &'static str,
        /// Presence that led to the attempt.
        presence: Presence,
    },
    /// A collection reached its terminal state.
    Finished(&'a CollectionOutcome),
}

/// Runs the provisioning pass against one instance.
///
/// ```rust,ignore
/// let client = Client::builder().url("http://localhost:4002/api").build()?;
/// let report = Provisioner::new(client).run().await?;
/// println!("{}", report);
/// ```
#[derive(Clone, Debug)]
pub struct Provisioner {
    client: Client,
    catalog: &'static [CollectionSpec],
    token: Option<BearerToken>,
}

impl Provisioner {
    /// Creates a provisioner for the built-in catalog, unauthenticated.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            catalog: &CATALOG,
            token: None,
        }
    }

    /// Replaces the catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: &'static [CollectionSpec]) -> Self {
        self.catalog = catalog;
        self
    }

    /// Attaches an admin token to the inventory and creation calls.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<BearerToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the catalog this provisioner works through.
    pub fn catalog(&self) -> &'static [CollectionSpec] {
        self.catalog
    }

    /// Runs the pass.
    ///
    /// `Err` means a precondition failed and no collection was attempted.
    /// Per-collection failures are reported in the returned report.
    pub async fn run(&self) -> Result<ProvisionReport> {
        self.run_with(|_| {}).await
    }

    /// Runs the pass, calling `observer` at every step.
    pub async fn run_with<F>(&self, mut observer: F) -> Result<ProvisionReport>
    where
        F: FnMut(ProvisionEvent<'_>),
    {
        let started_at = Utc::now();
        let token = self.token.as_ref().map(BearerToken::as_str);

        observer(ProvisionEvent::CheckingHealth);
        let health = self.client.health().require_healthy().await.inspect_err(|e| {
            tracing::error!(error = %e, "aborting: service is not healthy");
        })?;
        observer(ProvisionEvent::HealthChecked(&health));

        observer(ProvisionEvent::ListingInventory);
        let collections = self.client.collections();
        let inventory = collections.list_existing(token).await.inspect_err(|e| {
            tracing::error!(error = %e, "aborting: could not list collections");
        })?;
        observer(ProvisionEvent::InventoryListed(&inventory));

        let mut outcomes = Vec::with_capacity(self.catalog.len());
        for spec in self.catalog {
            let presence = inventory.presence(spec.name);

            let outcome = if presence.should_create() {
                observer(ProvisionEvent::Creating {
                    name: spec.name,
                    presence,
                });
                match collections.create(spec, token).await {
                    Ok(response) if response.is_ok() => Outcome::Created,
                    Ok(response) => Outcome::Failed(FailureReason {
                        status: Some(response.status),
                        message: response.text,
                    }),
                    Err(err) => Outcome::Failed(FailureReason {
                        status: None,
                        message: err.to_string(),
                    }),
                }
            } else {
                Outcome::AlreadyPresent
            };

            match &outcome {
                Outcome::Failed(reason) => {
                    tracing::warn!(collection = spec.name, ?presence, %reason, "collection not created")
                }
                other => tracing::info!(collection = spec.name, ?presence, outcome = %other, "collection done"),
            }

            let done = CollectionOutcome {
                name: spec.name,
                presence,
                outcome,
            };
            observer(ProvisionEvent::Finished(&done));
            outcomes.push(done);
        }

        Ok(ProvisionReport {
            base_url: self.client.url().to_string(),
            inventory,
            outcomes,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
