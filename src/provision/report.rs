//! Run summary.

use std::fmt;

use chrono::{DateTime, Utc};

use super::outcome::CollectionOutcome;
use crate::types::Inventory;

/// The result of a run that got past its preconditions.
///
/// Every catalog entry appears exactly once, in catalog order.
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    /// Base URL the run targeted.
    pub base_url: String,
    /// Inventory snapshot the run worked from.
    pub inventory: Inventory,
    /// Per-collection outcomes, in catalog order.
    pub outcomes: Vec<CollectionOutcome>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the last collection finished.
    pub finished_at: DateTime<Utc>,
}

impl ProvisionReport {
    /// Returns `true` if the inventory listing succeeded.
    pub fn inventory_known(&self) -> bool {
        self.inventory.is_known()
    }

    /// Number of collections created.
    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_created()).count()
    }

    /// Number of collections that already existed.
    pub fn already_present(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_already_present())
            .count()
    }

    /// Number of collections whose creation failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_failed()).count()
    }

    /// Returns `true` if nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Returns the outcome for `name`.
    pub fn outcome(&self, name: &str) -> Option<&CollectionOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    /// Wall-clock duration of the run.
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

impl fmt::Display for ProvisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary for {}", self.base_url)?;
        writeln!(f, "Inventory: {}", self.inventory)?;
        for outcome in &self.outcomes {
            writeln!(f, "  {}", outcome)?;
        }
        write!(
            f,
            "{} collections: {} created, {} already present, {} failed",
            self.outcomes.len(),
            self.created(),
            self.already_present(),
            self.failed()
        )
    }
}
