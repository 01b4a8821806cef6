//! Per-collection outcomes.

use std::fmt;

use crate::types::Presence;

/// Why a collection could not be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReason {
    /// HTTP status of the rejected creation, or `None` when no response was
    /// received (transport failure, invalid local spec).
    pub status: Option<u16>,
    /// Response text or error description.
    pub message: String,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} - {}", status, self.message.trim()),
            None => f.write_str(&self.message),
        }
    }
}

/// Terminal state of one collection in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Listed by the service; no request was made.
    AlreadyPresent,
    /// Creation answered 200.
    Created,
    /// Creation was attempted and did not succeed.
    Failed(FailureReason),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Created`].
    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created)
    }

    /// Returns `true` for [`Outcome::AlreadyPresent`].
    pub fn is_already_present(&self) -> bool {
        matches!(self, Outcome::AlreadyPresent)
    }

    /// Returns `true` for [`Outcome::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Console marker for this outcome.
    pub fn marker(&self) -> char {
        if self.is_failed() { '✗' } else { '✓' }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::AlreadyPresent => f.write_str("already present"),
            Outcome::Created => f.write_str("created"),
            Outcome::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}

/// Outcome of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionOutcome {
    /// Collection name.
    pub name: &'static str,
    /// Presence as determined from the inventory.
    pub presence: Presence,
    /// What happened.
    pub outcome: Outcome,
}

impl fmt::Display for CollectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.outcome.marker(), self.name, self.outcome)
    }
}
