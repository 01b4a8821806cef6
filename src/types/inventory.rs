//! Inventory snapshot and presence.

use std::collections::BTreeSet;
use std::fmt;

/// Collections known to exist on the service at the start of a run.
///
/// `Unknown` is a normal state, not an error: it means the listing endpoint
/// refused an unauthenticated caller, so presence cannot be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inventory {
    /// The listing succeeded with these collection names.
    Known(BTreeSet<String>),
    /// The listing was access-restricted.
    Unknown,
}

impl Inventory {
    /// Returns the presence of `name` in this snapshot.
    pub fn presence(&self, name: &str) -> Presence {
        match self {
            Inventory::Known(names) if names.contains(name) => Presence::Present,
            Inventory::Known(_) => Presence::Absent,
            Inventory::Unknown => Presence::Unknown,
        }
    }

    /// Returns `true` if the listing succeeded.
    pub fn is_known(&self) -> bool {
        matches!(self, Inventory::Known(_))
    }

    /// Returns the known names, or `None` for an unknown snapshot.
    pub fn names(&self) -> Option<&BTreeSet<String>> {
        match self {
            Inventory::Known(names) => Some(names),
            Inventory::Unknown => None,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Inventory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Inventory::Known(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inventory::Known(names) => {
                write!(f, "{} collections [", names.len())?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(name)?;
                }
                f.write_str("]")
            }
            Inventory::Unknown => f.write_str("unknown (listing is auth-protected)"),
        }
    }
}

/// Whether one collection exists remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Listed by the service.
    Present,
    /// Not listed by a successful listing.
    Absent,
    /// Could not be determined.
    Unknown,
}

impl Presence {
    /// Returns `true` when a creation attempt should be made.
    ///
    /// Unknown presence attempts creation rather than skipping.
    pub fn should_create(&self) -> bool {
        !matches!(self, Presence::Present)
    }
}
