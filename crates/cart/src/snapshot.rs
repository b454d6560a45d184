//! Persisted cart state.

use serde::{Deserialize, Serialize};

use crate::line::CartLine;

/// Fixed, versioned storage key for persisted snapshots.
///
/// The version lives in the key as well as in the payload so a store can
/// shelve incompatible old data without parsing it.
pub const STORAGE_KEY: &str = "cart.v1";

/// The full serializable state of the cart at a point in time.
///
/// The transient `is_open` UI flag is deliberately not part of the snapshot;
/// a restored cart always starts closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Snapshot schema version. Hydration discards mismatched versions.
    pub version: u32,
    /// Cart lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl CartSnapshot {
    /// Schema version written by this build.
    pub const CURRENT_VERSION: u32 = 1;

    /// Snapshot of the given lines at the current schema version.
    #[must_use]
    pub const fn new(lines: Vec<CartLine>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            lines,
        }
    }

    /// An empty snapshot at the current schema version.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Whether this snapshot was written at the current schema version.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
