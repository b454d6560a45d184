//! Cart persistence error taxonomy.
//!
//! All store errors are non-fatal to the shopping session: the engine
//! handles them locally and keeps its in-memory state authoritative.

use thiserror::Error;

/// Errors a [`crate::CartStore`] can surface.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted snapshot unreadable or schema-mismatched.
    ///
    /// The engine discards the persisted state and starts from an empty
    /// cart; page load is never blocked.
    #[error("failed to read persisted cart: {0}")]
    Hydration(String),

    /// Snapshot write failed (quota, I/O, ...).
    ///
    /// The engine keeps in-memory state authoritative for the remainder of
    /// the session and stops retrying.
    #[error("failed to persist cart: {0}")]
    Write(String),
}
