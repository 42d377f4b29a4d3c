//! Shared access-token cell
//!
//! The CRM bearer token is process-wide mutable state: seeded from
//! configuration at startup (or absent), overwritten only after a successful
//! refresh, held in memory only. Concurrent submissions may race on it;
//! each submission captures the value it uses at call time, so a stale read
//! costs at most one redundant refresh.

use std::sync::Arc;

use parking_lot::RwLock;

/// Thread-safe single-slot cell holding the current CRM access token.
///
/// Cloning the cell clones the handle, not the token; all clones share the
/// same slot. The lock is only ever held for the clone or store itself,
/// never across an await point.
#[derive(Clone, Debug, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenCell {
    /// Create a cell, optionally seeded with a preset token.
    #[must_use]
    pub fn new(initial: Option<String>) -> Self {
        Self { inner: Arc::new(RwLock::new(initial)) }
    }

    /// Snapshot the current token, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.inner.read().clone()
    }

    /// Replace the stored token.
    pub fn store(&self, token: String) {
        *self.inner.write() = Some(token);
    }
}
