// StockManager - app/persist.rs
//
// Encoding of the persisted sidebar flag and the two storage touchpoints
// the orchestrator uses: one read at initialisation, one write per change.
//
// The value is stored as JSON text ("true" / "false") so it stays readable
// by anything else that shares the key.
//
// Reads never fail: an absent key, a storage error, or a malformed value all
// resolve to DEFAULT_SIDEBAR_OPEN. Writes are fire-and-forget: failures are
// logged and dropped, never retried.

use crate::platform::storage::KeyValueStore;
use crate::util::constants::{DEFAULT_SIDEBAR_OPEN, SIDEBAR_STORAGE_KEY};
use crate::util::error::PersistError;

/// Encode the sidebar flag as stored text.
pub fn encode_sidebar_flag(open: bool) -> String {
    // Serialising a bool cannot fail.
    serde_json::to_string(&open).unwrap_or_else(|_| open.to_string())
}

/// Decode stored text into the sidebar flag.
pub fn decode_sidebar_flag(raw: &str) -> Result<bool, PersistError> {
    serde_json::from_str::<bool>(raw).map_err(|e| PersistError::Malformed {
        key: SIDEBAR_STORAGE_KEY,
        raw: raw.to_string(),
        source: e,
    })
}

/// Read the sidebar flag, falling back to the default on any problem.
pub fn read_sidebar_open(store: &dyn KeyValueStore) -> bool {
    let raw = match store.get(SIDEBAR_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = SIDEBAR_STORAGE_KEY, "No stored sidebar state; using default");
            return DEFAULT_SIDEBAR_OPEN;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Cannot read sidebar state; using default");
            return DEFAULT_SIDEBAR_OPEN;
        }
    };

    match decode_sidebar_flag(&raw) {
        Ok(open) => {
            tracing::debug!(open, "Restored sidebar state");
            open
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed sidebar state; using default");
            DEFAULT_SIDEBAR_OPEN
        }
    }
}

/// Write the sidebar flag. Exactly one `set` call; errors are logged only.
pub fn write_sidebar_open(store: &mut dyn KeyValueStore, open: bool) {
    match store.set(SIDEBAR_STORAGE_KEY, &encode_sidebar_flag(open)) {
        Ok(()) => tracing::debug!(open, "Sidebar state persisted"),
        Err(e) => tracing::warn!(error = %e, open, "Failed to persist sidebar state"),
    }
}
