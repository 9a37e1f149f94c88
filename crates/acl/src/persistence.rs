//! PersistenceController - Keeps the stored snapshot in sync with the state

use shared::{AclConfig, Snapshot, StorageKind};
use storage::{StorageAdapter, StorageBackends};
use tracing::{debug, warn};

use crate::state::AuthorizationState;

/// Writes and restores [`AuthorizationState`] through the configured backend.
///
/// Storage failures never reach the caller: writes are fire-and-forget and
/// an unreadable snapshot is treated as absent.
#[derive(Debug, Clone, Default)]
pub struct PersistenceController {
    storage_key: String,
    adapter: StorageAdapter,
}

impl PersistenceController {
    /// Resolve the configured backend from the available ones
    pub fn new(config: &AclConfig, backends: &StorageBackends) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            adapter: StorageAdapter::resolve(config.storage, backends),
        }
    }

    /// Kind of the backend actually in use
    pub fn kind(&self) -> StorageKind {
        self.adapter.kind()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Overwrite the stored snapshot with `state`
    pub fn save(&self, state: &AuthorizationState) {
        if !self.adapter.is_enabled() {
            return;
        }

        let encoded = match state.to_snapshot().encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "failed to encode acl snapshot");
                return;
            }
        };

        if let Err(e) = self.adapter.set(&self.storage_key, &encoded) {
            warn!(key = %self.storage_key, error = %e, "failed to save acl snapshot");
        }
    }

    /// Load the stored snapshot into `state`.
    ///
    /// Returns false, leaving `state` untouched, when storage is disabled or
    /// the stored value is missing or undecodable.
    pub fn resume(&self, state: &mut AuthorizationState) -> bool {
        if !self.adapter.is_enabled() {
            return false;
        }

        let stored = match self.adapter.get(&self.storage_key) {
            Ok(Some(stored)) => stored,
            Ok(None) => return false,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "failed to read acl snapshot");
                return false;
            }
        };

        match Snapshot::decode(&stored) {
            Ok(snapshot) => {
                state.restore(snapshot);
                debug!(key = %self.storage_key, roles = state.roles().len(), "resumed acl snapshot");
                true
            }
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "ignoring undecodable acl snapshot");
                false
            }
        }
    }

    /// Remove the stored snapshot. Live state is not touched.
    pub fn clear(&self) {
        if let Err(e) = self.adapter.remove(&self.storage_key) {
            warn!(key = %self.storage_key, error = %e, "failed to remove acl snapshot");
        }
    }
}
