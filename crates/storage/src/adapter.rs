//! StorageAdapter - Backend selection by storage kind

use std::sync::Arc;

use shared::{Result, StorageKind};

use crate::{FileStore, KeyValueStore, MemoryStore};

/// Backends provided by the host environment.
///
/// Either backend may be missing (e.g., an environment without durable
/// storage). Selecting a missing backend disables persistence.
#[derive(Debug, Clone, Default)]
pub struct StorageBackends {
    session: Option<Arc<dyn KeyValueStore>>,
    persistent: Option<Arc<dyn KeyValueStore>>,
}

impl StorageBackends {
    /// No backends available
    pub fn none() -> Self {
        Self::default()
    }

    /// Process-local session backend only
    pub fn in_process() -> Self {
        Self::default().with_session(MemoryStore::new())
    }

    /// Session backend in memory, persistent backend under `dir`
    pub fn on_disk(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::in_process().with_persistent(FileStore::new(dir))
    }

    pub fn with_session(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.session = Some(Arc::new(store));
        self
    }

    pub fn with_persistent(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.persistent = Some(Arc::new(store));
        self
    }

    pub fn session(&self) -> Option<&Arc<dyn KeyValueStore>> {
        self.session.as_ref()
    }

    pub fn persistent(&self) -> Option<&Arc<dyn KeyValueStore>> {
        self.persistent.as_ref()
    }
}

/// The backend the snapshot is written to
#[derive(Debug, Clone, Default)]
pub enum StorageAdapter {
    /// Persistence disabled; reads are absent and writes are dropped
    #[default]
    None,
    Session(Arc<dyn KeyValueStore>),
    Persistent(Arc<dyn KeyValueStore>),
}

impl StorageAdapter {
    /// Pick the backend for `kind`, falling back to `None` when unavailable
    pub fn resolve(kind: StorageKind, backends: &StorageBackends) -> Self {
        let adapter = match kind {
            StorageKind::None => None,
            StorageKind::Session => backends.session().cloned().map(StorageAdapter::Session),
            StorageKind::Persistent => backends
                .persistent()
                .cloned()
                .map(StorageAdapter::Persistent),
        };

        adapter.unwrap_or_else(|| {
            if kind.is_enabled() {
                tracing::debug!(storage = %kind, "storage backend unavailable, persistence disabled");
            }
            StorageAdapter::None
        })
    }

    /// Kind of the resolved backend
    pub fn kind(&self) -> StorageKind {
        match self {
            StorageAdapter::None => StorageKind::None,
            StorageAdapter::Session(_) => StorageKind::Session,
            StorageAdapter::Persistent(_) => StorageKind::Persistent,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, StorageAdapter::None)
    }

    fn store(&self) -> Option<&dyn KeyValueStore> {
        match self {
            StorageAdapter::None => None,
            StorageAdapter::Session(store) | StorageAdapter::Persistent(store) => {
                Some(store.as_ref())
            }
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match self.store() {
            Some(store) => store.get(key),
            None => Ok(None),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        match self.store() {
            Some(store) => store.set(key, value),
            None => Ok(()),
        }
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        match self.store() {
            Some(store) => store.remove(key),
            None => Ok(()),
        }
    }
}
