//! Configuration types for the ACL service

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::AclError;

/// Default key the snapshot is stored under
pub const DEFAULT_STORAGE_KEY: &str = "AclService";

/// Which storage backend persists the authorization state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum StorageKind {
    /// Persistence disabled
    None,
    /// Cleared at the end of the session
    #[default]
    Session,
    /// Survives across sessions
    Persistent,
}

impl StorageKind {
    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::None => "none",
            StorageKind::Session => "session",
            StorageKind::Persistent => "persistent",
        }
    }

    /// Whether this kind persists anything at all
    pub fn is_enabled(&self) -> bool {
        *self != StorageKind::None
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKind {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(StorageKind::None),
            "session" | "sessionStorage" => Ok(StorageKind::Session),
            "persistent" | "localStorage" => Ok(StorageKind::Persistent),
            other => Err(AclError::Config(format!("Unknown storage kind '{}'", other))),
        }
    }
}

/// Lenient conversion used when deserializing: unknown names disable storage.
impl From<String> for StorageKind {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(storage = %value, "unknown storage kind, persistence disabled");
            StorageKind::None
        })
    }
}

/// Accepts any value: strings go through `From<String>`, everything else
/// (`false`, `null`, numbers, ...) disables storage.
impl<'de> Deserialize<'de> for StorageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Ok(name.into()),
            other => {
                tracing::warn!(storage = %other, "non-string storage kind, persistence disabled");
                Ok(StorageKind::None)
            }
        }
    }
}

impl From<StorageKind> for String {
    fn from(kind: StorageKind) -> Self {
        kind.as_str().to_string()
    }
}

/// ACL service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AclConfig {
    /// Storage backend for the snapshot
    pub storage: StorageKind,

    /// Key the snapshot is stored under
    pub storage_key: String,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl AclConfig {
    /// Configuration with persistence disabled
    pub fn without_storage() -> Self {
        Self {
            storage: StorageKind::None,
            ..Default::default()
        }
    }

    /// Set the storage kind
    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = storage;
        self
    }

    /// Set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Merge user supplied options over this configuration
    pub fn extend(&mut self, overrides: ConfigOverrides) {
        if let Some(storage) = overrides.storage {
            self.storage = storage;
        }
        if let Some(key) = overrides.storage_key {
            self.storage_key = key;
        }
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON or YAML (`.yaml`/`.yml`) file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(config)
    }
}

/// Partial configuration; only the fields present are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub storage: Option<StorageKind>,
    pub storage_key: Option<String>,
}
