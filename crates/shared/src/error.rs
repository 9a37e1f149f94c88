//! Error types for the ACL crates

use thiserror::Error;

/// General ACL error type
#[derive(Debug, Error)]
pub enum AclError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AclError {
    /// Build a storage error for the given key
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AclError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_message() {
        let err = AclError::storage("AclService", "lock poisoned");
        assert_eq!(
            err.to_string(),
            "Storage error for key 'AclService': lock poisoned"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: AclError = parse.unwrap_err().into();
        assert!(matches!(err, AclError::Json(_)));
    }
}
