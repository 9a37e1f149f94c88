//! KeyValueStore - The storage capability consumed by the ACL service
//!
//! Backends store raw strings. Encoding the snapshot is the caller's job.

use shared::Result;

/// Synchronous string key/value storage
pub trait KeyValueStore: std::fmt::Debug + Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
