//! # ACL Storage
//!
//! Synchronous key/value backends for the persisted authorization snapshot.
//!
//! ## Components
//!
//! - `KeyValueStore` - Backend capability (get / set / remove)
//! - `MemoryStore` - In-process backend, lives as long as the session
//! - `FileStore` - Directory-backed backend that survives restarts
//! - `StorageAdapter` - The backend selected by configuration, or none

pub mod adapter;
pub mod file;
pub mod memory;
pub mod store;

pub use adapter::{StorageAdapter, StorageBackends};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
