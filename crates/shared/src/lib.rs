//! # ACL Shared
//!
//! Common types used across the ACL crates: role and ability identifiers,
//! the persisted snapshot format, configuration and errors.

pub mod config;
pub mod error;
pub mod snapshot;

// Re-exports
pub use config::*;
pub use error::*;
pub use snapshot::*;
