//! # ACL
//!
//! Client-side access control: which roles the current user holds, which
//! abilities each role grants, and whether the user may do something.
//!
//! ## Components
//!
//! - `AclService` - Role/ability mutations and permission queries
//! - `AuthorizationState` - Attached roles and the role -> abilities mapping
//! - `PersistenceController` - Snapshot save/resume through `storage`
//! - `AclShow` - Element visibility driven by `AclService::can_any`

pub mod acl_service;
pub mod acl_show;
pub mod persistence;
pub mod state;

pub use acl_service::AclService;
pub use acl_show::{AclShow, Visibility};
pub use persistence::PersistenceController;
pub use state::AuthorizationState;

pub use shared::{Ability, AbilityMap, AclConfig, ConfigOverrides, Role, Snapshot, StorageKind};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageBackends};
