//! AclService - Role attachment, ability registration and permission checks

use shared::{
    abilities_from_value, Ability, AbilityMap, AclConfig, ConfigOverrides, Role, Snapshot,
    StorageKind,
};
use storage::StorageBackends;
use tracing::debug;

use crate::persistence::PersistenceController;
use crate::state::AuthorizationState;

/// The permission engine.
///
/// Every mutation is written through to the configured storage backend.
/// Queries never fail: unknown roles and abilities simply answer `false`.
///
/// ```
/// use acl::AclService;
///
/// let mut acl = AclService::in_memory();
/// acl.attach_role("guest");
/// acl.add_ability("guest", "login");
///
/// assert!(acl.can("login"));
/// assert!(!acl.can("logout"));
/// ```
#[derive(Debug)]
pub struct AclService {
    /// Attached roles and abilities
    state: AuthorizationState,
    /// Active configuration
    config: AclConfig,
    /// Backends available for `reconfigure`
    backends: StorageBackends,
    /// Snapshot writer for the active backend
    persistence: PersistenceController,
}

impl AclService {
    /// Create a new AclService with empty state
    pub fn new(config: AclConfig, backends: StorageBackends) -> Self {
        let persistence = PersistenceController::new(&config, &backends);
        Self {
            state: AuthorizationState::new(),
            config,
            backends,
            persistence,
        }
    }

    /// Service without any persistence
    pub fn in_memory() -> Self {
        Self::new(AclConfig::without_storage(), StorageBackends::none())
    }

    /// Active configuration
    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    /// Kind of the backend actually in use (`None` if the configured one is unavailable)
    pub fn storage_kind(&self) -> StorageKind {
        self.persistence.kind()
    }

    /// Replace the configuration and re-select the storage backend.
    ///
    /// Attached roles and abilities are kept as they are.
    pub fn reconfigure(&mut self, config: AclConfig) {
        self.persistence = PersistenceController::new(&config, &self.backends);
        self.config = config;
        debug!(storage = %self.persistence.kind(), key = %self.config.storage_key, "acl reconfigured");
    }

    /// Merge user options into the current configuration
    pub fn configure(&mut self, overrides: ConfigOverrides) {
        let mut config = self.config.clone();
        config.extend(overrides);
        self.reconfigure(config);
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Attach a role to the current user
    pub fn attach_role(&mut self, role: &str) {
        if self.state.insert_role(role) {
            debug!(role = %role, "role attached");
        }
        self.save();
    }

    /// Remove a role from the current user
    pub fn detach_role(&mut self, role: &str) {
        if self.state.remove_role(role) {
            debug!(role = %role, "role detached");
        }
        self.save();
    }

    /// Remove all roles from the current user
    pub fn flush_roles(&mut self) {
        self.state.clear_roles();
        debug!("roles flushed");
        self.save();
    }

    /// Replace the whole ability mapping.
    ///
    /// ```
    /// use acl::AclService;
    /// use shared::AbilityMap;
    ///
    /// let mut abilities = AbilityMap::new();
    /// abilities.insert("guest".into(), vec!["login".into()]);
    /// abilities.insert("user".into(), vec!["logout".into(), "view_content".into()]);
    ///
    /// let mut acl = AclService::in_memory();
    /// acl.set_abilities(abilities);
    /// acl.attach_role("user");
    /// assert!(acl.can("view_content"));
    /// ```
    pub fn set_abilities(&mut self, abilities: AbilityMap) {
        debug!(roles = abilities.len(), "abilities replaced");
        self.state.replace_abilities(abilities);
        self.save();
    }

    /// Replace the ability mapping from untyped JSON.
    ///
    /// Roles whose value is not an array of strings end up with no abilities.
    pub fn set_abilities_from_value(&mut self, abilities: &serde_json::Value) {
        self.set_abilities(abilities_from_value(abilities));
    }

    /// Append an ability to a role. Duplicates are kept.
    pub fn add_ability(&mut self, role: &str, ability: &str) {
        self.state.push_ability(role, ability);
        debug!(role = %role, ability = %ability, "ability added");
        self.save();
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Is the role attached?
    pub fn has_role(&self, role: &str) -> bool {
        self.state.is_attached(role)
    }

    /// Are all of the roles attached? An empty list answers `false`.
    pub fn has_roles<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        !roles.is_empty() && roles.iter().all(|r| self.has_role(r.as_ref()))
    }

    /// Is at least one of the roles attached?
    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().any(|r| self.has_role(r.as_ref()))
    }

    /// Roles attached to the current user
    pub fn roles(&self) -> &[Role] {
        self.state.roles()
    }

    /// The full ability mapping
    pub fn abilities(&self) -> &AbilityMap {
        self.state.abilities()
    }

    /// Abilities registered for a role, empty if unknown
    pub fn abilities_for(&self, role: &str) -> &[Ability] {
        self.state.abilities_for(role)
    }

    /// Does any attached role grant the ability?
    pub fn can(&self, ability: &str) -> bool {
        self.state
            .roles()
            .iter()
            .any(|role| self.state.abilities_for(role).iter().any(|a| a == ability))
    }

    /// Does any attached role grant at least one of the abilities?
    pub fn can_any<S: AsRef<str>>(&self, abilities: &[S]) -> bool {
        abilities.iter().any(|a| self.can(a.as_ref()))
    }

    /// Current state in its persisted form
    pub fn snapshot(&self) -> Snapshot {
        self.state.to_snapshot()
    }

    // ---------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------

    /// Write the current state to storage
    pub fn save(&self) {
        self.persistence.save(&self.state);
    }

    /// Restore state from storage. Returns whether a snapshot was loaded.
    pub fn resume(&mut self) -> bool {
        self.persistence.resume(&mut self.state)
    }

    /// Remove the stored snapshot, keeping the live state
    pub fn flush_storage(&self) {
        self.persistence.clear();
        debug!(key = %self.config.storage_key, "acl storage flushed");
    }
}

impl Default for AclService {
    fn default() -> Self {
        Self::in_memory()
    }
}
