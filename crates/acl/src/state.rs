//! AuthorizationState - Attached roles and the role -> abilities mapping

use shared::{Ability, AbilityMap, Role, Snapshot};

/// The two mappings the ACL service answers queries from.
///
/// Holds no ability-checking logic, only membership and lookup. Attached
/// roles never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationState {
    /// Roles attached to the current user, in attachment order
    roles: Vec<Role>,
    /// Abilities per role
    abilities: AbilityMap,
}

impl AuthorizationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached roles
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The full ability mapping
    pub fn abilities(&self) -> &AbilityMap {
        &self.abilities
    }

    /// Is `role` a key of the ability mapping (even with no abilities)?
    pub fn has_role_entry(&self, role: &str) -> bool {
        self.abilities.contains_key(role)
    }

    /// Abilities of `role`, empty if the role is unknown
    pub fn abilities_for(&self, role: &str) -> &[Ability] {
        self.abilities
            .get(role)
            .map(|a| a.as_slice())
            .unwrap_or_default()
    }

    /// Is `role` attached?
    pub fn is_attached(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Attach `role` unless already attached. Returns whether it was added.
    pub(crate) fn insert_role(&mut self, role: &str) -> bool {
        if self.is_attached(role) {
            return false;
        }
        self.roles.push(role.to_string());
        true
    }

    /// Detach `role`. Returns whether it was attached.
    pub(crate) fn remove_role(&mut self, role: &str) -> bool {
        match self.roles.iter().position(|r| r == role) {
            Some(i) => {
                self.roles.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_roles(&mut self) {
        self.roles.clear();
    }

    pub(crate) fn replace_abilities(&mut self, abilities: AbilityMap) {
        self.abilities = abilities;
    }

    /// Append `ability` to the role's list, creating the entry if needed
    pub(crate) fn push_ability(&mut self, role: &str, ability: &str) {
        self.abilities
            .entry(role.to_string())
            .or_default()
            .push(ability.to_string());
    }

    /// Copy of the current state in its persisted form
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot::new(self.roles.clone(), self.abilities.clone())
    }

    /// Overwrite both mappings from a snapshot.
    ///
    /// Duplicate roles in the snapshot are collapsed to their first occurrence.
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.roles.clear();
        for role in &snapshot.roles {
            self.insert_role(role);
        }
        self.abilities = snapshot.abilities;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_role_is_idempotent() {
        let mut state = AuthorizationState::new();
        assert!(state.insert_role("admin"));
        assert!(!state.insert_role("admin"));
        assert_eq!(state.roles(), ["admin"]);
    }

    #[test]
    fn test_remove_role() {
        let mut state = AuthorizationState::new();
        state.insert_role("a");
        state.insert_role("b");
        state.insert_role("c");

        assert!(state.remove_role("b"));
        assert!(!state.remove_role("b"));
        assert_eq!(state.roles(), ["a", "c"]);
    }

    #[test]
    fn test_role_entry_vs_abilities() {
        let mut state = AuthorizationState::new();
        let mut abilities = AbilityMap::new();
        abilities.insert("guest".to_string(), Vec::new());
        state.replace_abilities(abilities);

        assert!(state.has_role_entry("guest"));
        assert!(!state.has_role_entry("admin"));
        assert!(state.abilities_for("guest").is_empty());
        assert!(state.abilities_for("admin").is_empty());
    }

    #[test]
    fn test_push_ability_creates_entry() {
        let mut state = AuthorizationState::new();
        state.push_ability("user", "read");
        state.push_ability("user", "read");
        assert_eq!(state.abilities_for("user"), ["read", "read"]);
    }

    #[test]
    fn test_restore_overwrites_and_dedupes() {
        let mut state = AuthorizationState::new();
        state.insert_role("old");
        state.push_ability("old", "stale");

        let mut abilities = AbilityMap::new();
        abilities.insert("admin".to_string(), vec!["manage_users".to_string()]);
        let snapshot = Snapshot::new(
            vec!["admin".to_string(), "user".to_string(), "admin".to_string()],
            abilities,
        );
        state.restore(snapshot);

        assert_eq!(state.roles(), ["admin", "user"]);
        assert!(!state.has_role_entry("old"));
        assert_eq!(state.abilities_for("admin"), ["manage_users"]);
    }

    #[test]
    fn test_to_snapshot() {
        let mut state = AuthorizationState::new();
        state.insert_role("guest");
        state.push_ability("guest", "login");

        let snapshot = state.to_snapshot();
        assert_eq!(snapshot.roles, vec!["guest"]);
        assert_eq!(snapshot.abilities["guest"], vec!["login"]);
    }
}
