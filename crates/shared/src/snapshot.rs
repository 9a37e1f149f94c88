//! Role/ability identifiers and the persisted snapshot format

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role identifier (e.g., 'guest', 'admin')
pub type Role = String;

/// Ability identifier (e.g., 'login', 'manage_users')
pub type Ability = String;

/// Role -> abilities granted to it. A role without an entry has no abilities.
pub type AbilityMap = BTreeMap<Role, Vec<Ability>>;

/// Serialized form of the authorization state.
///
/// Stored as JSON with exactly two fields:
///
/// ```json
/// {"roles":["user"],"abilities":{"user":["logout","view_content"]}}
/// ```
///
/// Both fields are required when decoding, so a payload can never restore
/// only half of the state. Within `abilities`, entries that are not arrays
/// of strings are dropped the same way [`abilities_from_value`] drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Attached roles, in attachment order
    pub roles: Vec<Role>,

    /// Abilities per role
    pub abilities: AbilityMap,
}

impl Snapshot {
    /// Create a snapshot from its parts
    pub fn new(roles: Vec<Role>, abilities: AbilityMap) -> Self {
        Self { roles, abilities }
    }

    /// Encode to the text stored by the persistence backend
    pub fn encode(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode text previously produced by [`Snapshot::encode`]
    pub fn decode(text: &str) -> crate::Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(text)?;
        if !raw.abilities.is_object() {
            return Err(serde_json::Error::custom("abilities must be an object").into());
        }
        Ok(Self::new(raw.roles, abilities_from_value(&raw.abilities)))
    }
}

/// Stored payload before the ability entries are checked
#[derive(Deserialize)]
struct RawSnapshot {
    roles: Vec<Role>,
    abilities: serde_json::Value,
}

/// Build an ability map from an untyped JSON value.
///
/// Only entries whose value is an array of strings are kept. Anything else
/// (numbers, objects, arrays holding non-strings) is dropped so the role
/// behaves as having no abilities. A non-object input yields an empty map.
pub fn abilities_from_value(value: &serde_json::Value) -> AbilityMap {
    let Some(entries) = value.as_object() else {
        return AbilityMap::new();
    };

    entries
        .iter()
        .filter_map(|(role, abilities)| {
            let list = abilities.as_array()?;
            let abilities: Option<Vec<Ability>> = list
                .iter()
                .map(|a| a.as_str().map(str::to_string))
                .collect();
            abilities.map(|a| (role.clone(), a))
        })
        .collect()
}
