//! Result of a single night action.

use std::collections::BTreeMap;

use onenight_state::{PlayerId, Role, StateError};
use serde::{Deserialize, Serialize};

/// How a night action ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    /// The role's effect happened.
    Performed,
    /// The actor chose not to act (lone wolf not looking, Robber skipping).
    Declined,
    /// Parameters failed validation. Nothing changed.
    Rejected(StateError),
    /// The actor's role has no night action.
    NoNightAction,
}

/// What a night action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightOutcome {
    /// Seat that acted.
    pub actor: PlayerId,
    /// Role the seat acted as; `None` if the seat does not exist.
    pub role: Option<Role>,
    pub status: ActionStatus,
    /// Human-readable account, also appended to the match action log.
    pub log: String,
    /// New current role of every seat whose card moved.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub changed_roles: BTreeMap<PlayerId, Role>,
    /// New card in every center slot that moved.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub changed_centers: BTreeMap<u8, Role>,
}

impl NightOutcome {
    pub(crate) fn new(actor: PlayerId, role: Option<Role>, status: ActionStatus, log: String) -> Self {
        Self {
            actor,
            role,
            status,
            log,
            changed_roles: BTreeMap::new(),
            changed_centers: BTreeMap::new(),
        }
    }

    /// Returns true if the role's effect happened.
    pub fn is_performed(&self) -> bool {
        matches!(self.status, ActionStatus::Performed)
    }

    /// Returns true if validation failed.
    pub fn is_rejected(&self) -> bool {
        matches!(self.status, ActionStatus::Rejected(_))
    }

    /// The validation error, for rejected actions.
    pub fn error(&self) -> Option<&StateError> {
        match &self.status {
            ActionStatus::Rejected(e) => Some(e),
            _ => None,
        }
    }

    /// Whether any card moved.
    pub fn mutated(&self) -> bool {
        !self.changed_roles.is_empty() || !self.changed_centers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let outcome = NightOutcome::new(
            PlayerId(1),
            Some(Role::Drunk),
            ActionStatus::Rejected(StateError::missing("center_index")),
            "no action".to_string(),
        );
        assert!(outcome.is_rejected());
        assert!(!outcome.is_performed());
        assert!(!outcome.mutated());
        assert_eq!(outcome.error(), Some(&StateError::missing("center_index")));
    }

    #[test]
    fn test_changed_roles_serialize_by_id() {
        let mut outcome = NightOutcome::new(
            PlayerId(3),
            Some(Role::Robber),
            ActionStatus::Performed,
            "swap".to_string(),
        );
        outcome.changed_roles.insert(PlayerId(3), Role::Seer);
        outcome.changed_roles.insert(PlayerId(5), Role::Robber);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["changed_roles"]["3"], "Seer");
        assert_eq!(json["changed_roles"]["5"], "Robber");
        assert!(json.get("changed_centers").is_none());
    }
}
