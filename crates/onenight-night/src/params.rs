//! Parameters a collaborator supplies for one night action.
//!
//! A single flat struct covers every role. Each resolver reads only the
//! fields its role uses and ignores the rest, so the same shape works
//! for humans, automated agents and replays:
//!
//! | Role | Fields read |
//! |------|-------------|
//! | Werewolf (solo) | `view_center_index` (0 or absent = no look) |
//! | Minion | none |
//! | Seer | `inspect_player_id` *or* `inspect_centers` |
//! | Robber | `swap_with_player_id` *or* `swap: false` |
//! | Troublemaker | `swap_player_id_1`, `swap_player_id_2` |
//! | Drunk | `center_index` |
//! | Insomniac | none |

use onenight_state::PlayerId;
use serde::{Deserialize, Serialize};

/// Structured night-action choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_center_index: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspect_player_id: Option<PlayerId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspect_centers: Option<Vec<u8>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_with_player_id: Option<PlayerId>,

    /// `Some(false)` is the Robber's explicit "do not swap".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_player_id_1: Option<PlayerId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_player_id_2: Option<PlayerId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_index: Option<u8>,
}

impl NightParams {
    /// No choices at all. Enough for Minion, Insomniac and Hunter.
    pub fn none() -> Self {
        Self::default()
    }

    /// Lone werewolf peeks at a center card (0 = don't look).
    pub fn view_center(index: u8) -> Self {
        Self {
            view_center_index: Some(index),
            ..Self::default()
        }
    }

    pub fn inspect_player(target: PlayerId) -> Self {
        Self {
            inspect_player_id: Some(target),
            ..Self::default()
        }
    }

    pub fn inspect_centers(first: u8, second: u8) -> Self {
        Self {
            inspect_centers: Some(vec![first, second]),
            ..Self::default()
        }
    }

    /// Robber takes `target`'s card.
    pub fn rob(target: PlayerId) -> Self {
        Self {
            swap_with_player_id: Some(target),
            ..Self::default()
        }
    }

    /// Robber declines to swap.
    pub fn skip() -> Self {
        Self {
            swap: Some(false),
            ..Self::default()
        }
    }

    pub fn troublemake(first: PlayerId, second: PlayerId) -> Self {
        Self {
            swap_player_id_1: Some(first),
            swap_player_id_2: Some(second),
            ..Self::default()
        }
    }

    pub fn drunk(index: u8) -> Self {
        Self {
            center_index: Some(index),
            ..Self::default()
        }
    }

    /// Whether the Robber's skip signal is set.
    pub fn is_skip(&self) -> bool {
        self.swap == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_structured_json() {
        let params: NightParams =
            serde_json::from_str(r#"{"swap_player_id_1": 2, "swap_player_id_2": 6}"#).unwrap();
        assert_eq!(params, NightParams::troublemake(PlayerId(2), PlayerId(6)));

        let params: NightParams = serde_json::from_str(r#"{"inspect_centers": [1, 3]}"#).unwrap();
        assert_eq!(params.inspect_centers, Some(vec![1, 3]));
    }

    #[test]
    fn test_empty_object_is_none() {
        let params: NightParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, NightParams::none());
    }

    #[test]
    fn test_skip_signal() {
        assert!(NightParams::skip().is_skip());
        assert!(!NightParams::none().is_skip());
        let params: NightParams = serde_json::from_str(r#"{"swap": true}"#).unwrap();
        assert!(!params.is_skip());
    }

    #[test]
    fn test_serializes_only_set_fields() {
        let json = serde_json::to_string(&NightParams::drunk(2)).unwrap();
        assert_eq!(json, r#"{"center_index":2}"#);
    }
}
