//! Replayable round scripts.
//!
//! A [`RoundScript`] records every choice made in a round: night
//! parameters per seat, the discussion, and the vote. Scripts drive
//! automated play and make rounds reproducible together with a seed.
//!
//! ```json
//! {
//!   "night": { "3": { "inspect_centers": [1, 2] }, "4": { "swap_with_player_id": 1 } },
//!   "speeches": [ { "player_id": 3, "content": "I saw the center." } ],
//!   "votes": { "1": 4, "2": 4, "3": 4 }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use onenight_night::{NightParams, ParamSource};
use onenight_state::{MatchState, PlayerId, Role};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// One scripted discussion line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedSpeech {
    pub player_id: PlayerId,
    pub content: String,
}

/// Every choice made in one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundScript {
    /// Night parameters per acting seat. Unscripted seats act with
    /// empty parameters.
    pub night: BTreeMap<PlayerId, NightParams>,

    /// Discussion, in order.
    pub speeches: Vec<ScriptedSpeech>,

    /// Voter to target.
    pub votes: BTreeMap<PlayerId, PlayerId>,
}

impl RoundScript {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading round script from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Night parameters for `actor`.
    pub fn params_for(&self, actor: PlayerId) -> NightParams {
        self.night.get(&actor).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn with_night(mut self, actor: PlayerId, params: NightParams) -> Self {
        self.night.insert(actor, params);
        self
    }

    #[must_use]
    pub fn with_speech(mut self, player_id: PlayerId, content: impl Into<String>) -> Self {
        self.speeches.push(ScriptedSpeech {
            player_id,
            content: content.into(),
        });
        self
    }

    #[must_use]
    pub fn with_vote(mut self, voter: PlayerId, target: PlayerId) -> Self {
        self.votes.insert(voter, target);
        self
    }
}

impl ParamSource for RoundScript {
    fn choose(&mut self, _state: &MatchState, actor: PlayerId, _role: Role) -> NightParams {
        self.params_for(actor)
    }
}
