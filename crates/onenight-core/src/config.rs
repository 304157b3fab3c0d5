//! Configuration types for a round.

use std::fs;
use std::path::Path;

use onenight_night::WakeRule;
use onenight_state::PLAYER_COUNT;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::GameError, Result};

/// Configuration for a [`Game`](crate::Game).
///
/// Every section and field is optional in JSON; missing values take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats and the deal.
    pub table: TableConfig,

    /// Night walk settings.
    pub night: NightConfig,

    /// Round report settings.
    pub report: ReportConfig,
}

/// Seats and the deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Display names, seat 1 first.
    pub player_names: Vec<String>,

    /// Shuffle seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_names: (1..=PLAYER_COUNT).map(|i| format!("P{}", i)).collect(),
            seed: None,
        }
    }
}

/// Night walk settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightConfig {
    /// Which seats wake at each role's turn.
    pub wake_rule: WakeRule,
}

/// Round report settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Include the private night action log in the report.
    pub reveal_night_log: bool,
}

impl GameConfig {
    /// Loads a JSON config file.
    ///
    /// # Errors
    ///
    /// I/O failure or malformed JSON. The result is not validated; call
    /// [`validate`](Self::validate) or let [`Game::new`](crate::Game::new) do it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Checks that the table has exactly six non-blank names.
    pub fn validate(&self) -> Result<()> {
        let names = &self.table.player_names;
        if names.len() != PLAYER_COUNT {
            return Err(GameError::Config(format!(
                "expected {} player names, got {}",
                PLAYER_COUNT,
                names.len()
            )));
        }
        if let Some(seat) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(GameError::Config(format!(
                "player name for seat {} is blank",
                seat + 1
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.table.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.table.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_wake_rule(mut self, wake_rule: WakeRule) -> Self {
        self.night.wake_rule = wake_rule;
        self
    }

    #[must_use]
    pub fn with_night_log(mut self, reveal: bool) -> Self {
        self.report.reveal_night_log = reveal;
        self
    }
}
