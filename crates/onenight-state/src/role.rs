//! The fixed role catalog.
//!
//! Nine cards are in play every round: two Werewolves and one each of
//! the other seven roles. Roles are plain values; the only thing that
//! ever moves during a round is *where* a card sits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The side a role plays for at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Werewolves and the Minion.
    WerewolfAligned,
    /// Everyone else.
    VillageAligned,
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WerewolfAligned => write!(f, "werewolf team"),
            Self::VillageAligned => write!(f, "village team"),
        }
    }
}

/// A role card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Werewolf,
    Minion,
    Seer,
    Robber,
    Troublemaker,
    Drunk,
    Insomniac,
    Hunter,
}

/// The nine-card starter pool for six players.
pub const STARTER_POOL: [Role; 9] = [
    Role::Werewolf,
    Role::Werewolf,
    Role::Minion,
    Role::Seer,
    Role::Robber,
    Role::Troublemaker,
    Role::Drunk,
    Role::Insomniac,
    Role::Hunter,
];

/// Order in which roles wake during the night.
///
/// Hunter is absent: it has no night action.
pub const NIGHT_ORDER: [Role; 7] = [
    Role::Werewolf,
    Role::Minion,
    Role::Seer,
    Role::Robber,
    Role::Troublemaker,
    Role::Drunk,
    Role::Insomniac,
];

impl Role {
    /// Display name of the card.
    pub const fn name(&self) -> &'static str {
        match self {
            Role::Werewolf => "Werewolf",
            Role::Minion => "Minion",
            Role::Seer => "Seer",
            Role::Robber => "Robber",
            Role::Troublemaker => "Troublemaker",
            Role::Drunk => "Drunk",
            Role::Insomniac => "Insomniac",
            Role::Hunter => "Hunter",
        }
    }

    /// Which side this card plays for.
    pub const fn faction(&self) -> Faction {
        match self {
            Role::Werewolf | Role::Minion => Faction::WerewolfAligned,
            _ => Faction::VillageAligned,
        }
    }

    /// Whether the holder wakes during the night.
    pub const fn has_night_action(&self) -> bool {
        !matches!(self, Role::Hunter)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
