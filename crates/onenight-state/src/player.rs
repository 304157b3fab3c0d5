//! Seats at the table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Stable seat number, 1 through 6.
///
/// The wrapper does not validate on construction: ids arrive from
/// outside collaborators and are checked against the [`MatchState`]
/// they are used with.
///
/// [`MatchState`]: crate::MatchState
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Returns the raw seat number.
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for PlayerId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// One participant in the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat number.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Card dealt at setup. Never changes.
    initial_role: Role,
    /// Card held now. Changes only through swaps.
    pub(crate) current_role: Role,
    /// Who this player voted for, once they have.
    pub(crate) vote_target: Option<PlayerId>,
    /// Reserved for multi-round play; always true within one round.
    pub is_alive: bool,
}

impl Player {
    /// Creates a player holding the card they were dealt.
    pub fn new(id: PlayerId, name: impl Into<String>, dealt: Role) -> Self {
        Self {
            id,
            name: name.into(),
            initial_role: dealt,
            current_role: dealt,
            vote_target: None,
            is_alive: true,
        }
    }

    pub fn initial_role(&self) -> Role {
        self.initial_role
    }

    pub fn current_role(&self) -> Role {
        self.current_role
    }

    pub fn vote_target(&self) -> Option<PlayerId> {
        self.vote_target
    }

    /// Whether the card in front of this player differs from the one dealt.
    pub fn was_swapped(&self) -> bool {
        self.initial_role != self.current_role
    }

    /// Sets the vote directly, bypassing validation.
    ///
    /// Meant for building resolver inputs in tests and replays; live
    /// rounds go through [`MatchState::cast_vote`](crate::MatchState::cast_vote).
    pub fn with_vote(mut self, target: PlayerId) -> Self {
        self.vote_target = Some(target);
        self
    }

    /// Replaces the current card, bypassing the swap discipline.
    ///
    /// Same caveat as [`with_vote`](Self::with_vote).
    pub fn holding(mut self, role: Role) -> Self {
        self.current_role = role;
        self
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.name)
    }
}
