//! Error types for match state operations.
//!
//! The first four variants of [`StateError`] are the rule-violation
//! taxonomy shared by night actions and voting. None of them is fatal:
//! callers turn them into a "no action taken" log line or a `false`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::player::PlayerId;

/// Result type alias for state operations.
pub type Result<T> = std::result::Result<T, StateError>;

/// Something a parameter pointed at that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    /// A player id outside the table.
    Player(PlayerId),
    /// A center index outside 1..=3.
    CenterIndex(u8),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "no player with id {}", id),
            Self::CenterIndex(index) => write!(f, "center index {} is not in 1..=3", index),
        }
    }
}

/// Coarse classification of a [`StateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidReference,
    IllegalSelfTarget,
    MissingParameter,
    DuplicateSelection,
    Setup,
    Vote,
}

/// Errors raised while validating an operation against the match state.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StateError {
    /// Unknown player id or out-of-range center index.
    #[error("invalid reference: {0}")]
    InvalidReference(Reference),

    /// A vote or swap naming the acting player.
    #[error("player {0} cannot target themselves")]
    IllegalSelfTarget(PlayerId),

    /// A required choice was not supplied.
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// Two selections that must differ are equal.
    #[error("duplicate selection: {0}")]
    DuplicateSelection(String),

    /// Setup was handed the wrong number of players.
    #[error("expected {expected} players, got {actual}")]
    WrongPlayerCount {
        /// Seats at the table.
        expected: usize,
        /// Names supplied.
        actual: usize,
    },

    /// A seat was given a blank name.
    #[error("player name for seat {0} is empty")]
    EmptyPlayerName(usize),

    /// The dealt cards are not a permutation of the starter pool.
    #[error("dealt cards are not the nine-card starter pool")]
    NotStarterPool,

    /// The voter already voted this round.
    #[error("player {0} has already voted")]
    VoteAlreadyCast(PlayerId),
}

impl StateError {
    /// Shorthand for an unknown player.
    pub fn unknown_player(id: PlayerId) -> Self {
        Self::InvalidReference(Reference::Player(id))
    }

    /// Shorthand for a bad center index.
    pub fn bad_center(index: u8) -> Self {
        Self::InvalidReference(Reference::CenterIndex(index))
    }

    /// Shorthand for a missing parameter.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidReference(_) => ErrorKind::InvalidReference,
            Self::IllegalSelfTarget(_) => ErrorKind::IllegalSelfTarget,
            Self::MissingParameter(_) => ErrorKind::MissingParameter,
            Self::DuplicateSelection(_) => ErrorKind::DuplicateSelection,
            Self::WrongPlayerCount { .. } | Self::EmptyPlayerName(_) | Self::NotStarterPool => {
                ErrorKind::Setup
            }
            Self::VoteAlreadyCast(_) => ErrorKind::Vote,
        }
    }
}
