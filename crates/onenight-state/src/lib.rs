//! # One Night State
//!
//! Role catalog and the mutable state of a single six-seat round.
//!
//! ## Overview
//!
//! A round uses a fixed nine-card pool. Six cards are dealt to seats,
//! three stay face-down in the center. During the night, cards only
//! ever change *position*; [`MatchState`] enforces this by exposing
//! exactly two mutations, each a validated single exchange:
//!
//! | Operation | Moves |
//! |-----------|-------|
//! | [`MatchState::swap_players`] | two seats |
//! | [`MatchState::swap_with_center`] | one seat + one center slot |
//!
//! Votes and speeches are appended, never rewritten.
//!
//! ## Usage
//!
//! ```rust
//! use onenight_state::{MatchState, PlayerId};
//!
//! let names = ["Ada", "Bo", "Cora", "Dev", "Eli", "Fay"];
//! let mut state = MatchState::setup(&names, Some(7))?;
//!
//! state.cast_vote(PlayerId(1), PlayerId(2))?;
//! assert!(state.conserves_pool());
//! # Ok::<(), onenight_state::StateError>(())
//! ```

mod center;
mod error;
mod player;
mod role;
mod state;

pub use center::{CenterCards, CENTER_SIZE};
pub use error::{ErrorKind, Reference, Result, StateError};
pub use player::{Player, PlayerId};
pub use role::{Faction, Role, NIGHT_ORDER, STARTER_POOL};
pub use state::{MatchState, Speech, PLAYER_COUNT};
