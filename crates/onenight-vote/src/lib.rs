//! # One Night Vote
//!
//! Turns the day vote of a One Night round into a verdict.
//!
//! ## Pipeline
//!
//! ```text
//! seats ──► VoteTally ──► executed ──► Hunter chain ──► win table ──► Resolution
//! ```
//!
//! - Nobody dies when nobody voted, or when every seat got exactly one vote.
//! - Otherwise everyone tied for the most votes is executed.
//! - A dead Hunter kills everyone who voted for them, repeatedly.
//! - Factions come from *current* roles, never dealt ones.
//!
//! ## Usage
//!
//! ```rust
//! use onenight_state::{MatchState, PlayerId};
//! use onenight_vote::VoteResolver;
//!
//! let mut state = MatchState::setup(&["Ada", "Bo", "Cora", "Dev", "Eli", "Fay"], Some(3))?;
//! state.cast_vote(PlayerId(1), PlayerId(2))?;
//! state.cast_vote(PlayerId(3), PlayerId(2))?;
//!
//! let resolution = VoteResolver::new().resolve_match(&state);
//! assert_eq!(resolution.executed, vec![PlayerId(2)]);
//! # Ok::<(), onenight_state::StateError>(())
//! ```

mod resolver;
mod tally;
mod verdict;

pub use resolver::VoteResolver;
pub use tally::VoteTally;
pub use verdict::{Resolution, Verdict, WinDetail, WinReason};
