//! # One Night Core
//!
//! Round facade for a six-seat game of One Night.
//! Orchestrates the match state, the night engine and the vote resolver.
//!
//! ## Components
//!
//! | Layer | Crate | Responsibility |
//! |-------|-------|----------------|
//! | State | `onenight-state` | Role catalog, seats, center, logs, votes |
//! | Night | `onenight-night` | One resolver per role, fixed-order walk |
//! | Vote | `onenight-vote` | Tally, executions, Hunter chain, win table |
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     ONE NIGHT CORE                       │
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │   GameConfig / RoundScript ──►  ┌──────────┐             │
//! │                                 │   Game   │ ← facade    │
//! │                                 └────┬─────┘             │
//! │                ┌─────────────────────┼──────────────┐    │
//! │                ▼                     ▼              ▼    │
//! │         ┌─────────────┐      ┌─────────────┐  ┌────────┐ │
//! │         │ NightEngine │ ───► │ MatchState  │◄─│  Vote  │ │
//! │         └─────────────┘      └─────────────┘  │Resolver│ │
//! │                                               └────────┘ │
//! │                                      ──► RoundReport     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use onenight_core::{Game, GameConfig, NightParams};
//! use onenight_state::PlayerId;
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7))?;
//!
//! // Drive one seat at a time, or the whole night via a ParamSource.
//! let outcome = game.perform_night_action(PlayerId(1), &NightParams::none());
//! println!("{}", outcome.log);
//!
//! game.record_speech(PlayerId(2), "I was the Seer.");
//! game.cast_vote(PlayerId(1), PlayerId(2));
//!
//! let resolution = game.resolve();
//! println!("{} ({})", resolution.verdict, resolution.reason());
//! # Ok::<(), onenight_core::GameError>(())
//! ```
//!
//! ## Notes
//!
//! - Night actions, speeches and votes never return errors; rejections
//!   come back as a rejected outcome or `false`, with state unchanged.
//! - Only building a round (config, names, files) can fail.
//! - The night log is private; reports include it only when
//!   `report.reveal_night_log` is set.

mod config;
mod error;
mod game;
mod report;
mod script;

pub use config::{GameConfig, NightConfig, ReportConfig, TableConfig};
pub use error::GameError;
pub use game::{Game, Phase};
pub use report::{RoundReport, SeatReport};
pub use script::{RoundScript, ScriptedSpeech};

// Re-export component types for convenience
pub use onenight_night::{ActionStatus, NightEngine, NightOutcome, NightParams, ParamSource, WakeRule};
pub use onenight_state::{MatchState, Player, PlayerId, Role, Speech, StateError};
pub use onenight_vote::{Resolution, Verdict, VoteResolver, WinReason};

/// Core result type for round operations.
pub type Result<T> = std::result::Result<T, GameError>;
