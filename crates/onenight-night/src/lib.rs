//! # One Night Night Actions
//!
//! Resolves the night phase of a One Night match: one action per role,
//! in a fixed order, against a shared [`MatchState`](onenight_state::MatchState).
//!
//! ## Overview
//!
//! ```text
//! ParamSource ──► NightEngine::run_night ──► NightOutcome (per seat)
//!                      │
//!                      ├─► Werewolf     pack sees each other / lone wolf peeks
//!                      ├─► Minion       sees the werewolves
//!                      ├─► Seer         one player or two center cards
//!                      ├─► Robber       takes another player's card
//!                      ├─► Troublemaker swaps two other players
//!                      ├─► Drunk        blind swap with the center
//!                      └─► Insomniac    checks their own card
//! ```
//!
//! The Hunter has no night action. Every call appends exactly one line
//! to the match action log, including rejected calls. A rejected call
//! never moves a card.
//!
//! ## Usage
//!
//! ```rust
//! use onenight_night::{NightEngine, NightParams};
//! use onenight_state::{MatchState, PlayerId, Role};
//!
//! let mut state = MatchState::setup(&["Ada", "Bo", "Cora", "Dev", "Eli", "Fay"], Some(7))?;
//!
//! // Every seat skips or takes the first legal option.
//! let mut source = |_: &MatchState, actor: PlayerId, role: Role| match role {
//!     Role::Robber => NightParams::skip(),
//!     Role::Seer => NightParams::inspect_centers(1, 2),
//!     Role::Troublemaker => {
//!         let others: Vec<PlayerId> = (1..=6).map(PlayerId).filter(|id| *id != actor).collect();
//!         NightParams::troublemake(others[0], others[1])
//!     }
//!     Role::Drunk => NightParams::drunk(1),
//!     _ => NightParams::none(),
//! };
//!
//! let outcomes = NightEngine::new().run_night(&mut state, &mut source);
//! assert!(outcomes.iter().all(|o| !o.is_rejected()));
//! assert_eq!(state.action_log().len(), outcomes.len());
//! assert!(state.conserves_pool());
//! # Ok::<(), onenight_state::StateError>(())
//! ```

mod engine;
mod outcome;
mod params;
mod resolvers;

pub use engine::{NightEngine, ParamSource, WakeRule};
pub use outcome::{ActionStatus, NightOutcome};
pub use params::NightParams;
