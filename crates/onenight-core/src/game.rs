//! The round facade.
//!
//! This module provides the main entry point for playing a round.
//! [`Game`] owns the [`MatchState`] for the whole round and routes every
//! boundary operation to the night engine or vote resolver.

use onenight_night::{NightEngine, NightOutcome, NightParams, ParamSource};
use onenight_state::{MatchState, PlayerId, Role, Speech, PLAYER_COUNT};
use onenight_vote::{Resolution, VoteResolver};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{config::GameConfig, report::RoundReport, script::RoundScript, Result};

/// Where the round is.
///
/// Phases only move forward and are informational: no operation is
/// refused because of the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Night,
    Discussion,
    Voting,
    Resolved,
}

/// One round of One Night.
///
/// # Round flow
///
/// 1. Deal ([`Game::new`] / [`Game::setup`])
/// 2. Night actions in fixed role order ([`Game::run_night`] or
///    [`Game::perform_night_action`] per seat)
/// 3. Discussion ([`Game::record_speech`])
/// 4. Vote ([`Game::cast_vote`])
/// 5. Resolution ([`Game::resolve`])
///
/// # Example
///
/// ```rust
/// use onenight_core::{Game, GameConfig, RoundScript};
/// use onenight_state::PlayerId;
///
/// let mut game = Game::new(GameConfig::default().with_seed(11))?;
/// let script = RoundScript::default()
///     .with_vote(PlayerId(1), PlayerId(2))
///     .with_vote(PlayerId(3), PlayerId(2));
///
/// let resolution = game.play(&script);
/// assert_eq!(resolution.executed, vec![PlayerId(2)]);
/// # Ok::<(), onenight_core::GameError>(())
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: MatchState,
    engine: NightEngine,
    resolver: VoteResolver,
    phase: Phase,
    outcomes: Vec<NightOutcome>,
    resolution: Option<Resolution>,
}

impl Game {
    /// Deals a new round from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`](crate::GameError::Config) if the
    /// table is not six non-blank names.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let state = MatchState::setup(&config.table.player_names, config.table.seed)?;
        Ok(Self::from_state(config, state))
    }

    /// Deals a new round with default settings.
    pub fn setup<S: AsRef<str>>(names: &[S], seed: Option<u64>) -> Result<Self> {
        let mut config =
            GameConfig::default().with_names(names.iter().map(|n| n.as_ref().to_string()));
        config.table.seed = seed;
        Self::new(config)
    }

    /// Wraps an already dealt state, e.g. one built with
    /// [`MatchState::from_deal`].
    pub fn from_state(config: GameConfig, state: MatchState) -> Self {
        let engine = NightEngine::new().with_wake_rule(config.night.wake_rule);
        info!(
            "Round dealt for {} ({:?})",
            state
                .players()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            config.night.wake_rule
        );

        Self {
            config,
            state,
            engine,
            resolver: VoteResolver::new(),
            phase: Phase::Setup,
            outcomes: Vec::new(),
            resolution: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        if phase > self.phase {
            info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// The card `id` was dealt. `None` for unknown ids.
    pub fn view_initial_role(&self, id: PlayerId) -> Option<Role> {
        self.state.view_initial_role(id)
    }

    // =========================================================================
    // Night
    // =========================================================================

    /// Performs one seat's night action as their current role.
    ///
    /// Never fails; see [`NightEngine::perform`].
    pub fn perform_night_action(&mut self, actor: PlayerId, params: &NightParams) -> NightOutcome {
        self.enter(Phase::Night);
        let outcome = self.engine.perform(&mut self.state, actor, params);
        self.outcomes.push(outcome.clone());
        outcome
    }

    /// Runs the whole night, then opens the discussion.
    pub fn run_night<S>(&mut self, source: &mut S) -> Vec<NightOutcome>
    where
        S: ParamSource + ?Sized,
    {
        self.enter(Phase::Night);
        let outcomes = self.engine.run_night(&mut self.state, source);
        self.outcomes.extend(outcomes.iter().cloned());
        self.enter(Phase::Discussion);
        outcomes
    }

    /// Every night outcome so far, in order.
    pub fn night_outcomes(&self) -> &[NightOutcome] {
        &self.outcomes
    }

    // =========================================================================
    // Day
    // =========================================================================

    /// Appends to the public speech log. Returns false for unknown
    /// speakers, appending nothing.
    pub fn record_speech(&mut self, id: PlayerId, content: impl Into<String>) -> bool {
        self.enter(Phase::Discussion);
        match self.state.record_speech(id, content) {
            Ok(_) => true,
            Err(e) => {
                warn!("Speech rejected: {}", e);
                false
            }
        }
    }

    pub fn speeches(&self) -> &[Speech] {
        self.state.speeches()
    }

    /// Records a vote. Returns false, changing nothing, for unknown ids,
    /// a self-vote, or a voter who already voted.
    pub fn cast_vote(&mut self, voter: PlayerId, target: PlayerId) -> bool {
        self.enter(Phase::Voting);
        let accepted = self.state.cast_vote(voter, target).is_ok();
        if accepted {
            debug!("{} of {} votes cast", self.state.votes_cast(), PLAYER_COUNT);
        }
        accepted
    }

    /// Resolves the vote as it stands. Safe with zero votes cast.
    pub fn resolve(&mut self) -> Resolution {
        let resolution = self.resolver.resolve_match(&self.state);
        self.enter(Phase::Resolved);
        self.resolution = Some(resolution.clone());
        resolution
    }

    /// The last resolution, if [`resolve`](Self::resolve) has run.
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Summary of the resolved round.
    pub fn report(&self) -> Option<RoundReport> {
        self.resolution.as_ref().map(|resolution| {
            RoundReport::build(&self.state, resolution, self.config.report.reveal_night_log)
        })
    }

    /// Plays the rest of the round from a script: the night, every
    /// speech and every vote, then resolves.
    ///
    /// Rejected speeches and votes are logged and skipped.
    pub fn play(&mut self, script: &RoundScript) -> Resolution {
        let mut source = |_: &MatchState, actor: PlayerId, _: Role| script.params_for(actor);
        self.run_night(&mut source);

        for speech in &script.speeches {
            self.record_speech(speech.player_id, speech.content.clone());
        }
        for (voter, target) in &script.votes {
            if !self.cast_vote(*voter, *target) {
                warn!("Scripted vote {} -> {} skipped", voter, target);
            }
        }

        self.resolve()
    }
}
