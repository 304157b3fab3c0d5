//! Night-action dispatch and the fixed-order night walk.
//!
//! [`NightEngine::perform`] is the single entry point for one action.
//! It dispatches on the actor's *current* role, never fails, and always
//! appends exactly one line to the match action log.
//!
//! [`NightEngine::run_night`] walks [`NIGHT_ORDER`], asking a
//! [`ParamSource`] for each actor's choices right before they act.
//! Which seats wake at each step is decided by the engine's
//! [`WakeRule`].

use onenight_state::{MatchState, Player, PlayerId, Result, Role, NIGHT_ORDER};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::outcome::{ActionStatus, NightOutcome};
use crate::params::NightParams;
use crate::resolvers::{self, Actor};

/// Supplies night-action choices: a human prompt, an automated agent,
/// or a replay.
///
/// Called once per acting seat, immediately before that seat acts, so
/// the source sees every earlier swap.
pub trait ParamSource {
    /// Choices for `actor`, who is about to act as `role`.
    fn choose(&mut self, state: &MatchState, actor: PlayerId, role: Role) -> NightParams;

    /// Called with each outcome after it is applied.
    fn observe(&mut self, _outcome: &NightOutcome) {}
}

impl<F> ParamSource for F
where
    F: FnMut(&MatchState, PlayerId, Role) -> NightParams,
{
    fn choose(&mut self, state: &MatchState, actor: PlayerId, role: Role) -> NightParams {
        self(state, actor, role)
    }
}

/// Which seats wake when a role's turn comes up during the night walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WakeRule {
    /// Seats wake for the card they hold when the role's turn starts and
    /// act as that role. A seat handed a later role by an earlier swap
    /// acts again in that role's turn; a seat whose card was taken does
    /// not.
    #[default]
    CurrentRole,
    /// Seats wake for the card they were dealt and act as that role,
    /// whatever they hold by then.
    DealtRole,
}

/// Resolves night actions against a [`MatchState`].
///
/// # Example
///
/// ```rust
/// use onenight_night::{NightEngine, NightParams};
/// use onenight_state::{MatchState, PlayerId, Role};
///
/// let names = ["Ada", "Bo", "Cora", "Dev", "Eli", "Fay"];
/// let mut state = MatchState::from_deal(
///     &names,
///     [
///         Role::Robber, Role::Seer, Role::Werewolf, Role::Minion, Role::Drunk,
///         Role::Hunter, Role::Werewolf, Role::Troublemaker, Role::Insomniac,
///     ],
/// )?;
///
/// let engine = NightEngine::new();
/// let outcome = engine.perform(&mut state, PlayerId(1), &NightParams::rob(PlayerId(3)));
///
/// assert!(outcome.is_performed());
/// assert_eq!(state.player(PlayerId(1))?.current_role(), Role::Werewolf);
/// # Ok::<(), onenight_state::StateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NightEngine {
    wake: WakeRule,
}

impl NightEngine {
    /// Creates an engine that wakes seats by the card they currently hold.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_wake_rule(mut self, wake: WakeRule) -> Self {
        self.wake = wake;
        self
    }

    pub fn wake_rule(&self) -> WakeRule {
        self.wake
    }

    /// Performs `actor`'s night action as their current role.
    ///
    /// Invalid parameters never panic or return an error: the outcome is
    /// [`ActionStatus::Rejected`], its log says no action was taken, and
    /// the state is unchanged apart from that log line.
    pub fn perform(
        &self,
        state: &mut MatchState,
        actor: PlayerId,
        params: &NightParams,
    ) -> NightOutcome {
        let who = state.player(actor).map(|p| Actor::new(p, p.current_role()));
        self.resolve(state, actor, who, params)
    }

    fn perform_as(
        &self,
        state: &mut MatchState,
        actor: PlayerId,
        role: Role,
        params: &NightParams,
    ) -> NightOutcome {
        let who = state.player(actor).map(|p| Actor::new(p, role));
        self.resolve(state, actor, who, params)
    }

    fn resolve(
        &self,
        state: &mut MatchState,
        actor: PlayerId,
        who: Result<Actor>,
        params: &NightParams,
    ) -> NightOutcome {
        let outcome = match who {
            Err(e) => {
                warn!("Night action for unknown player {}: {}", actor, e);
                let log = format!("player {} took no action: {}", actor, e);
                NightOutcome::new(actor, None, ActionStatus::Rejected(e), log)
            }
            Ok(who) => match dispatch(state, &who, params) {
                Ok(outcome) => {
                    debug!("{} acted as {}: {}", who.name, who.role, outcome.log);
                    outcome
                }
                Err(e) => {
                    warn!("{} ({}) took no action: {}", who.name, who.role, e);
                    let log = format!("{} took no action: {}", who.name, e);
                    who.outcome(ActionStatus::Rejected(e), log)
                }
            },
        };

        state.log_action(outcome.log.clone());
        outcome
    }

    /// Seats to wake for `role`, in id order.
    fn wakers(&self, state: &MatchState, role: Role) -> Vec<PlayerId> {
        match self.wake {
            WakeRule::CurrentRole => state.holders_of(role),
            WakeRule::DealtRole => state
                .players()
                .iter()
                .filter(|p| p.initial_role() == role)
                .map(|p| p.id)
                .collect(),
        }
    }

    /// Runs the whole night in [`NIGHT_ORDER`].
    ///
    /// Returns every outcome in the order it happened. Each outcome's
    /// log line is also in the match action log.
    pub fn run_night<S>(&self, state: &mut MatchState, source: &mut S) -> Vec<NightOutcome>
    where
        S: ParamSource + ?Sized,
    {
        info!("Night begins ({:?})", self.wake);
        let mut outcomes = Vec::new();

        for role in NIGHT_ORDER {
            for actor in self.wakers(state, role) {
                if self.wake == WakeRule::CurrentRole
                    && state.player(actor).ok().map(Player::current_role) != Some(role)
                {
                    // An earlier holder of the same role moved this card.
                    continue;
                }

                let params = source.choose(state, actor, role);
                let outcome = self.perform_as(state, actor, role, &params);
                source.observe(&outcome);
                outcomes.push(outcome);
            }
        }

        info!("Night complete: {} actions resolved", outcomes.len());
        outcomes
    }
}

fn dispatch(state: &mut MatchState, actor: &Actor, params: &NightParams) -> Result<NightOutcome> {
    match actor.role {
        Role::Werewolf => resolvers::werewolf(state, actor, params),
        Role::Minion => resolvers::minion(state, actor),
        Role::Seer => resolvers::seer(state, actor, params),
        Role::Robber => resolvers::robber(state, actor, params),
        Role::Troublemaker => resolvers::troublemaker(state, actor, params),
        Role::Drunk => resolvers::drunk(state, actor, params),
        Role::Insomniac => resolvers::insomniac(state, actor),
        Role::Hunter => Ok(resolvers::hunter(actor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onenight_state::{ErrorKind, StateError};

    const NAMES: [&str; 6] = ["Ada", "Bo", "Cora", "Dev", "Eli", "Fay"];

    /// Seats: 1 Werewolf, 2 Werewolf, 3 Seer, 4 Robber, 5 Troublemaker, 6 Drunk.
    /// Center: 1 Minion, 2 Insomniac, 3 Hunter.
    fn two_wolves() -> MatchState {
        MatchState::from_deal(
            &NAMES,
            [
                Role::Werewolf,
                Role::Werewolf,
                Role::Seer,
                Role::Robber,
                Role::Troublemaker,
                Role::Drunk,
                Role::Minion,
                Role::Insomniac,
                Role::Hunter,
            ],
        )
        .unwrap()
    }

    /// Seats: 1 Werewolf, 2 Minion, 3 Seer, 4 Robber, 5 Insomniac, 6 Hunter.
    /// Center: 1 Werewolf, 2 Troublemaker, 3 Drunk.
    fn lone_wolf() -> MatchState {
        MatchState::from_deal(
            &NAMES,
            [
                Role::Werewolf,
                Role::Minion,
                Role::Seer,
                Role::Robber,
                Role::Insomniac,
                Role::Hunter,
                Role::Werewolf,
                Role::Troublemaker,
                Role::Drunk,
            ],
        )
        .unwrap()
    }

    fn roles(state: &MatchState) -> Vec<Role> {
        state.players().iter().map(|p| p.current_role()).collect()
    }

    // ------------------------------------------------------------------
    // Werewolf
    // ------------------------------------------------------------------

    #[test]
    fn test_lone_wolf_views_center() {
        let mut state = lone_wolf();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(1), &NightParams::view_center(2));
        assert!(outcome.is_performed());
        assert!(outcome.log.contains("center card 2: Troublemaker"));
        assert!(!outcome.mutated());
    }

    #[test]
    fn test_lone_wolf_declines_with_zero_or_absent() {
        let engine = NightEngine::new();
        let mut state = lone_wolf();
        for params in [NightParams::view_center(0), NightParams::none()] {
            let outcome = engine.perform(&mut state, PlayerId(1), &params);
            assert_eq!(outcome.status, ActionStatus::Declined);
            assert!(outcome.log.contains("chose not to view"));
        }
    }

    #[test]
    fn test_lone_wolf_bad_index_rejected() {
        let mut state = lone_wolf();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(1), &NightParams::view_center(4));
        assert_eq!(outcome.error(), Some(&StateError::bad_center(4)));
        assert!(outcome.log.contains("took no action"));
    }

    #[test]
    fn test_pack_ignores_center_param() {
        let mut state = two_wolves();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(1), &NightParams::view_center(9));
        assert!(outcome.is_performed());
        assert_eq!(outcome.log, "Ada saw fellow werewolves: Bo");
    }

    // ------------------------------------------------------------------
    // Minion
    // ------------------------------------------------------------------

    #[test]
    fn test_minion_sees_wolves() {
        let mut state = lone_wolf();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(2), &NightParams::none());
        assert_eq!(outcome.log, "Bo saw the werewolves: Ada");
    }

    #[test]
    fn test_minion_sees_no_wolves() {
        let mut state = lone_wolf();
        state.swap_with_center(PlayerId(1), 3).unwrap();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(2), &NightParams::none());
        assert_eq!(outcome.log, "Bo found no werewolves in play");
    }

    // ------------------------------------------------------------------
    // Seer
    // ------------------------------------------------------------------

    #[test]
    fn test_seer_inspects_player() {
        let mut state = lone_wolf();
        let outcome =
            NightEngine::new().perform(&mut state, PlayerId(3), &NightParams::inspect_player(PlayerId(6)));
        assert_eq!(outcome.log, "Cora inspected Fay: Hunter");
    }

    #[test]
    fn test_seer_inspects_two_centers() {
        let mut state = lone_wolf();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(3), &NightParams::inspect_centers(3, 1));
        assert!(outcome.is_performed());
        assert!(outcome.log.contains("center card 3: Drunk"));
        assert!(outcome.log.contains("center card 1: Werewolf"));
    }

    #[test]
    fn test_seer_rejections() {
        let engine = NightEngine::new();
        let mut state = lone_wolf();
        let cases = [
            (NightParams::inspect_player(PlayerId(3)), ErrorKind::IllegalSelfTarget),
            (NightParams::inspect_player(PlayerId(8)), ErrorKind::InvalidReference),
            (NightParams::inspect_centers(2, 2), ErrorKind::DuplicateSelection),
            (NightParams::inspect_centers(0, 2), ErrorKind::InvalidReference),
            (NightParams::none(), ErrorKind::MissingParameter),
            (
                NightParams {
                    inspect_player_id: Some(PlayerId(1)),
                    inspect_centers: Some(vec![1, 2]),
                    ..NightParams::default()
                },
                ErrorKind::DuplicateSelection,
            ),
            (
                NightParams {
                    inspect_centers: Some(vec![1]),
                    ..NightParams::default()
                },
                ErrorKind::MissingParameter,
            ),
            (
                NightParams {
                    inspect_centers: Some(vec![1, 2, 3]),
                    ..NightParams::default()
                },
                ErrorKind::InvalidReference,
            ),
        ];
        for (params, kind) in cases {
            let outcome = engine.perform(&mut state, PlayerId(3), &params);
            assert_eq!(outcome.error().map(StateError::kind), Some(kind), "{:?}", params);
        }
    }

    #[test]
    fn test_seer_third_center_card_names_the_index() {
        let mut state = lone_wolf();
        let before = state.clone();
        let params = NightParams {
            inspect_centers: Some(vec![1, 2, 3]),
            ..NightParams::default()
        };
        let outcome = NightEngine::new().perform(&mut state, PlayerId(3), &params);
        assert_eq!(outcome.status, ActionStatus::Rejected);
        assert_eq!(outcome.error(), Some(&StateError::bad_center(3)));
        assert_eq!(state.players(), before.players());
        assert_eq!(state.center(), before.center());
    }

    // ------------------------------------------------------------------
    // Robber
    // ------------------------------------------------------------------

    #[test]
    fn test_robber_swaps_and_reports_delta() {
        let mut state = lone_wolf();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(4), &NightParams::rob(PlayerId(1)));
        assert!(outcome.is_performed());
        assert_eq!(outcome.log, "Dev swapped roles with Ada");
        assert_eq!(outcome.changed_roles.get(&PlayerId(4)), Some(&Role::Werewolf));
        assert_eq!(outcome.changed_roles.get(&PlayerId(1)), Some(&Role::Robber));
        assert_eq!(outcome.changed_roles.len(), 2);
        assert!(state.conserves_pool());
    }

    #[test]
    fn test_robber_skip() {
        let mut state = lone_wolf();
        let before = roles(&state);
        let outcome = NightEngine::new().perform(&mut state, PlayerId(4), &NightParams::skip());
        assert_eq!(outcome.status, ActionStatus::Declined);
        assert_eq!(roles(&state), before);
    }

    #[test]
    fn test_robber_rejections_leave_state_untouched() {
        let engine = NightEngine::new();
        let mut state = lone_wolf();
        let before = roles(&state);
        for params in [
            NightParams::rob(PlayerId(4)),
            NightParams::rob(PlayerId(0)),
            NightParams::none(),
        ] {
            let outcome = engine.perform(&mut state, PlayerId(4), &params);
            assert!(outcome.is_rejected());
            assert!(outcome.changed_roles.is_empty());
        }
        assert_eq!(roles(&state), before);
    }

    // ------------------------------------------------------------------
    // Troublemaker
    // ------------------------------------------------------------------

    #[test]
    fn test_troublemaker_swaps_two_others() {
        let mut state = two_wolves();
        let outcome = NightEngine::new().perform(
            &mut state,
            PlayerId(5),
            &NightParams::troublemake(PlayerId(1), PlayerId(3)),
        );
        assert_eq!(outcome.log, "Eli swapped the roles of Ada and Cora");
        assert_eq!(state.player(PlayerId(1)).unwrap().current_role(), Role::Seer);
        assert_eq!(state.player(PlayerId(3)).unwrap().current_role(), Role::Werewolf);
        assert_eq!(state.player(PlayerId(5)).unwrap().current_role(), Role::Troublemaker);
        assert!(!outcome.changed_roles.contains_key(&PlayerId(5)));
    }

    #[test]
    fn test_troublemaker_rejections() {
        let engine = NightEngine::new();
        let mut state = two_wolves();
        let before = roles(&state);
        let cases = [
            (NightParams::troublemake(PlayerId(5), PlayerId(1)), ErrorKind::IllegalSelfTarget),
            (NightParams::troublemake(PlayerId(2), PlayerId(2)), ErrorKind::DuplicateSelection),
            (NightParams::troublemake(PlayerId(2), PlayerId(7)), ErrorKind::InvalidReference),
            (
                NightParams {
                    swap_player_id_1: Some(PlayerId(1)),
                    ..NightParams::default()
                },
                ErrorKind::MissingParameter,
            ),
        ];
        for (params, kind) in cases {
            let outcome = engine.perform(&mut state, PlayerId(5), &params);
            assert_eq!(outcome.error().map(StateError::kind), Some(kind));
        }
        assert_eq!(roles(&state), before);
    }

    // ------------------------------------------------------------------
    // Drunk
    // ------------------------------------------------------------------

    #[test]
    fn test_drunk_swaps_with_center_blind() {
        let mut state = two_wolves();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(6), &NightParams::drunk(1));
        assert_eq!(outcome.log, "Fay swapped roles with center card 1");
        assert!(!outcome.log.contains("Minion"));
        assert_eq!(outcome.changed_roles.get(&PlayerId(6)), Some(&Role::Minion));
        assert_eq!(outcome.changed_centers.get(&1), Some(&Role::Drunk));
        assert!(state.conserves_pool());
    }

    #[test]
    fn test_drunk_requires_valid_index() {
        let engine = NightEngine::new();
        let mut state = two_wolves();
        let center = *state.center();
        let missing = engine.perform(&mut state, PlayerId(6), &NightParams::none());
        assert_eq!(missing.error().map(StateError::kind), Some(ErrorKind::MissingParameter));
        let bad = engine.perform(&mut state, PlayerId(6), &NightParams::drunk(0));
        assert_eq!(bad.error(), Some(&StateError::bad_center(0)));
        assert_eq!(state.center(), &center);
    }

    // ------------------------------------------------------------------
    // Insomniac, Hunter, unknown actor
    // ------------------------------------------------------------------

    #[test]
    fn test_insomniac_sees_current_role() {
        let mut state = lone_wolf();
        state.swap_players(PlayerId(5), PlayerId(6)).unwrap();
        // Seat 6 now holds the Insomniac card.
        let outcome = NightEngine::new().perform(&mut state, PlayerId(6), &NightParams::none());
        assert_eq!(outcome.log, "Fay checked their final role: Insomniac");
    }

    #[test]
    fn test_hunter_is_noop() {
        let mut state = lone_wolf();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(6), &NightParams::drunk(1));
        assert_eq!(outcome.status, ActionStatus::NoNightAction);
        assert!(outcome.log.contains("no night action"));
        assert_eq!(state.center().get(1).unwrap(), Role::Werewolf);
    }

    #[test]
    fn test_unknown_actor() {
        let mut state = lone_wolf();
        let outcome = NightEngine::new().perform(&mut state, PlayerId(12), &NightParams::none());
        assert_eq!(outcome.role, None);
        assert_eq!(outcome.error(), Some(&StateError::unknown_player(PlayerId(12))));
    }

    #[test]
    fn test_every_call_logs_one_line() {
        let engine = NightEngine::new();
        let mut state = lone_wolf();
        engine.perform(&mut state, PlayerId(1), &NightParams::none());
        engine.perform(&mut state, PlayerId(4), &NightParams::rob(PlayerId(4)));
        engine.perform(&mut state, PlayerId(9), &NightParams::none());
        assert_eq!(state.action_log().len(), 3);
    }

    #[test]
    fn test_wake_rule_defaults_to_current() {
        assert_eq!(NightEngine::new().wake_rule(), WakeRule::CurrentRole);
        assert_eq!(
            NightEngine::new()
                .with_wake_rule(WakeRule::DealtRole)
                .wake_rule(),
            WakeRule::DealtRole
        );
    }

    #[test]
    fn test_wake_rule_serialization() {
        let json = serde_json::to_string(&WakeRule::CurrentRole).unwrap();
        assert_eq!(json, "\"current_role\"");
    }
}
