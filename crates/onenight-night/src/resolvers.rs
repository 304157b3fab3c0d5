//! One resolver per role.
//!
//! Every resolver validates all of its parameters before touching the
//! state, and every mutation it performs is a single call into
//! [`MatchState`]'s swap methods. A resolver that returns `Err` has
//! therefore changed nothing.

use onenight_state::{MatchState, Player, PlayerId, Result, Role, StateError};
use tracing::debug;

use crate::outcome::{ActionStatus, NightOutcome};
use crate::params::NightParams;

/// The acting seat, captured before dispatch.
#[derive(Debug, Clone)]
pub(crate) struct Actor {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
}

impl Actor {
    /// `role` is the role being acted out, which the night walk may take
    /// from the dealt card rather than the one currently held.
    pub fn new(player: &Player, role: Role) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            role,
        }
    }

    pub fn outcome(&self, status: ActionStatus, log: String) -> NightOutcome {
        NightOutcome::new(self.id, Some(self.role), status, log)
    }

    fn performed(&self, log: String) -> NightOutcome {
        self.outcome(ActionStatus::Performed, log)
    }
}

fn name_of(state: &MatchState, id: PlayerId) -> Result<String> {
    Ok(state.player(id)?.name.clone())
}

fn names_of(state: &MatchState, ids: &[PlayerId]) -> Result<Vec<String>> {
    ids.iter().map(|id| name_of(state, *id)).collect()
}

fn current_role(state: &MatchState, id: PlayerId) -> Result<Role> {
    Ok(state.player(id)?.current_role())
}

/// Lone wolf may peek at one center card; a pack sees each other.
pub(crate) fn werewolf(
    state: &MatchState,
    actor: &Actor,
    params: &NightParams,
) -> Result<NightOutcome> {
    let pack = state.holders_of(Role::Werewolf);

    if pack.len() >= 2 {
        if params.view_center_index.is_some() {
            debug!(
                "{} werewolves in play, ignoring view_center_index for {}",
                pack.len(),
                actor.name
            );
        }
        let others: Vec<PlayerId> = pack.into_iter().filter(|id| *id != actor.id).collect();
        let names = names_of(state, &others)?;
        return Ok(actor.performed(format!(
            "{} saw fellow werewolves: {}",
            actor.name,
            names.join(", ")
        )));
    }

    match params.view_center_index {
        None | Some(0) => Ok(actor.outcome(
            ActionStatus::Declined,
            format!(
                "{} is the lone werewolf and chose not to view a center card",
                actor.name
            ),
        )),
        Some(index) => {
            let card = state.center().get(index)?;
            Ok(actor.performed(format!(
                "{} is the lone werewolf and viewed center card {}: {}",
                actor.name, index, card
            )))
        }
    }
}

pub(crate) fn minion(state: &MatchState, actor: &Actor) -> Result<NightOutcome> {
    let wolves = names_of(state, &state.holders_of(Role::Werewolf))?;
    let log = if wolves.is_empty() {
        format!("{} found no werewolves in play", actor.name)
    } else {
        format!("{} saw the werewolves: {}", actor.name, wolves.join(", "))
    };
    Ok(actor.performed(log))
}

/// One other player, or two distinct center cards. Never both.
pub(crate) fn seer(state: &MatchState, actor: &Actor, params: &NightParams) -> Result<NightOutcome> {
    match (params.inspect_player_id, params.inspect_centers.as_deref()) {
        (Some(_), Some(_)) => Err(StateError::DuplicateSelection(
            "choose a player or two center cards, not both".to_string(),
        )),
        (None, None) => Err(StateError::missing("inspect_player_id or inspect_centers")),
        (Some(target), None) => {
            let player = state.player(target)?;
            if target == actor.id {
                return Err(StateError::IllegalSelfTarget(actor.id));
            }
            Ok(actor.performed(format!(
                "{} inspected {}: {}",
                actor.name,
                player.name,
                player.current_role()
            )))
        }
        (None, Some(indices)) => {
            let &[first, second] = indices else {
                return Err(match indices {
                    // Anything past the second card is a reference the Seer may not make.
                    [_, _, extra, ..] => StateError::bad_center(*extra),
                    _ => StateError::missing("inspect_centers needs two center indices"),
                });
            };
            let first_card = state.center().get(first)?;
            let second_card = state.center().get(second)?;
            if first == second {
                return Err(StateError::DuplicateSelection(format!(
                    "center card {} selected twice",
                    first
                )));
            }
            Ok(actor.performed(format!(
                "{} inspected center card {}: {} | center card {}: {}",
                actor.name, first, first_card, second, second_card
            )))
        }
    }
}

/// Takes another player's card, or explicitly passes.
pub(crate) fn robber(
    state: &mut MatchState,
    actor: &Actor,
    params: &NightParams,
) -> Result<NightOutcome> {
    if params.is_skip() {
        return Ok(actor.outcome(
            ActionStatus::Declined,
            format!("{} chose not to swap roles", actor.name),
        ));
    }

    let target = params
        .swap_with_player_id
        .ok_or_else(|| StateError::missing("swap_with_player_id"))?;
    let target_name = name_of(state, target)?;
    if target == actor.id {
        return Err(StateError::IllegalSelfTarget(actor.id));
    }

    state.swap_players(actor.id, target)?;

    let mut outcome = actor.performed(format!(
        "{} swapped roles with {}",
        actor.name, target_name
    ));
    outcome
        .changed_roles
        .insert(actor.id, current_role(state, actor.id)?);
    outcome
        .changed_roles
        .insert(target, current_role(state, target)?);
    Ok(outcome)
}

/// Swaps two other players; the actor's own card never moves.
pub(crate) fn troublemaker(
    state: &mut MatchState,
    actor: &Actor,
    params: &NightParams,
) -> Result<NightOutcome> {
    let first = params
        .swap_player_id_1
        .ok_or_else(|| StateError::missing("swap_player_id_1"))?;
    let second = params
        .swap_player_id_2
        .ok_or_else(|| StateError::missing("swap_player_id_2"))?;
    let first_name = name_of(state, first)?;
    let second_name = name_of(state, second)?;

    if first == actor.id || second == actor.id {
        return Err(StateError::IllegalSelfTarget(actor.id));
    }
    if first == second {
        return Err(StateError::DuplicateSelection(format!(
            "player {} selected twice",
            first
        )));
    }

    state.swap_players(first, second)?;

    let mut outcome = actor.performed(format!(
        "{} swapped the roles of {} and {}",
        actor.name, first_name, second_name
    ));
    outcome.changed_roles.insert(first, current_role(state, first)?);
    outcome
        .changed_roles
        .insert(second, current_role(state, second)?);
    Ok(outcome)
}

/// Mandatory blind swap with a center card.
pub(crate) fn drunk(
    state: &mut MatchState,
    actor: &Actor,
    params: &NightParams,
) -> Result<NightOutcome> {
    let index = params
        .center_index
        .ok_or_else(|| StateError::missing("center_index"))?;

    state.swap_with_center(actor.id, index)?;

    // The log stays silent about the new card; the actor must not learn it.
    let mut outcome = actor.performed(format!(
        "{} swapped roles with center card {}",
        actor.name, index
    ));
    outcome
        .changed_roles
        .insert(actor.id, current_role(state, actor.id)?);
    outcome
        .changed_centers
        .insert(index, state.center().get(index)?);
    Ok(outcome)
}

pub(crate) fn insomniac(state: &MatchState, actor: &Actor) -> Result<NightOutcome> {
    let role = current_role(state, actor.id)?;
    Ok(actor.performed(format!(
        "{} checked their final role: {}",
        actor.name, role
    )))
}

pub(crate) fn hunter(actor: &Actor) -> NightOutcome {
    actor.outcome(
        ActionStatus::NoNightAction,
        format!("{} is the Hunter and has no night action", actor.name),
    )
}
