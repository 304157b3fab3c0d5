//! Random but always-legal choices for unscripted rounds.

use onenight_core::{MatchState, NightParams, ParamSource, PlayerId, Role};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Plays every seat with uniformly random legal choices.
pub struct Autopilot {
    rng: StdRng,
}

impl Autopilot {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    fn others(state: &MatchState, actor: PlayerId) -> Vec<PlayerId> {
        state
            .players()
            .iter()
            .map(|p| p.id)
            .filter(|id| *id != actor)
            .collect()
    }

    fn pick_others(&mut self, state: &MatchState, actor: PlayerId, n: usize) -> Vec<PlayerId> {
        Self::others(state, actor)
            .choose_multiple(&mut self.rng, n)
            .copied()
            .collect()
    }

    fn pick_centers(&mut self) -> Vec<u8> {
        [1u8, 2, 3]
            .choose_multiple(&mut self.rng, 2)
            .copied()
            .collect()
    }

    /// A vote target for `voter`.
    pub fn vote(&mut self, state: &MatchState, voter: PlayerId) -> Option<PlayerId> {
        self.pick_others(state, voter, 1).first().copied()
    }
}

impl ParamSource for Autopilot {
    fn choose(&mut self, state: &MatchState, actor: PlayerId, role: Role) -> NightParams {
        let params = match role {
            Role::Werewolf => NightParams::view_center(self.rng.gen_range(0..=3)),
            Role::Seer if self.rng.gen_bool(0.5) => match self.pick_others(state, actor, 1)[..] {
                [target] => NightParams::inspect_player(target),
                _ => NightParams::none(),
            },
            Role::Seer => NightParams {
                inspect_centers: Some(self.pick_centers()),
                ..NightParams::default()
            },
            Role::Robber if self.rng.gen_bool(0.25) => NightParams::skip(),
            Role::Robber => match self.pick_others(state, actor, 1)[..] {
                [target] => NightParams::rob(target),
                _ => NightParams::skip(),
            },
            Role::Troublemaker => match self.pick_others(state, actor, 2)[..] {
                [first, second] => NightParams::troublemake(first, second),
                _ => NightParams::none(),
            },
            Role::Drunk => NightParams::drunk(self.rng.gen_range(1..=3)),
            Role::Minion | Role::Insomniac | Role::Hunter => NightParams::none(),
        };
        debug!("Autopilot chose {:?} for seat {} as {}", params, actor, role);
        params
    }
}
