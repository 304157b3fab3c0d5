//! Execution, the Hunter chain and the win table.
//!
//! Every operation is a pure function of a snapshot of the seats. The
//! resolver never mutates [`Player`]s and never fails: unknown ids in an
//! executed set are skipped, and zero votes simply means zero deaths.

use std::collections::{BTreeMap, BTreeSet};

use onenight_state::{CenterCards, MatchState, Player, PlayerId, Role};
use tracing::{debug, info};

use crate::tally::VoteTally;
use crate::verdict::{Resolution, Verdict, WinDetail, WinReason};

/// Resolves the day vote of one round.
///
/// # Win table
///
/// Evaluated on current roles, after the Hunter chain closes:
///
/// | Werewolf in play | Minion in play | Deaths | Verdict |
/// |---|---|---|---|
/// | yes | - | a werewolf died | Village |
/// | yes | - | none | Werewolf |
/// | yes | - | only non-werewolves | Werewolf |
/// | no | yes | the Minion died | Village |
/// | no | yes | others, not the Minion | Werewolf (Minion solo) |
/// | no | yes | none | Village |
/// | no | no | none | Village |
/// | no | no | any | Werewolf |
#[derive(Debug, Clone, Default)]
pub struct VoteResolver;

impl VoteResolver {
    pub fn new() -> Self {
        Self
    }

    /// Votes received per target. Seats without a vote contribute nothing.
    pub fn tally_votes(&self, players: &[Player]) -> BTreeMap<PlayerId, usize> {
        VoteTally::from_players(players).counts
    }

    /// Seats executed by vote.
    ///
    /// Nobody is executed when nobody voted, or when every seat received
    /// exactly one vote. Otherwise every seat tied for the most votes is
    /// executed.
    pub fn determine_executed(&self, players: &[Player]) -> BTreeSet<PlayerId> {
        executed_from(&VoteTally::from_players(players))
    }

    /// Extends `executed` with everyone a dead Hunter takes along.
    ///
    /// Each dead Hunter kills every player who voted for them. Runs until
    /// no new death appears, so a Hunter killed by another Hunter fires
    /// too.
    pub fn apply_hunter_effect(
        &self,
        players: &[Player],
        executed: &BTreeSet<PlayerId>,
    ) -> BTreeSet<PlayerId> {
        let mut deaths = executed.clone();
        let mut pending: Vec<PlayerId> = executed.iter().copied().collect();
        let mut fired = BTreeSet::new();

        while let Some(id) = pending.pop() {
            if role_of(players, id) != Some(Role::Hunter) || !fired.insert(id) {
                continue;
            }
            for voter in players.iter().filter(|p| p.vote_target() == Some(id)) {
                if deaths.insert(voter.id) {
                    debug!("Hunter {} takes {} along", id, voter.id);
                    pending.push(voter.id);
                }
            }
        }

        deaths
    }

    /// Classifies the round into one of the eight win-table branches.
    ///
    /// `executed` may or may not already include Hunter chain deaths;
    /// the chain is re-applied here and is idempotent.
    pub fn check_win_condition(
        &self,
        players: &[Player],
        center: &CenterCards,
        executed: &BTreeSet<PlayerId>,
    ) -> (Verdict, WinDetail) {
        let deaths = self.apply_hunter_effect(players, executed);
        let in_play = |role: Role| players.iter().any(|p| p.current_role() == role);
        let died = |role: Role| deaths.iter().any(|id| role_of(players, *id) == Some(role));

        debug!("Center at resolution: {:?}", center.as_slice());

        let reason = match (in_play(Role::Werewolf), in_play(Role::Minion), deaths.is_empty()) {
            (true, _, true) => WinReason::NoExecutionWithWolf,
            (true, _, false) if died(Role::Werewolf) => WinReason::WerewolfExecuted,
            (true, _, false) => WinReason::WrongTargetExecuted,
            (false, true, true) => WinReason::MinionPresentNoDeaths,
            (false, true, false) if died(Role::Minion) => WinReason::MinionExecuted,
            (false, true, false) => WinReason::MinionWinsSolo,
            (false, false, true) => WinReason::VillageOnlyNoDeaths,
            (false, false, false) => WinReason::VillageOnlyDeaths,
        };

        let verdict = reason.verdict();
        let detail = WinDetail {
            reason,
            deaths: deaths.into_iter().collect(),
        };
        (verdict, detail)
    }

    /// Runs the whole pipeline over a seat snapshot.
    pub fn resolve(&self, players: &[Player], center: &CenterCards) -> Resolution {
        let tally = VoteTally::from_players(players);
        let executed = executed_from(&tally);
        let (verdict, detail) = self.check_win_condition(players, center, &executed);

        info!(
            "{}: {} (executed {:?}, deaths {:?})",
            verdict, detail.reason, executed, detail.deaths
        );

        Resolution {
            verdict,
            detail,
            executed: executed.into_iter().collect(),
            tally,
        }
    }

    /// Resolves the vote recorded on a live match.
    pub fn resolve_match(&self, state: &MatchState) -> Resolution {
        self.resolve(state.players(), state.center())
    }
}

fn executed_from(tally: &VoteTally) -> BTreeSet<PlayerId> {
    if tally.voters == 0 {
        debug!("No votes cast, nobody executed");
        return BTreeSet::new();
    }
    if tally.is_maximally_spread() {
        debug!("Votes maximally spread, nobody executed");
        return BTreeSet::new();
    }
    tally.leaders()
}

fn role_of(players: &[Player], id: PlayerId) -> Option<Role> {
    players
        .iter()
        .find(|p| p.id == id)
        .map(Player::current_role)
}
