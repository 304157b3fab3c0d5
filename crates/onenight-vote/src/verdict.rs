//! Round verdicts and the reasons behind them.

use std::fmt;

use onenight_state::PlayerId;
use serde::{Deserialize, Serialize};

use crate::tally::VoteTally;

/// Which faction won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    VillageWin,
    /// Also reported when the Minion wins alone.
    WerewolfWin,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::VillageWin => write!(f, "Village wins"),
            Verdict::WerewolfWin => write!(f, "Werewolf team wins"),
        }
    }
}

/// Machine-readable reason for a verdict. One variant per branch of the
/// win table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// A werewolf is in play and one died.
    WerewolfExecuted,
    /// A werewolf is in play and nobody died.
    NoExecutionWithWolf,
    /// A werewolf is in play but only non-werewolves died.
    WrongTargetExecuted,
    /// No werewolf in play; the Minion died.
    MinionExecuted,
    /// No werewolf in play; others died but the Minion survived.
    MinionWinsSolo,
    /// No werewolf in play, the Minion is, and nobody died.
    MinionPresentNoDeaths,
    /// Neither werewolf nor Minion in play and nobody died.
    VillageOnlyNoDeaths,
    /// Neither werewolf nor Minion in play, yet someone died.
    VillageOnlyDeaths,
}

impl WinReason {
    /// All reasons, in win-table order.
    pub const ALL: [WinReason; 8] = [
        WinReason::WerewolfExecuted,
        WinReason::NoExecutionWithWolf,
        WinReason::WrongTargetExecuted,
        WinReason::MinionExecuted,
        WinReason::MinionWinsSolo,
        WinReason::MinionPresentNoDeaths,
        WinReason::VillageOnlyNoDeaths,
        WinReason::VillageOnlyDeaths,
    ];

    /// The verdict this reason implies.
    pub const fn verdict(&self) -> Verdict {
        match self {
            WinReason::WerewolfExecuted
            | WinReason::MinionExecuted
            | WinReason::MinionPresentNoDeaths
            | WinReason::VillageOnlyNoDeaths => Verdict::VillageWin,
            WinReason::NoExecutionWithWolf
            | WinReason::WrongTargetExecuted
            | WinReason::MinionWinsSolo
            | WinReason::VillageOnlyDeaths => Verdict::WerewolfWin,
        }
    }

    /// Stable tag, matching the serialized form.
    pub const fn tag(&self) -> &'static str {
        match self {
            WinReason::WerewolfExecuted => "werewolf_executed",
            WinReason::NoExecutionWithWolf => "no_execution_with_wolf",
            WinReason::WrongTargetExecuted => "wrong_target_executed",
            WinReason::MinionExecuted => "minion_executed",
            WinReason::MinionWinsSolo => "minion_wins_solo",
            WinReason::MinionPresentNoDeaths => "minion_present_no_deaths",
            WinReason::VillageOnlyNoDeaths => "village_only_no_deaths",
            WinReason::VillageOnlyDeaths => "village_only_deaths",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            WinReason::WerewolfExecuted => "a werewolf was executed",
            WinReason::NoExecutionWithWolf => "no executions with a wolf in play",
            WinReason::WrongTargetExecuted => "wrong target executed",
            WinReason::MinionExecuted => "no werewolves in play and the minion was executed",
            WinReason::MinionWinsSolo => "no werewolves in play and the minion survived an execution",
            WinReason::MinionPresentNoDeaths => "no werewolves in play and nobody died",
            WinReason::VillageOnlyNoDeaths => "no wolf-aligned roles in play and nobody died",
            WinReason::VillageOnlyDeaths => "the village executed one of its own",
        }
    }
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Why the round ended the way it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinDetail {
    pub reason: WinReason,
    /// Every death, vote and Hunter chain alike, sorted by id.
    pub deaths: Vec<PlayerId>,
}

/// Everything the resolver worked out for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub verdict: Verdict,
    pub detail: WinDetail,
    /// Seats executed by vote, before the Hunter chain. Sorted.
    pub executed: Vec<PlayerId>,
    pub tally: VoteTally,
}

impl Resolution {
    pub fn reason(&self) -> WinReason {
        self.detail.reason
    }

    pub fn deaths(&self) -> &[PlayerId] {
        &self.detail.deaths
    }

    /// Deaths caused by the Hunter rather than the vote.
    pub fn chain_deaths(&self) -> Vec<PlayerId> {
        self.detail
            .deaths
            .iter()
            .copied()
            .filter(|id| !self.executed.contains(id))
            .collect()
    }
}
