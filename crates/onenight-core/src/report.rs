//! End-of-round summary.

use std::fmt;

use onenight_state::{CenterCards, MatchState, PlayerId, Role, Speech};
use onenight_vote::{Resolution, Verdict, WinReason};
use serde::{Deserialize, Serialize};

/// One seat at the end of the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatReport {
    pub id: PlayerId,
    pub name: String,
    pub initial_role: Role,
    pub current_role: Role,
    /// Whether the card ended up different from the one dealt.
    pub swapped: bool,
    pub vote_target: Option<PlayerId>,
    pub died: bool,
}

/// Everything revealed once the round is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub seats: Vec<SeatReport>,
    pub center: CenterCards,
    pub verdict: Verdict,
    pub reason: WinReason,
    /// Seats executed by vote, before the Hunter chain.
    pub executed: Vec<PlayerId>,
    pub deaths: Vec<PlayerId>,
    pub speeches: Vec<Speech>,
    /// Private night log; only present when revealing is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_log: Option<Vec<String>>,
}

impl RoundReport {
    pub fn build(state: &MatchState, resolution: &Resolution, reveal_night_log: bool) -> Self {
        let seats = state
            .players()
            .iter()
            .map(|p| SeatReport {
                id: p.id,
                name: p.name.clone(),
                initial_role: p.initial_role(),
                current_role: p.current_role(),
                swapped: p.was_swapped(),
                vote_target: p.vote_target(),
                died: resolution.deaths().contains(&p.id),
            })
            .collect();

        Self {
            seats,
            center: *state.center(),
            verdict: resolution.verdict,
            reason: resolution.reason(),
            executed: resolution.executed.clone(),
            deaths: resolution.deaths().to_vec(),
            speeches: state.speeches().to_vec(),
            night_log: reveal_night_log.then(|| state.action_log().to_vec()),
        }
    }

    fn name_of(&self, id: PlayerId) -> &str {
        self.seats
            .iter()
            .find(|s| s.id == id)
            .map_or("?", |s| s.name.as_str())
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.verdict, self.reason)?;
        writeln!(f)?;

        for seat in &self.seats {
            let vote = seat
                .vote_target
                .map_or_else(|| "-".to_string(), |t| self.name_of(t).to_string());
            let swapped = if seat.swapped {
                format!(" (dealt {})", seat.initial_role)
            } else {
                String::new()
            };
            writeln!(
                f,
                "  {}. {:<10} {:<12}{:<18} votes {:<10}{}",
                seat.id,
                seat.name,
                seat.current_role,
                swapped,
                vote,
                if seat.died { " DIED" } else { "" }
            )?;
        }

        let center: Vec<String> = self.center.iter().map(|(i, r)| format!("{}: {}", i, r)).collect();
        writeln!(f)?;
        writeln!(f, "  center: {}", center.join(", "))?;

        if self.deaths.is_empty() {
            writeln!(f, "  nobody died")?;
        } else {
            let names: Vec<&str> = self.deaths.iter().map(|id| self.name_of(*id)).collect();
            writeln!(f, "  deaths: {}", names.join(", "))?;
        }

        if let Some(log) = &self.night_log {
            writeln!(f)?;
            writeln!(f, "Night:")?;
            for line in log {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
