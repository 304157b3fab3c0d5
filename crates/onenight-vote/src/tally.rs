//! Vote counting.

use std::collections::{BTreeMap, BTreeSet};

use onenight_state::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Votes received per target, built from a snapshot of the seats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Votes received, keyed by target. Targets with no votes are absent.
    pub counts: BTreeMap<PlayerId, usize>,
    /// Number of players who cast a vote.
    pub voters: usize,
    /// Number of seats in the snapshot.
    pub seats: usize,
}

impl VoteTally {
    /// Counts every vote that has been cast. Seats without a vote
    /// contribute nothing.
    pub fn from_players(players: &[Player]) -> Self {
        let mut counts = BTreeMap::new();
        let mut voters = 0;

        for target in players.iter().filter_map(Player::vote_target) {
            *counts.entry(target).or_insert(0) += 1;
            voters += 1;
        }

        Self {
            counts,
            voters,
            seats: players.len(),
        }
    }

    pub fn votes_for(&self, id: PlayerId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Highest count received by any target; zero when nobody voted.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Every target tied for the highest count.
    pub fn leaders(&self) -> BTreeSet<PlayerId> {
        let max = self.max_count();
        self.counts
            .iter()
            .filter(|(_, count)| **count == max && max > 0)
            .map(|(id, _)| *id)
            .collect()
    }

    /// All seats received exactly one vote each.
    ///
    /// Only a full, evenly spread vote qualifies: with partial turnout
    /// the distinct-target count falls short of the seat count.
    pub fn is_maximally_spread(&self) -> bool {
        self.seats > 0
            && self.counts.len() == self.seats
            && self.counts.values().all(|count| *count == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onenight_state::Role;

    fn seats(votes: &[(u8, u8)]) -> Vec<Player> {
        let mut players: Vec<Player> = (1..=6)
            .map(|id| Player::new(PlayerId(id), format!("P{}", id), Role::Seer))
            .collect();
        for (voter, target) in votes {
            let index = usize::from(*voter) - 1;
            players[index] = players[index].clone().with_vote(PlayerId(*target));
        }
        players
    }

    #[test]
    fn test_counts_only_cast_votes() {
        let tally = VoteTally::from_players(&seats(&[(1, 3), (2, 3), (4, 5)]));
        assert_eq!(tally.voters, 3);
        assert_eq!(tally.seats, 6);
        assert_eq!(tally.votes_for(PlayerId(3)), 2);
        assert_eq!(tally.votes_for(PlayerId(5)), 1);
        assert_eq!(tally.votes_for(PlayerId(1)), 0);
        assert!(!tally.counts.contains_key(&PlayerId(1)));
    }

    #[test]
    fn test_empty_tally() {
        let tally = VoteTally::from_players(&seats(&[]));
        assert_eq!(tally.max_count(), 0);
        assert!(tally.leaders().is_empty());
        assert!(!tally.is_maximally_spread());
    }

    #[test]
    fn test_leaders_include_ties() {
        let tally = VoteTally::from_players(&seats(&[(1, 2), (3, 2), (2, 4), (5, 4), (6, 1)]));
        assert_eq!(tally.max_count(), 2);
        assert_eq!(tally.leaders(), BTreeSet::from([PlayerId(2), PlayerId(4)]));
    }

    #[test]
    fn test_ring_is_maximally_spread() {
        let tally =
            VoteTally::from_players(&seats(&[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)]));
        assert!(tally.is_maximally_spread());
    }

    #[test]
    fn test_partial_spread_is_not_maximal() {
        let tally = VoteTally::from_players(&seats(&[(1, 2), (2, 3), (3, 4)]));
        assert!(!tally.is_maximally_spread());
        assert_eq!(tally.leaders().len(), 3);
    }
}
