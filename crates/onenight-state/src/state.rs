//! The mutable state of one round.
//!
//! [`MatchState`] owns the six seats, the three center cards and the two
//! append-only logs. All card movement goes through [`swap_players`] and
//! [`swap_with_center`], each a single exchange that is validated in
//! full before anything is written. That is what keeps the nine cards
//! conserved: nothing is ever created or dropped, only exchanged.
//!
//! [`swap_players`]: MatchState::swap_players
//! [`swap_with_center`]: MatchState::swap_with_center

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::center::{CenterCards, CENTER_SIZE};
use crate::error::{Result, StateError};
use crate::player::{Player, PlayerId};
use crate::role::{Role, STARTER_POOL};

/// Seats at the table.
pub const PLAYER_COUNT: usize = 6;

/// One entry in the public speech log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speech {
    /// 1-based position in the log.
    pub sequence: usize,
    pub player_id: PlayerId,
    pub player_name: String,
    pub content: String,
}

/// Everything that changes during a round.
///
/// Deserializing runs the same checks as a deal, so a saved state with
/// a wrong seat count or a tampered card pool is refused.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct MatchState {
    players: Vec<Player>,
    center: CenterCards,
    action_log: Vec<String>,
    speeches: Vec<Speech>,
}

impl MatchState {
    /// Shuffles the starter pool and deals a round.
    ///
    /// With `Some(seed)` the deal is reproducible; with `None` the
    /// generator is seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Fails when `names` is not exactly six non-blank names.
    pub fn setup<S: AsRef<str>>(names: &[S], seed: Option<u64>) -> Result<Self> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::deal(names, &mut rng)
    }

    /// Shuffles the starter pool with the given generator and deals.
    pub fn deal<S: AsRef<str>, R: Rng + ?Sized>(names: &[S], rng: &mut R) -> Result<Self> {
        let mut cards = STARTER_POOL;
        cards.shuffle(rng);
        Self::from_deal(names, cards)
    }

    /// Deals a fixed card order: the first six cards go to seats 1..=6,
    /// the last three to center slots 1..=3.
    ///
    /// # Errors
    ///
    /// Fails on a wrong player count, a blank name, or cards that are
    /// not a permutation of the starter pool.
    pub fn from_deal<S: AsRef<str>>(names: &[S], cards: [Role; 9]) -> Result<Self> {
        if names.len() != PLAYER_COUNT {
            return Err(StateError::WrongPlayerCount {
                expected: PLAYER_COUNT,
                actual: names.len(),
            });
        }
        if let Some(seat) = names.iter().position(|n| n.as_ref().trim().is_empty()) {
            return Err(StateError::EmptyPlayerName(seat + 1));
        }
        if sorted(cards.to_vec()) != sorted(STARTER_POOL.to_vec()) {
            return Err(StateError::NotStarterPool);
        }

        let players: Vec<Player> = names
            .iter()
            .zip(cards.iter())
            .zip(1u8..)
            .map(|((name, role), id)| Player::new(PlayerId(id), name.as_ref().trim(), *role))
            .collect();

        let mut center = [Role::Hunter; CENTER_SIZE];
        center.copy_from_slice(&cards[PLAYER_COUNT..]);

        info!("Dealt {} seats and {} center cards", players.len(), CENTER_SIZE);
        for player in &players {
            debug!("Seat {} dealt {}", player, player.initial_role());
        }

        Ok(Self {
            players,
            center: CenterCards::new(center),
            action_log: Vec::new(),
            speeches: Vec::new(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn center(&self) -> &CenterCards {
        &self.center
    }

    fn index_of(&self, id: PlayerId) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StateError::unknown_player(id))
    }

    /// Looks up a seat.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        Ok(&self.players[self.index_of(id)?])
    }

    /// The card a player was dealt, if the id exists.
    pub fn view_initial_role(&self, id: PlayerId) -> Option<Role> {
        self.player(id).ok().map(Player::initial_role)
    }

    /// Seats currently holding `role`, in id order.
    pub fn holders_of(&self, role: Role) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.current_role == role)
            .map(|p| p.id)
            .collect();
        ids.sort();
        ids
    }

    /// Every card currently in play (seats then center), sorted.
    pub fn card_pool(&self) -> Vec<Role> {
        sorted(
            self.players
                .iter()
                .map(Player::current_role)
                .chain(self.center.as_slice().iter().copied())
                .collect(),
        )
    }

    /// Whether the cards in play are still exactly the starter pool.
    pub fn conserves_pool(&self) -> bool {
        self.card_pool() == sorted(STARTER_POOL.to_vec())
    }

    /// Exchanges the current cards of two different seats.
    ///
    /// # Errors
    ///
    /// Unknown ids and `a == b` are rejected before anything moves.
    pub fn swap_players(&mut self, a: PlayerId, b: PlayerId) -> Result<()> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return Err(StateError::DuplicateSelection(format!(
                "cannot swap player {} with themselves",
                a
            )));
        }

        let role_a = self.players[ia].current_role;
        self.players[ia].current_role = self.players[ib].current_role;
        self.players[ib].current_role = role_a;

        debug!("Swapped cards of players {} and {}", a, b);
        Ok(())
    }

    /// Exchanges a seat's current card with a center slot.
    ///
    /// # Errors
    ///
    /// Unknown id or out-of-range index; nothing moves on failure.
    pub fn swap_with_center(&mut self, id: PlayerId, index: u8) -> Result<()> {
        let i = self.index_of(id)?;
        let slot = self.center.slot_mut(index)?;
        std::mem::swap(&mut self.players[i].current_role, slot);

        debug!("Swapped card of player {} with center {}", id, index);
        Ok(())
    }

    /// Appends an entry to the night action log.
    pub fn log_action(&mut self, entry: impl Into<String>) {
        self.action_log.push(entry.into());
    }

    pub fn action_log(&self) -> &[String] {
        &self.action_log
    }

    /// Appends a speech to the public log.
    ///
    /// # Errors
    ///
    /// Unknown speaker; nothing is appended.
    pub fn record_speech(&mut self, id: PlayerId, content: impl Into<String>) -> Result<&Speech> {
        let i = self.index_of(id)?;
        let speech = Speech {
            sequence: self.speeches.len() + 1,
            player_id: id,
            player_name: self.players[i].name.clone(),
            content: content.into(),
        };
        debug!("Speech #{} by {}", speech.sequence, self.players[i]);
        self.speeches.push(speech);
        Ok(&self.speeches[self.speeches.len() - 1])
    }

    pub fn speeches(&self) -> &[Speech] {
        &self.speeches
    }

    /// Records `voter`'s vote for `target`.
    ///
    /// # Errors
    ///
    /// Unknown ids, a self-vote, or a second vote by the same voter.
    /// The stored vote is untouched on failure.
    pub fn cast_vote(&mut self, voter: PlayerId, target: PlayerId) -> Result<()> {
        let result = self.validate_vote(voter, target);
        match result {
            Ok(i) => {
                self.players[i].vote_target = Some(target);
                debug!("Player {} voted", voter);
                Ok(())
            }
            Err(e) => {
                warn!("Vote {} -> {} rejected: {}", voter, target, e);
                Err(e)
            }
        }
    }

    fn validate_vote(&self, voter: PlayerId, target: PlayerId) -> Result<usize> {
        let i = self.index_of(voter)?;
        self.index_of(target)?;
        if voter == target {
            return Err(StateError::IllegalSelfTarget(voter));
        }
        if self.players[i].vote_target.is_some() {
            return Err(StateError::VoteAlreadyCast(voter));
        }
        Ok(i)
    }

    /// Number of players who have voted.
    pub fn votes_cast(&self) -> usize {
        self.players.iter().filter(|p| p.vote_target.is_some()).count()
    }
}

/// Unchecked wire form of [`MatchState`].
#[derive(Deserialize)]
struct SavedState {
    players: Vec<Player>,
    center: CenterCards,
    #[serde(default)]
    action_log: Vec<String>,
    #[serde(default)]
    speeches: Vec<Speech>,
}

impl TryFrom<SavedState> for MatchState {
    type Error = StateError;

    fn try_from(saved: SavedState) -> Result<Self> {
        if saved.players.len() != PLAYER_COUNT {
            return Err(StateError::WrongPlayerCount {
                expected: PLAYER_COUNT,
                actual: saved.players.len(),
            });
        }
        for (seat, player) in (1u8..).zip(&saved.players) {
            if player.id != PlayerId(seat) {
                return Err(StateError::unknown_player(player.id));
            }
            if player.name.trim().is_empty() {
                return Err(StateError::EmptyPlayerName(usize::from(seat)));
            }
        }

        let state = Self {
            players: saved.players,
            center: saved.center,
            action_log: saved.action_log,
            speeches: saved.speeches,
        };
        if !state.conserves_pool() {
            return Err(StateError::NotStarterPool);
        }
        for player in &state.players {
            if let Some(target) = player.vote_target {
                state.index_of(target)?;
                if target == player.id {
                    return Err(StateError::IllegalSelfTarget(player.id));
                }
            }
        }
        for speech in &state.speeches {
            state.index_of(speech.player_id)?;
        }
        Ok(state)
    }
}

fn sorted(mut roles: Vec<Role>) -> Vec<Role> {
    roles.sort();
    roles
}
