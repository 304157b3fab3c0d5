//! The three face-down center cards.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};
use crate::role::Role;

/// Number of center slots.
pub const CENTER_SIZE: usize = 3;

/// Three role cards, addressed 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterCards([Role; CENTER_SIZE]);

impl CenterCards {
    pub fn new(cards: [Role; CENTER_SIZE]) -> Self {
        Self(cards)
    }

    /// Converts a 1-based index to a slot position.
    fn slot(index: u8) -> Result<usize> {
        match index {
            1..=3 => Ok(usize::from(index) - 1),
            _ => Err(StateError::bad_center(index)),
        }
    }

    /// Returns the card at a 1-based index.
    pub fn get(&self, index: u8) -> Result<Role> {
        Ok(self.0[Self::slot(index)?])
    }

    pub(crate) fn slot_mut(&mut self, index: u8) -> Result<&mut Role> {
        let slot = Self::slot(index)?;
        Ok(&mut self.0[slot])
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }

    /// Iterates `(index, role)` pairs with 1-based indices.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Role)> + '_ {
        (1u8..).zip(self.0.iter().copied())
    }
}
