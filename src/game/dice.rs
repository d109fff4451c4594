use rand::Rng;

use super::color::{Color, NUM_COLORS};
use crate::error::TurnError;

/// A die outcome. Camel dice only show 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Roll(u8);

impl Roll {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// Every possible outcome, in ascending order.
    pub const ALL: [Roll; 3] = [Roll(1), Roll(2), Roll(3)];

    /// Returns `None` when `value` is outside 1..=3.
    pub fn new(value: u8) -> Option<Roll> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Roll(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Distance in cells
    pub fn distance(self) -> usize {
        self.0 as usize
    }
}

/// Roll a single die with the injected generator, uniform over 1..=3.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> Roll {
    Roll(rng.random_range(Roll::MIN..=Roll::MAX))
}

/// Per-leg dice pyramid: which colors have been rolled, and what they showed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceState {
    rolled: [Option<Roll>; NUM_COLORS],
}

impl DiceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value `color` showed this leg, if it has been rolled.
    pub fn get(&self, color: Color) -> Option<Roll> {
        self.rolled[color.index()]
    }

    /// Colors still in the pyramid, in canonical order.
    pub fn remaining(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|c| self.rolled[c.index()].is_none())
            .collect()
    }

    pub fn rolled_count(&self) -> usize {
        self.rolled.iter().filter(|r| r.is_some()).count()
    }

    /// True once every die has been used this leg.
    pub fn leg_complete(&self) -> bool {
        self.rolled_count() == NUM_COLORS
    }

    /// Record an externally produced roll for `color`.
    pub fn record(&mut self, color: Color, roll: Roll) -> Result<(), TurnError> {
        let slot = &mut self.rolled[color.index()];
        if slot.is_some() {
            return Err(TurnError::DieAlreadyRolled(color));
        }
        *slot = Some(roll);
        Ok(())
    }

    /// Pull a random remaining die from the pyramid and roll it.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Color, Roll), TurnError> {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return Err(TurnError::NoDiceRemaining);
        }
        let color = remaining[rng.random_range(0..remaining.len())];
        let roll = roll_die(rng);
        self.record(color, roll)?;
        Ok((color, roll))
    }

    /// Put every die back into the pyramid for a new leg.
    pub fn reset(&mut self) {
        self.rolled = [None; NUM_COLORS];
    }
}
