//! Resolves a single die roll into a board mutation.
//!
//! This is the only place camels move. Live play and the EV enumerator both
//! route every roll through [`resolve_move`].

use super::board::{Board, Standing, TRACK_LEN};
use super::color::Color;
use super::dice::Roll;
use crate::error::BoardError;

/// What happened to the race after one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The group landed on the track; carries the standing after the move.
    Advanced(Standing),
    /// The group crossed the finish line and the race is over.
    Finished(Standing),
}

impl MoveOutcome {
    pub fn standing(&self) -> Standing {
        match *self {
            MoveOutcome::Advanced(s) | MoveOutcome::Finished(s) => s,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, MoveOutcome::Finished(_))
    }
}

/// Move `color` and everything riding on it forward by `roll` cells.
///
/// When the group runs past the last cell the race ends: the camel on top of
/// the group wins, and the camel beneath it is second. A lone camel's
/// runner-up is the top camel of the nearest occupied cell behind the line.
pub fn resolve_move(board: &mut Board, color: Color, roll: Roll) -> Result<MoveOutcome, BoardError> {
    let (cell, height) = board.token_position(color)?;
    let removed = board.stack(cell).len() - height;
    let destination = cell + roll.distance();
    let group = board.apply(cell, removed, destination)?;

    if destination < TRACK_LEN {
        let standing = board.standing().ok_or_else(|| {
            BoardError::InvariantViolation("track is empty after a move".into())
        })?;
        return Ok(MoveOutcome::Advanced(standing));
    }

    let (winner, riders) = group
        .split_last()
        .ok_or(BoardError::NotFound(color))?;
    let second = match riders.last() {
        Some(&below) => Some(below),
        None => board.top_at_or_below(TRACK_LEN - 2),
    };
    Ok(MoveOutcome::Finished(Standing {
        winner: *winner,
        second,
    }))
}
