use rand::seq::SliceRandom;
use rand::Rng;

use super::color::{Color, NUM_COLORS};
use super::dice::roll_die;
use crate::error::BoardError;

/// Number of cells on the track. Moving past the last cell crosses the finish line.
pub const TRACK_LEN: usize = 16;

/// First and second place at a point in the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub winner: Color,
    /// `None` only when no other camel is left on the track.
    pub second: Option<Color>,
}

/// The race track. Each cell holds a stack of camels, bottom first; the last
/// element of a stack is the camel riding on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Vec<Color>; TRACK_LEN],
}

impl Board {
    /// Create an empty track
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from `(cell, stack)` pairs and check that every camel
    /// appears exactly once.
    pub fn from_stacks(stacks: &[(usize, &[Color])]) -> Result<Self, BoardError> {
        let board = Self::from_partial_stacks(stacks)?;
        board.validate()?;
        Ok(board)
    }

    /// Like [`Board::from_stacks`] but allows camels to be absent, e.g. to
    /// set up an end-game position with part of the field already home.
    pub fn from_partial_stacks(stacks: &[(usize, &[Color])]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for &(cell, stack) in stacks {
            if cell >= TRACK_LEN {
                return Err(BoardError::InvariantViolation(format!(
                    "cell {} is off the track",
                    cell + 1
                )));
            }
            board.cells[cell].extend_from_slice(stack);
        }
        Ok(board)
    }

    /// Starting line-up: camels take turns in random order, each rolls its die
    /// once and lands on cell `roll - 1`, stacking on anyone already there.
    pub fn with_initial_placement<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = Color::ALL;
        order.shuffle(rng);

        let mut board = Board::new();
        for color in order {
            let roll = roll_die(rng);
            board.cells[roll.distance() - 1].push(color);
        }
        board
    }

    /// The stack at `cell`, bottom first. Empty for cells off the track.
    pub fn stack(&self, cell: usize) -> &[Color] {
        self.cells.get(cell).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cells(&self) -> &[Vec<Color>] {
        &self.cells
    }

    /// Locate a camel as `(cell, height)`; height 0 is the bottom of the stack.
    pub fn token_position(&self, color: Color) -> Result<(usize, usize), BoardError> {
        self.cells
            .iter()
            .enumerate()
            .find_map(|(cell, stack)| {
                stack
                    .iter()
                    .position(|&c| c == color)
                    .map(|height| (cell, height))
            })
            .ok_or(BoardError::NotFound(color))
    }

    /// The camel plus everyone riding on it, bottom to top.
    pub fn moving_group(&self, color: Color) -> Result<&[Color], BoardError> {
        let (cell, height) = self.token_position(color)?;
        Ok(&self.cells[cell][height..])
    }

    /// Lift the top `removed` camels off `cell` and drop them, order preserved,
    /// onto `destination`. A destination past the last cell is a finish-line
    /// crossing: the group is not placed anywhere. Returns the lifted group.
    pub fn apply(
        &mut self,
        cell: usize,
        removed: usize,
        destination: usize,
    ) -> Result<Vec<Color>, BoardError> {
        let stack = self.cells.get_mut(cell).ok_or_else(|| {
            BoardError::InvariantViolation(format!("cell {} is off the track", cell + 1))
        })?;
        if removed == 0 || removed > stack.len() {
            return Err(BoardError::InvariantViolation(format!(
                "cannot lift {} camels from cell {} holding {}",
                removed,
                cell + 1,
                stack.len()
            )));
        }
        let group = stack.split_off(stack.len() - removed);
        if destination < TRACK_LEN {
            self.cells[destination].extend_from_slice(&group);
        }
        Ok(group)
    }

    /// Top camel of the first occupied cell at or below `from`, scanning
    /// toward the start line.
    pub fn top_at_or_below(&self, from: usize) -> Option<Color> {
        let from = from.min(TRACK_LEN - 1);
        self.cells[..=from]
            .iter()
            .rev()
            .find_map(|stack| stack.last().copied())
    }

    /// Leader and runner-up by position: scan from the last cell backwards,
    /// the top camel of the first occupied cell leads and the top camel of
    /// the next occupied cell is second. When every camel shares the leading
    /// cell, the camel directly under the leader is second.
    pub fn standing(&self) -> Option<Standing> {
        let mut occupied = self.cells.iter().rev().filter(|stack| !stack.is_empty());
        let lead = occupied.next()?;
        let (&winner, below) = lead.split_last()?;
        let second = occupied
            .next()
            .and_then(|stack| stack.last())
            .or_else(|| below.last())
            .copied();
        Some(Standing { winner, second })
    }

    /// Check that each of the five camels is on the track exactly once.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut counts = [0usize; NUM_COLORS];
        for color in self.cells.iter().flatten() {
            counts[color.index()] += 1;
        }
        for color in Color::ALL {
            match counts[color.index()] {
                1 => {}
                0 => {
                    return Err(BoardError::InvariantViolation(format!(
                        "{color} is missing from the board"
                    )))
                }
                n => {
                    return Err(BoardError::InvariantViolation(format!(
                        "{color} appears {n} times"
                    )))
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Color::*;

    fn spread_board() -> Board {
        Board::from_stacks(&[
            (0, &[Red, Green]),
            (2, &[Blue]),
            (5, &[Yellow, Purple]),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(Vec::is_empty));
        assert_eq!(board.cells().len(), TRACK_LEN);
        assert!(board.standing().is_none());
    }

    #[test]
    fn test_token_position() {
        let board = spread_board();
        assert_eq!(board.token_position(Green), Ok((0, 1)));
        assert_eq!(board.token_position(Yellow), Ok((5, 0)));
        assert_eq!(Board::new().token_position(Red), Err(BoardError::NotFound(Red)));
    }

    #[test]
    fn test_moving_group_includes_riders() {
        let board = spread_board();
        assert_eq!(board.moving_group(Red).unwrap(), &[Red, Green]);
        assert_eq!(board.moving_group(Green).unwrap(), &[Green]);
        assert_eq!(board.moving_group(Blue).unwrap(), &[Blue]);
    }

    #[test]
    fn test_apply_stacks_on_destination() {
        let mut board = spread_board();
        let group = board.apply(0, 2, 2).unwrap();
        assert_eq!(group, vec![Red, Green]);
        assert!(board.stack(0).is_empty());
        assert_eq!(board.stack(2), &[Blue, Red, Green]);
        board.validate().unwrap();
    }

    #[test]
    fn test_apply_past_finish_drops_group() {
        let mut board = Board::from_stacks(&[
            (14, &[Red, Green]),
            (3, &[Blue, Yellow, Purple]),
        ])
        .unwrap();
        let group = board.apply(14, 1, 17).unwrap();
        assert_eq!(group, vec![Green]);
        assert_eq!(board.stack(14), &[Red]);
        assert_eq!(board.token_position(Green), Err(BoardError::NotFound(Green)));
    }

    #[test]
    fn test_standing_scans_from_the_front() {
        let board = spread_board();
        assert_eq!(
            board.standing(),
            Some(Standing {
                winner: Purple,
                second: Some(Blue),
            })
        );
    }

    #[test]
    fn test_apply_rejects_oversized_lift() {
        let mut board = spread_board();
        assert!(matches!(
            board.apply(2, 2, 4),
            Err(BoardError::InvariantViolation(_))
        ));
        assert!(matches!(
            board.apply(1, 1, 4),
            Err(BoardError::InvariantViolation(_))
        ));
        assert!(matches!(
            board.apply(TRACK_LEN, 1, TRACK_LEN + 1),
            Err(BoardError::InvariantViolation(_))
        ));
        assert_eq!(board, spread_board());
    }

    #[test]
    fn test_standing_with_whole_field_on_one_cell() {
        let board = Board::from_stacks(&[(7, &[Red, Green, Blue, Yellow, Purple])]).unwrap();
        assert_eq!(
            board.standing(),
            Some(Standing {
                winner: Purple,
                second: Some(Yellow),
            })
        );
    }

    #[test]
    fn test_standing_of_a_lone_camel_has_no_runner_up() {
        let board = Board::from_partial_stacks(&[(4, &[Red])]).unwrap();
        assert_eq!(board.standing(), Some(Standing { winner: Red, second: None }));
    }

    #[test]
    fn test_standing_counts_the_first_cell() {
        let board = Board::from_stacks(&[(0, &[Red, Green, Blue]), (9, &[Yellow, Purple])]).unwrap();
        let standing = board.standing().unwrap();
        assert_eq!(standing.winner, Purple);
        assert_eq!(standing.second, Some(Blue));
    }

    #[test]
    fn test_top_at_or_below() {
        let board = spread_board();
        assert_eq!(board.top_at_or_below(4), Some(Blue));
        assert_eq!(board.top_at_or_below(1), Some(Green));
        assert_eq!(board.top_at_or_below(TRACK_LEN + 3), Some(Purple));
        assert_eq!(Board::new().top_at_or_below(15), None);
    }

    #[test]
    fn test_validate_detects_duplicates_and_omissions() {
        let err = Board::from_stacks(&[(0, &[Red, Green, Blue, Yellow])]).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvariantViolation("purple is missing from the board".into())
        );

        let err = Board::from_stacks(&[(0, &[Red, Green, Blue, Yellow, Purple]), (3, &[Red])])
            .unwrap_err();
        assert_eq!(err, BoardError::InvariantViolation("red appears 2 times".into()));
    }

    #[test]
    fn test_from_stacks_rejects_off_track_cell() {
        let err = Board::from_stacks(&[(16, &[Red])]).unwrap_err();
        assert_eq!(err, BoardError::InvariantViolation("cell 17 is off the track".into()));
    }

    #[test]
    fn test_initial_placement_uses_first_three_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let board = Board::with_initial_placement(&mut rng);
            board.validate().unwrap();
            assert!(board.cells()[3..].iter().all(Vec::is_empty));
        }
    }
}
