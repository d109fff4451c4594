pub const NUM_PLAYERS: usize = 2;

/// Turn order position. The first seat opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const ALL: [Seat; NUM_PLAYERS] = [Seat::First, Seat::Second];

    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A player's name and purse. Their bet tickets live in the betting ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub coins: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, coins: i32) -> Self {
        Player {
            name: name.into(),
            coins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new("Alice", 3);
        assert_eq!(player.name, "Alice");
        assert_eq!(player.coins, 3);
    }
}
