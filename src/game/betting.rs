use super::board::Standing;
use super::color::{Color, NUM_COLORS};
use super::player::{Seat, NUM_PLAYERS};
use crate::error::BetError;

/// Leg bet tickets available per color at the start of every leg, best first.
pub const BET_CARD_VALUES: [u8; 4] = [5, 3, 2, 2];

/// The ticket tents: bet cards still on offer for each color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetCards {
    stacks: [Vec<u8>; NUM_COLORS],
}

impl BetCards {
    /// A full set of tickets for every color
    pub fn new() -> Self {
        BetCards {
            stacks: std::array::from_fn(|_| BET_CARD_VALUES.to_vec()),
        }
    }

    /// Replace the tickets on offer for one color.
    pub fn with_cards(mut self, color: Color, cards: &[u8]) -> Self {
        self.stacks[color.index()] = cards.to_vec();
        self
    }

    /// Value of the next ticket for `color`, or `None` if the tent is empty.
    pub fn top(&self, color: Color) -> Option<u8> {
        self.stacks[color.index()].first().copied()
    }

    pub fn remaining(&self, color: Color) -> &[u8] {
        &self.stacks[color.index()]
    }

    /// Remove and return the best remaining ticket for `color`.
    pub fn take(&mut self, color: Color) -> Result<u8, BetError> {
        let stack = &mut self.stacks[color.index()];
        if stack.is_empty() {
            return Err(BetError::Exhausted(color));
        }
        Ok(stack.remove(0))
    }

    /// Colors that can still be bet on
    pub fn available(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|c| self.top(*c).is_some())
            .collect()
    }
}

impl Default for BetCards {
    fn default() -> Self {
        Self::new()
    }
}

/// The tickets one player has claimed this leg, per color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerBets {
    claimed: [Vec<u8>; NUM_COLORS],
}

impl PlayerBets {
    pub fn claim(&mut self, color: Color, value: u8) {
        self.claimed[color.index()].push(value);
    }

    pub fn cards(&self, color: Color) -> &[u8] {
        &self.claimed[color.index()]
    }

    /// `(color, cards)` for each color this player holds at least one ticket on.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &[u8])> {
        Color::ALL
            .into_iter()
            .map(move |c| (c, self.cards(c)))
            .filter(|(_, cards)| !cards.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        for cards in &mut self.claimed {
            cards.clear();
        }
    }

    /// Net coins these tickets earn for the given leg result: the face value
    /// of each ticket on the winner, +1 per ticket on the runner-up, and -1
    /// for every other ticket.
    pub fn score(&self, standing: &Standing) -> i32 {
        self.iter()
            .map(|(color, cards)| {
                if color == standing.winner {
                    cards.iter().map(|&v| v as i32).sum()
                } else if Some(color) == standing.second {
                    cards.len() as i32
                } else {
                    -(cards.len() as i32)
                }
            })
            .sum()
    }
}

/// Score a finished leg for every player, in seat order.
pub fn score_leg(standing: &Standing, players: &[PlayerBets]) -> Vec<i32> {
    players.iter().map(|bets| bets.score(standing)).collect()
}

/// Ticket tents plus what each seat has claimed from them this leg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BettingLedger {
    cards: BetCards,
    bets: [PlayerBets; NUM_PLAYERS],
}

impl BettingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &BetCards {
        &self.cards
    }

    pub fn bets(&self, seat: Seat) -> &PlayerBets {
        &self.bets[seat.index()]
    }

    /// Hand the best remaining `color` ticket to `seat`.
    pub fn take_bet(&mut self, seat: Seat, color: Color) -> Result<u8, BetError> {
        let value = self.cards.take(color)?;
        self.bets[seat.index()].claim(color, value);
        Ok(value)
    }

    /// Coins won or lost by each seat for the given leg result.
    pub fn score_leg(&self, standing: &Standing) -> [i32; NUM_PLAYERS] {
        let deltas = score_leg(standing, &self.bets);
        [deltas[0], deltas[1]]
    }

    /// Return every ticket to the tents for the next leg.
    pub fn reset(&mut self) {
        self.cards = BetCards::new();
        for bets in &mut self.bets {
            bets.clear();
        }
    }
}
