//! Core Camel Up game logic: camel colors, the stacked track, the dice
//! pyramid, leg betting and the two-player session that ties them together.

mod betting;
mod board;
mod color;
mod dice;
mod movement;
mod player;
mod state;

pub use betting::{score_leg, BetCards, BettingLedger, PlayerBets, BET_CARD_VALUES};
pub use board::{Board, Standing, TRACK_LEN};
pub use color::{Color, ParseColorError, NUM_COLORS};
pub use dice::{roll_die, DiceState, Roll};
pub use movement::{resolve_move, MoveOutcome};
pub use player::{Player, Seat, NUM_PLAYERS};
pub use state::{Action, GameOutcome, GameSession, LegSummary, Rules, TurnEvent};
