use rand::Rng;

use super::betting::BettingLedger;
use super::board::{Board, Standing};
use super::color::Color;
use super::dice::{DiceState, Roll};
use super::movement::{resolve_move, MoveOutcome};
use super::player::{Player, Seat, NUM_PLAYERS};
use crate::ai::{EvEnumerator, EvReport};
use crate::error::TurnError;

/// Coin rules for a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Rules {
    pub starting_coins: i32,
    /// Paid to the player who rolls a die.
    pub roll_reward: i32,
    /// Charged for asking the EV engine for advice.
    pub hint_cost: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            starting_coins: 3,
            roll_reward: 1,
            hint_cost: 1,
        }
    }
}

/// Something a player can do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Roll,
    Bet(Color),
    /// Pay for an EV report. Does not end the turn.
    Hint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Draw,
}

/// How a leg was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegSummary {
    pub standing: Standing,
    /// Coins won or lost per seat from leg bets.
    pub deltas: [i32; NUM_PLAYERS],
    /// True when a camel crossed the finish line and the game is over.
    pub final_leg: bool,
}

/// Result of a successfully applied action.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnEvent {
    Rolled {
        seat: Seat,
        color: Color,
        roll: Roll,
        leg_end: Option<LegSummary>,
    },
    Bet {
        seat: Seat,
        color: Color,
        value: u8,
    },
    Hint {
        seat: Seat,
        report: Box<EvReport>,
    },
}

/// One two-player game: the track, the dice pyramid, the ticket tents and
/// both purses.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    dice: DiceState,
    ledger: BettingLedger,
    players: [Player; NUM_PLAYERS],
    current: Seat,
    rules: Rules,
    enumerator: EvEnumerator,
    legs_completed: usize,
    race_result: Option<Standing>,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Start a game with a randomly rolled starting line-up.
    pub fn new<R: Rng + ?Sized>(names: [String; NUM_PLAYERS], rules: Rules, rng: &mut R) -> Self {
        Self::with_board(Board::with_initial_placement(rng), names, rules)
    }

    /// Start a game from a prepared board.
    pub fn with_board(board: Board, names: [String; NUM_PLAYERS], rules: Rules) -> Self {
        let players = names.map(|name| Player::new(name, rules.starting_coins));
        GameSession {
            board,
            dice: DiceState::new(),
            ledger: BettingLedger::new(),
            players,
            current: Seat::First,
            rules,
            enumerator: EvEnumerator::new(),
            legs_completed: 0,
            race_result: None,
            outcome: None,
        }
    }

    /// Use `enumerator` for hints instead of the default parallel one.
    pub fn with_enumerator(mut self, enumerator: EvEnumerator) -> Self {
        self.enumerator = enumerator;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dice(&self) -> &DiceState {
        &self.dice
    }

    pub fn ledger(&self) -> &BettingLedger {
        &self.ledger
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn legs_completed(&self) -> usize {
        self.legs_completed
    }

    /// Final placings once a camel has crossed the finish line.
    pub fn race_result(&self) -> Option<Standing> {
        self.race_result
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Actions that would succeed right now. Hints are always allowed while
    /// the game runs, even on credit.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut actions = vec![Action::Roll];
        actions.extend(self.ledger.cards().available().into_iter().map(Action::Bet));
        actions.push(Action::Hint);
        actions
    }

    /// Price every ticket against the dice left in this leg without paying
    /// for it.
    pub fn evaluate(&self) -> Result<EvReport, TurnError> {
        if self.is_terminal() {
            return Err(TurnError::GameOver);
        }
        let remaining = self.dice.remaining();
        if remaining.is_empty() {
            return Err(TurnError::NoDiceRemaining);
        }
        Ok(self
            .enumerator
            .evaluate(&self.board, &remaining, self.ledger.cards())?)
    }

    /// Apply `action` for the player whose turn it is. Rolls draw from `rng`.
    pub fn apply_action<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<TurnEvent, TurnError> {
        if self.is_terminal() {
            return Err(TurnError::GameOver);
        }
        match action {
            Action::Roll => {
                let (color, roll) = self.dice.draw(rng)?;
                self.advance(color, roll)
            }
            Action::Bet(color) => self.bet(color),
            Action::Hint => self.hint(),
        }
    }

    /// Roll a specific die with a known result, e.g. from a physical pyramid.
    pub fn apply_roll(&mut self, color: Color, roll: Roll) -> Result<TurnEvent, TurnError> {
        if self.is_terminal() {
            return Err(TurnError::GameOver);
        }
        self.dice.record(color, roll)?;
        self.advance(color, roll)
    }

    fn bet(&mut self, color: Color) -> Result<TurnEvent, TurnError> {
        let seat = self.current;
        let value = self.ledger.take_bet(seat, color)?;
        self.current = seat.other();
        Ok(TurnEvent::Bet { seat, color, value })
    }

    fn hint(&mut self) -> Result<TurnEvent, TurnError> {
        let seat = self.current;
        let report = self.evaluate()?;
        self.players[seat.index()].coins -= self.rules.hint_cost;
        Ok(TurnEvent::Hint {
            seat,
            report: Box::new(report),
        })
    }

    /// Move the camel for a die already recorded in the pyramid.
    fn advance(&mut self, color: Color, roll: Roll) -> Result<TurnEvent, TurnError> {
        let seat = self.current;
        self.players[seat.index()].coins += self.rules.roll_reward;

        let leg_end = match resolve_move(&mut self.board, color, roll)? {
            MoveOutcome::Finished(standing) => {
                self.race_result = Some(standing);
                let summary = self.close_leg(standing, true);
                self.outcome = Some(self.decide_outcome());
                Some(summary)
            }
            MoveOutcome::Advanced(standing) => {
                self.board.validate()?;
                if self.dice.leg_complete() {
                    Some(self.close_leg(standing, false))
                } else {
                    None
                }
            }
        };

        self.current = seat.other();
        Ok(TurnEvent::Rolled {
            seat,
            color,
            roll,
            leg_end,
        })
    }

    /// Pay out leg bets and put dice and tickets back for the next leg. The
    /// board carries over unchanged.
    fn close_leg(&mut self, standing: Standing, final_leg: bool) -> LegSummary {
        let deltas = self.ledger.score_leg(&standing);
        for (player, delta) in self.players.iter_mut().zip(deltas) {
            player.coins += delta;
        }
        self.ledger.reset();
        self.dice.reset();
        self.legs_completed += 1;
        LegSummary {
            standing,
            deltas,
            final_leg,
        }
    }

    fn decide_outcome(&self) -> GameOutcome {
        let first = self.player(Seat::First).coins;
        let second = self.player(Seat::Second).coins;
        if first > second {
            GameOutcome::Winner(Seat::First)
        } else if second > first {
            GameOutcome::Winner(Seat::Second)
        } else {
            GameOutcome::Draw
        }
    }
}
