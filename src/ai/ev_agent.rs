use crate::game::{Action, GameSession};

use super::agent::Agent;

/// Takes the recommended leg bet whenever its expected value beats the
/// guaranteed coin for rolling, and rolls otherwise.
///
/// It consults the EV engine for free; a human pays for the same report.
#[derive(Debug, Default)]
pub struct EvAgent;

impl EvAgent {
    pub fn new() -> Self {
        EvAgent
    }
}

impl Agent for EvAgent {
    fn select_action(&mut self, session: &GameSession) -> Action {
        let Ok(report) = session.evaluate() else {
            return Action::Roll;
        };
        let roll_value = session.rules().roll_reward as f64;
        match report.recommendation {
            Some(color) if report.odds(color).ev.is_some_and(|ev| ev > roll_value) => {
                Action::Bet(color)
            }
            _ => Action::Roll,
        }
    }

    fn name(&self) -> &str {
        "EV"
    }
}
