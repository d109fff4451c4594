use crate::game::{Action, GameSession};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that rolls or bets uniformly at random. It never pays for hints.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, session: &GameSession) -> Action {
        let actions: Vec<Action> = session
            .legal_actions()
            .into_iter()
            .filter(|a| *a != Action::Hint)
            .collect();
        assert!(!actions.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..actions.len());
        actions[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;

    fn session(seed: u64) -> GameSession {
        let mut rng = StdRng::seed_from_u64(seed);
        GameSession::new(["A".into(), "B".into()], Rules::default(), &mut rng)
    }

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::with_seed(1);
        let state = session(1);
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state);
            assert!(legal.contains(&action), "Action {:?} is not legal", action);
            assert_ne!(action, Action::Hint);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(2);
        let mut agent2 = RandomAgent::with_seed(3);
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = session(5);

        while !state.is_terminal() {
            let action = match state.current_seat() {
                crate::game::Seat::First => agent1.select_action(&state),
                crate::game::Seat::Second => agent2.select_action(&state),
            };
            state.apply_action(action, &mut rng).unwrap();
        }

        assert!(state.is_terminal());
        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
