use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::{Agent, EvEnumerator};
use crate::error::TurnError;
use crate::game::{GameOutcome, GameSession, Rules, Seat};
use crate::simulation::metrics::{GameResult, SimulationMetrics};

/// Settings for a batch of bot-versus-bot games.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub games: usize,
    /// Fixed seed for reproducible runs; fresh entropy when unset.
    pub seed: Option<u64>,
    /// Print a progress line every this many games.
    pub log_interval: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            games: 100,
            seed: None,
            log_interval: 10,
        }
    }
}

/// Plays two agents against each other, swapping who opens every game.
pub struct Arena {
    config: SimulationConfig,
    rules: Rules,
    enumerator: EvEnumerator,
}

impl Arena {
    pub fn new(config: SimulationConfig, rules: Rules) -> Self {
        Arena {
            config,
            rules,
            enumerator: EvEnumerator::new(),
        }
    }

    pub fn with_enumerator(mut self, enumerator: EvEnumerator) -> Self {
        self.enumerator = enumerator;
        self
    }

    /// Run the full batch, printing progress to stdout.
    pub fn run(&self, agents: &mut [Box<dyn Agent>; 2]) -> Result<SimulationMetrics, TurnError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut metrics = SimulationMetrics::new();
        let total = self.config.games;
        let window = self.config.log_interval;

        println!(
            "Simulating {} games: {} vs {}...",
            total,
            agents[0].name(),
            agents[1].name()
        );
        println!("-------------------------------------------");

        for game in 1..=total {
            let result = self.play_game(agents, (game - 1) % 2, &mut rng)?;
            metrics.record_game(result);

            if game % window == 0 {
                println!(
                    "Game {}/{} | {} wins({}): {:.1}% | {} wins: {:.1}% | draw: {:.1}% | avg_legs: {:.1}",
                    game,
                    total,
                    agents[0].name(),
                    window,
                    metrics.win_rate(0, window) * 100.0,
                    agents[1].name(),
                    metrics.win_rate(1, window) * 100.0,
                    metrics.draw_rate(window) * 100.0,
                    metrics.average_legs(window),
                );
            }
        }

        println!("-------------------------------------------");
        println!("Simulation complete. Total games: {}", metrics.total_games());
        for (i, agent) in agents.iter().enumerate() {
            println!(
                "{}: {:.1}% wins, {:.2} coins on average",
                agent.name(),
                metrics.win_rate(i, total) * 100.0,
                metrics.average_coins(i, total),
            );
        }
        println!(
            "Draws: {:.1}% | legs per game: {:.2} | turns per game: {:.1}",
            metrics.draw_rate(total) * 100.0,
            metrics.average_legs(total),
            metrics.average_turns(total),
        );

        Ok(metrics)
    }

    /// Play one game with agent `opener` in the first seat.
    pub fn play_game<R: Rng + ?Sized>(
        &self,
        agents: &mut [Box<dyn Agent>; 2],
        opener: usize,
        rng: &mut R,
    ) -> Result<GameResult, TurnError> {
        let agent_at = move |seat: Seat| match seat {
            Seat::First => opener,
            Seat::Second => 1 - opener,
        };
        let names = Seat::ALL.map(|seat| format!("{} #{}", agents[agent_at(seat)].name(), agent_at(seat) + 1));
        let mut session = GameSession::new(names, self.rules.clone(), rng)
            .with_enumerator(self.enumerator);

        let mut turns = 0;
        while !session.is_terminal() {
            let agent = agent_at(session.current_seat());
            let action = agents[agent].select_action(&session);
            session.apply_action(action, rng)?;
            turns += 1;
        }

        let mut coins = [0; 2];
        for seat in Seat::ALL {
            coins[agent_at(seat)] = session.player(seat).coins;
        }
        let winner = match session.outcome() {
            Some(GameOutcome::Winner(seat)) => Some(agent_at(seat)),
            _ => None,
        };

        Ok(GameResult {
            winner,
            coins,
            legs: session.legs_completed(),
            turns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{EvAgent, RandomAgent};

    fn random_pair(seed: u64) -> [Box<dyn Agent>; 2] {
        [
            Box::new(RandomAgent::with_seed(seed)),
            Box::new(RandomAgent::with_seed(seed + 1)),
        ]
    }

    fn arena(games: usize, seed: u64) -> Arena {
        let config = SimulationConfig {
            games,
            seed: Some(seed),
            log_interval: 5,
        };
        Arena::new(config, Rules::default()).with_enumerator(EvEnumerator::sequential())
    }

    #[test]
    fn test_play_game_finishes() {
        let mut agents = random_pair(10);
        let mut rng = StdRng::seed_from_u64(10);
        let result = arena(1, 10).play_game(&mut agents, 1, &mut rng).unwrap();
        assert!(result.legs >= 1);
        assert!(result.turns >= 5);
    }

    #[test]
    fn test_run_records_every_game() {
        let mut agents = random_pair(20);
        let metrics = arena(10, 20).run(&mut agents).unwrap();
        assert_eq!(metrics.total_games(), 10);
        let rates = metrics.win_rate(0, 10) + metrics.win_rate(1, 10) + metrics.draw_rate(10);
        assert!((rates - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = arena(6, 7).run(&mut random_pair(3)).unwrap();
        let b = arena(6, 7).run(&mut random_pair(3)).unwrap();
        assert_eq!(a.win_rate(0, 6), b.win_rate(0, 6));
        assert_eq!(a.average_coins(1, 6), b.average_coins(1, 6));
        assert_eq!(a.average_turns(6), b.average_turns(6));
    }

    #[test]
    fn test_ev_agent_plays_through() {
        let mut agents: [Box<dyn Agent>; 2] =
            [Box::new(EvAgent::new()), Box::new(RandomAgent::with_seed(5))];
        let metrics = arena(2, 5).run(&mut agents).unwrap();
        assert_eq!(metrics.total_games(), 2);
    }
}
