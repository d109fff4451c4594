/// Result of a single simulated game, indexed by agent rather than by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Index of the winning agent, `None` for a draw.
    pub winner: Option<usize>,
    pub coins: [i32; 2],
    pub legs: usize,
    pub turns: usize,
}

/// Running statistics over a batch of simulated games.
#[derive(Debug, Clone, Default)]
pub struct SimulationMetrics {
    results: Vec<GameResult>,
}

impl SimulationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, result: GameResult) {
        self.results.push(result);
    }

    pub fn total_games(&self) -> usize {
        self.results.len()
    }

    fn recent(&self, last_n: usize) -> impl Iterator<Item = &GameResult> {
        self.results.iter().rev().take(last_n)
    }

    fn window(&self, last_n: usize) -> usize {
        self.results.len().min(last_n)
    }

    /// Win rate for `agent` in the last N games.
    pub fn win_rate(&self, agent: usize, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let wins = self.recent(n).filter(|r| r.winner == Some(agent)).count();
        wins as f32 / n as f32
    }

    /// Draw rate in the last N games.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let draws = self.recent(n).filter(|r| r.winner.is_none()).count();
        draws as f32 / n as f32
    }

    /// Average final purse for `agent` over the last N games.
    pub fn average_coins(&self, agent: usize, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: i32 = self.recent(n).map(|r| r.coins[agent]).sum();
        total as f32 / n as f32
    }

    /// Average number of legs per game over the last N games.
    pub fn average_legs(&self, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self.recent(n).map(|r| r.legs).sum();
        total as f32 / n as f32
    }

    /// Average number of turns per game over the last N games.
    pub fn average_turns(&self, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self.recent(n).map(|r| r.turns).sum();
        total as f32 / n as f32
    }
}
