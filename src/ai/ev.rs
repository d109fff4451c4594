//! Exhaustive expected-value search over the dice left in the current leg.
//!
//! Every future is an ordering of the unrolled dice paired with one outcome
//! per die: `|R|! * 3^|R|` futures in total, at most `120 * 243 = 29_160`.
//! Each future is replayed on a private copy of the board through
//! [`resolve_move`], the same function live play uses.

use std::fmt;

use rayon::prelude::*;

use crate::error::BoardError;
use crate::game::{resolve_move, BetCards, Board, Color, MoveOutcome, Roll, Standing, NUM_COLORS};

/// Finish probabilities and bet value for one camel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOdds {
    pub color: Color,
    pub win: f64,
    pub second: f64,
    pub other: f64,
    /// Expected coins from taking this color's best ticket; `None` when the
    /// ticket tent is empty.
    pub ev: Option<f64>,
}

/// Result of one enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct EvReport {
    pub odds: [ColorOdds; NUM_COLORS],
    /// Number of simulated futures the probabilities are drawn from.
    pub futures: u64,
    /// Highest-EV color that still has tickets; ties go to the earlier color.
    pub recommendation: Option<Color>,
}

impl EvReport {
    fn from_tally(tally: &Tally, cards: &BetCards) -> Self {
        let total = tally.futures as f64;
        let odds = Color::ALL.map(|color| {
            let i = color.index();
            let win = tally.wins[i] as f64 / total;
            let second = tally.seconds[i] as f64 / total;
            let other = 1.0 - win - second;
            let ev = cards
                .top(color)
                .map(|value| win * value as f64 + second - other);
            ColorOdds {
                color,
                win,
                second,
                other,
                ev,
            }
        });

        let mut recommendation = None;
        let mut best = f64::NEG_INFINITY;
        for entry in &odds {
            if let Some(ev) = entry.ev {
                if recommendation.is_none() || ev > best {
                    best = ev;
                    recommendation = Some(entry.color);
                }
            }
        }

        EvReport {
            odds,
            futures: tally.futures,
            recommendation,
        }
    }

    pub fn odds(&self, color: Color) -> &ColorOdds {
        &self.odds[color.index()]
    }

    /// EV of the recommended bet
    pub fn best_ev(&self) -> Option<f64> {
        self.recommendation.and_then(|c| self.odds(c).ev)
    }
}

impl fmt::Display for EvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.odds {
            match entry.ev {
                Some(ev) => writeln!(
                    f,
                    "{} - P(Winning): {:.2}    P(Runner-Up): {:.2}    EV: {:.2}",
                    entry.color, entry.win, entry.second, ev
                )?,
                None => writeln!(f, "{} - Betting not applicable!", entry.color)?,
            }
        }
        match self.recommendation {
            Some(color) => write!(f, "\nYou should bet on {color}."),
            None => write!(f, "\nNo bets are left this leg."),
        }
    }
}

/// Win and runner-up counts per color. Tallies from disjoint sets of futures
/// combine by addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: [u64; NUM_COLORS],
    seconds: [u64; NUM_COLORS],
    futures: u64,
}

impl Tally {
    fn record(&mut self, standing: Standing) {
        self.futures += 1;
        self.wins[standing.winner.index()] += 1;
        if let Some(second) = standing.second {
            self.seconds[second.index()] += 1;
        }
    }

    fn merge(mut self, other: Tally) -> Tally {
        for i in 0..NUM_COLORS {
            self.wins[i] += other.wins[i];
            self.seconds[i] += other.seconds[i];
        }
        self.futures += other.futures;
        self
    }
}

/// Every ordering of `colors`, in lexicographic order of their input positions.
pub fn permutations(colors: &[Color]) -> Vec<Vec<Color>> {
    if colors.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &first) in colors.iter().enumerate() {
        let mut rest = colors.to_vec();
        rest.remove(i);
        for tail in permutations(&rest) {
            let mut order = Vec::with_capacity(colors.len());
            order.push(first);
            order.extend(tail);
            out.push(order);
        }
    }
    out
}

/// Every vector of `len` die outcomes, last position varying fastest.
pub fn outcome_combinations(len: usize) -> impl Iterator<Item = Vec<Roll>> {
    let faces = Roll::ALL.len();
    let total = faces.pow(len as u32);
    (0..total).map(move |mut index| {
        let mut rolls = vec![Roll::ALL[0]; len];
        for slot in rolls.iter_mut().rev() {
            *slot = Roll::ALL[index % faces];
            index /= faces;
        }
        rolls
    })
}

/// Cartesian product of roll orders and outcome vectors, borrowed from the
/// precomputed lists.
pub fn futures<'a>(
    orders: &'a [Vec<Color>],
    combos: &'a [Vec<Roll>],
) -> impl Iterator<Item = (&'a [Color], &'a [Roll])> + 'a {
    orders.iter().flat_map(move |order| {
        combos
            .iter()
            .map(move |rolls| (order.as_slice(), rolls.as_slice()))
    })
}

/// Play one future on a copy of `board` and report how the leg finishes.
pub fn replay(board: &Board, order: &[Color], rolls: &[Roll]) -> Result<Standing, BoardError> {
    let mut sim = board.clone();
    for (&color, &roll) in order.iter().zip(rolls) {
        if let MoveOutcome::Finished(standing) = resolve_move(&mut sim, color, roll)? {
            return Ok(standing);
        }
    }
    sim.standing()
        .ok_or_else(|| BoardError::InvariantViolation("no camels left on the track".into()))
}

/// Brute-force evaluator for leg bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvEnumerator {
    parallel: bool,
}

impl EvEnumerator {
    /// Enumerator that shards roll orders across the rayon thread pool.
    pub fn new() -> Self {
        EvEnumerator { parallel: true }
    }

    pub fn sequential() -> Self {
        EvEnumerator { parallel: false }
    }

    pub fn with_parallel(parallel: bool) -> Self {
        EvEnumerator { parallel }
    }

    /// Enumerate every future of the `remaining` dice from `board` and price
    /// each color's best ticket in `cards`.
    ///
    /// # Panics
    ///
    /// Panics if `remaining` is empty: a fully rolled leg has nothing left to
    /// enumerate, and callers must score it instead.
    pub fn evaluate(
        &self,
        board: &Board,
        remaining: &[Color],
        cards: &BetCards,
    ) -> Result<EvReport, BoardError> {
        assert!(
            !remaining.is_empty(),
            "EV enumeration needs at least one unrolled die"
        );

        let orders = permutations(remaining);
        let combos: Vec<Vec<Roll>> = outcome_combinations(remaining.len()).collect();
        let tally = if self.parallel {
            orders
                .par_iter()
                .map(|order| -> Result<Tally, BoardError> {
                    let mut tally = Tally::default();
                    for rolls in &combos {
                        tally.record(replay(board, order, rolls)?);
                    }
                    Ok(tally)
                })
                .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?
        } else {
            let mut tally = Tally::default();
            for (order, rolls) in futures(&orders, &combos) {
                tally.record(replay(board, order, rolls)?);
            }
            tally
        };

        Ok(EvReport::from_tally(&tally, cards))
    }
}

impl Default for EvEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
