//! Bots and the expected-value engine that prices leg bets.

mod agent;
mod ev;
mod ev_agent;
mod random;

pub use agent::Agent;
pub use ev::{
    futures, outcome_combinations, permutations, replay, ColorOdds, EvEnumerator, EvReport,
};
pub use ev_agent::EvAgent;
pub use random::RandomAgent;
