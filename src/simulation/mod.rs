//! Headless bot-versus-bot matches.

pub mod arena;
pub mod metrics;

pub use arena::{Arena, SimulationConfig};
pub use metrics::{GameResult, SimulationMetrics};
