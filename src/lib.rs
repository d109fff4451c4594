//! # Camel Up
//!
//! The Camel Up board game for two players in the terminal, with an
//! exhaustive expected-value engine that prices every leg bet.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: colors, stacked track, dice, betting, session
//! - [`ai`]: EV enumeration over the remaining dice, and bot agents
//! - [`simulation`]: Headless bot-versus-bot matches and their statistics
//! - [`ui`]: Terminal UI: menu, race view, leg and game results
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod simulation;
pub mod ui;
