use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use camel_up::ai::{Agent, EvAgent, EvEnumerator, RandomAgent};
use camel_up::config::AppConfig;
use camel_up::simulation::Arena;

/// Pit two Camel Up bots against each other.
#[derive(Parser)]
#[command(name = "simulate", about = "Play Camel Up bots against each other")]
struct Cli {
    /// Agent for the first slot: random or ev
    #[arg(long, default_value = "ev")]
    first: String,

    /// Agent for the second slot: random or ev
    #[arg(long, default_value = "random")]
    second: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "camel_up.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run the EV engine on a single thread
    #[arg(long)]
    sequential: bool,
}

fn build_agent(kind: &str, seed: Option<u64>) -> Result<Box<dyn Agent>> {
    match kind {
        "random" => Ok(Box::new(match seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        })),
        "ev" => Ok(Box::new(EvAgent::new())),
        other => bail!("unknown agent '{}' (expected 'random' or 'ev')", other),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(games) = cli.games {
        app_config.simulation.games = games;
    }
    if cli.seed.is_some() {
        app_config.simulation.seed = cli.seed;
    }
    if cli.sequential {
        app_config.engine.parallel = false;
    }
    app_config.validate().context("validating configuration")?;

    let seed = app_config.simulation.seed;
    let mut agents = [
        build_agent(&cli.first, seed)?,
        build_agent(&cli.second, seed.map(|s| s.wrapping_add(1)))?,
    ];

    let enumerator: EvEnumerator = app_config.engine.enumerator();
    let arena = Arena::new(app_config.simulation.clone(), app_config.rules.clone())
        .with_enumerator(enumerator);
    arena.run(&mut agents).context("running simulation")?;
    Ok(())
}
