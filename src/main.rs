//! Trap Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use trap_tictactoe::{GameConfig, Mark};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mark,
            config,
            seed,
            delay_ms,
        } => run_play(mark, config, seed, delay_ms).await,
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game
#[instrument(skip_all)]
async fn run_play(
    mark: Option<Mark>,
    config_path: Option<std::path::PathBuf>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
) -> Result<()> {
    initialize_tracing();

    let mut config = match &config_path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = delay_ms {
        config = config.with_opponent_delay_ms(ms);
    }
    let preselected = match mark {
        Some(mark) => Some(mark),
        None if config_path.is_some() => Some(*config.human_mark()),
        None => None,
    };

    info!(?config, "Starting game");
    trap_tictactoe::console::run(config, preselected).await
}
