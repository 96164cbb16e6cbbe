//! Command-line interface for trap_tictactoe.

use clap::{Parser, Subcommand};

/// Trap Tic-Tac-Toe - play against a corner-trapping opponent
#[derive(Parser, Debug)]
#[command(name = "trap_tictactoe")]
#[command(about = "Tic-tac-toe against a rule-based opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Your mark (x moves first). Skips the menu when given.
        #[arg(short, long)]
        mark: Option<trap_tictactoe::Mark>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Opponent thinking time in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}
