//! Line-based console driver.
//!
//! Reads commands from stdin, feeds them to the [`Orchestrator`], and
//! prints the events it publishes.

mod input;
mod orchestrator;
mod render;
mod scheduler;

pub use input::{Command, parse_command};
pub use orchestrator::{GameEvent, Orchestrator};
pub use render::render_event;
pub use scheduler::{Delay, NoDelay, TokioDelay};

use crate::config::GameConfig;
use crate::games::tictactoe::Mark;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

const MENU_PROMPT: &str = "Choose your mark: x (moves first) or o. q quits.";
const PLAY_HINT: &str = "Type 1-9 to play a cell, r to restart, m for menu, q to quit.";

/// Runs an interactive game on stdin/stdout until the user quits or input
/// ends.
///
/// With `preselected` set the menu is skipped and play starts at once.
#[instrument(skip(config))]
pub async fn run(config: GameConfig, preselected: Option<Mark>) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = render_event(&event) {
                println!("{}", text);
            }
        }
    });

    let mut orchestrator = Orchestrator::new(&config, TokioDelay, event_tx);
    let mut in_menu = true;

    match preselected {
        Some(mark) => {
            in_menu = false;
            println!("{}", PLAY_HINT);
            orchestrator.start_session(mark).await;
        }
        None => println!("{}", MENU_PROMPT),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let command = parse_command(&line);
        debug!(?command, in_menu, "Input received");

        match command {
            Some(Command::Quit) => break,
            Some(Command::Menu) => {
                orchestrator.back_to_menu();
                in_menu = true;
                println!("{}", MENU_PROMPT);
            }
            Some(Command::Choose(mark)) if in_menu => {
                in_menu = false;
                println!("{}", PLAY_HINT);
                orchestrator.start_session(mark).await;
            }
            Some(Command::Place(index)) if !in_menu => {
                if let Err(e) = orchestrator.human_move(index).await {
                    println!("Ignored: {}", e);
                }
            }
            Some(Command::Restart) if !in_menu => orchestrator.restart().await,
            _ if in_menu => println!("{}", MENU_PROMPT),
            _ => println!("{}", PLAY_HINT),
        }
    }

    info!("Leaving game");
    drop(orchestrator);
    printer.await.context("Event printer task failed")?;
    Ok(())
}
