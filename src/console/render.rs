//! Text rendering of game events.

use super::orchestrator::GameEvent;

/// Formats an event for the terminal. Returns `None` for events with
/// nothing to show.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::SessionStarted { human, opponent } => Some(format!(
            "New game: you are {}, the computer is {}.",
            human, opponent
        )),
        GameEvent::OpponentThinking => Some("Computer is thinking...".to_string()),
        GameEvent::MoveMade {
            mark,
            position,
            board,
        } => Some(format!("{} played {}\n\n{}\n", mark, position, board.display())),
        GameEvent::TurnChanged(mark) => Some(format!("Next move: {}", mark)),
        GameEvent::Victory { winner, start, end } => Some(format!(
            "{} wins! ({} to {}) Type r to play again, m for menu, q to quit.",
            winner, start, end
        )),
        GameEvent::Draw => {
            Some("Draw! Type r to play again, m for menu, q to quit.".to_string())
        }
        GameEvent::Reset => None,
    }
}
