//! Parsing of console input lines.

use crate::games::tictactoe::Mark;

/// A command typed by the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at board index 0-8 (typed as 1-9).
    Place(usize),
    /// Reset and start again with the same mark.
    Restart,
    /// Abandon the game and choose a mark again.
    Menu,
    /// Pick a mark from the menu.
    Choose(Mark),
    /// Leave the program.
    Quit,
}

/// Parses one input line. Returns `None` for anything unrecognized.
///
/// Digits are 1-based so the keys match the numbers drawn on empty cells.
/// Out-of-range digits still parse so the session can reject them.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Some(Command::Quit),
        "r" | "restart" => return Some(Command::Restart),
        "m" | "menu" => return Some(Command::Menu),
        _ => {}
    }

    if let Ok(n) = line.parse::<usize>() {
        return n.checked_sub(1).map(Command::Place);
    }

    line.parse::<Mark>().ok().map(Command::Choose)
}
