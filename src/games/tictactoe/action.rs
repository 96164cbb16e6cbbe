//! Results of applying a move to a session.
//!
//! Applying a move returns a state transition instead of driving any
//! rendering. Observers (the console driver, tests) react to the returned
//! value.

use super::rules::WinLine;
use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Transition produced by a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues; carries the mark whose turn it is now.
    Continue(Mark),
    /// The mover completed a line. The session is now locked.
    Winner {
        /// Mark that won.
        mark: Mark,
        /// The completed line, for victory-line rendering.
        line: WinLine,
    },
    /// Ninth move without a line. The session is now locked.
    Draw,
}

impl MoveOutcome {
    /// Returns true if this outcome ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue(_))
    }
}

/// A rejected move. Rejection never mutates the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside 0..=8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is over or has not started.
    #[display("Game is locked")]
    GameLocked,

    /// It's not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Mark),
}
