//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines, scanned in this order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line. `start` and `end` are the outer cells, used to draw
/// the victory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// First cell of the pattern.
    pub start: Position,
    /// Middle cell of the pattern.
    pub mid: Position,
    /// Last cell of the pattern.
    pub end: Position,
}

/// Returns the first pattern fully held by `mark`, or `None`.
///
/// Only the mark that just moved needs checking: a move can only
/// complete a line for its own mover.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, mark: Mark) -> Option<WinLine> {
    WIN_PATTERNS
        .iter()
        .find(|line| line.iter().all(|&pos| board.is_marked_by(pos, mark)))
        .map(|&[start, mid, end]| WinLine { start, mid, end })
}
