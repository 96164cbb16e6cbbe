//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the session and the
//! opponent engine share one definition of a line.

pub mod win;

pub use win::{WIN_PATTERNS, WinLine, check_winner};
