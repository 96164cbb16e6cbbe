//! Tic-tac-toe against a rule-based opponent.

mod action;
pub mod invariants;
pub mod opponent;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use opponent::{Decision, TRAP_CONFIGS, Tier, TrapConfig};
pub use position::Position;
pub use rules::WinLine;
pub use session::GameSession;
pub use types::{Board, Mark, Square};
