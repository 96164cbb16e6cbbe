//! Trap Tic-Tac-Toe library - tic-tac-toe against a rule-based opponent
//!
//! The opponent plays from a fixed heuristic table rather than a search:
//! it takes a win or blocks a threat when one exists, follows a staged
//! plan keyed to the move count and anchored on a randomly chosen corner,
//! and otherwise picks an empty cell at random.
//!
//! # Architecture
//!
//! - **Games**: board, rules, session state machine, and the opponent engine
//! - **Console**: orchestrator, scheduling port, and the terminal driver
//! - **Config**: TOML-backed settings
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use trap_tictactoe::{GameSession, Mark, MoveOutcome, Position, TRAP_CONFIGS};
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let mut session = GameSession::new();
//! session.start(Mark::X, TRAP_CONFIGS[0]);
//!
//! let outcome = session.apply_human_move(Position::Center).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continue(Mark::O));
//!
//! // Human took the center: the opponent answers on its trap corner.
//! let (reply, _) = session.apply_opponent_move(&mut rng).unwrap();
//! assert_eq!(reply, Position::TopLeft);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Driver
pub use console::{Delay, GameEvent, NoDelay, Orchestrator, TokioDelay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants::{Invariant, InvariantSet, SessionInvariants};
pub use games::tictactoe::opponent::{
    ConditionalMove, Response, STAGES, critical_move, decide, random_move, stage_rules,
    strategic_move,
};
pub use games::tictactoe::rules::{WIN_PATTERNS, check_winner};
pub use games::tictactoe::{
    Board, Decision, GameSession, Mark, MoveError, MoveOutcome, Position, Square, TRAP_CONFIGS,
    Tier, TrapConfig, WinLine,
};
