//! History consistency invariant: replaying the history rebuilds the board.

use super::super::{Board, GameSession, Mark, Square};
use super::Invariant;

/// Invariant: the board equals a replay of the move history.
///
/// Replaying also proves no square was ever written twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        let mut mark = Mark::FIRST;

        for &pos in session.history() {
            if !replayed.is_empty(pos) {
                return false;
            }
            replayed.set(pos, Square::Occupied(mark));
            mark = mark.other();
        }

        session.history().len() == session.move_count() && replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board matches replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, TRAP_CONFIGS};

    #[test]
    fn test_holds_after_moves() {
        let mut session = GameSession::new();
        session.start(Mark::O, TRAP_CONFIGS[2]);
        for pos in [Position::BottomLeft, Position::Center, Position::TopRight] {
            session.apply_move(pos).expect("legal");
        }
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_detects_overwritten_square() {
        let mut session = GameSession::new();
        session.start(Mark::X, TRAP_CONFIGS[0]);
        session.apply_move(Position::Center).expect("legal");
        session
            .board_mut()
            .set(Position::Center, Square::Occupied(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
