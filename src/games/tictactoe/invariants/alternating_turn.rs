//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameSession, Mark};
use super::Invariant;

/// Invariant: marks alternate starting with X.
///
/// X has either as many marks as O or exactly one more. While the game is
/// live, the mark to move is X exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Mark::X);
        let o = session.board().count(Mark::O);

        if x != o && x != o + 1 {
            return false;
        }
        if session.is_locked() {
            return true;
        }

        let expected = if x == o { Mark::X } else { Mark::O };
        session.turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square, TRAP_CONFIGS};

    #[test]
    fn test_holds_after_each_move() {
        let mut session = GameSession::new();
        session.start(Mark::X, TRAP_CONFIGS[0]);
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            session.apply_move(pos).expect("legal");
            assert!(AlternatingTurnInvariant::holds(&session));
        }
    }

    #[test]
    fn test_detects_double_move() {
        let mut session = GameSession::new();
        session.start(Mark::X, TRAP_CONFIGS[0]);
        session.apply_move(Position::Center).expect("legal");
        session
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Mark::X));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
