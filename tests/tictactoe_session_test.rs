//! Tests for the session state machine.

use proptest::prelude::*;
use trap_tictactoe::{
    GameSession, InvariantSet, Mark, MoveError, MoveOutcome, Position, SessionInvariants,
    TRAP_CONFIGS, WinLine, check_winner,
};

fn started(human: Mark) -> GameSession {
    let mut session = GameSession::new();
    session.start(human, TRAP_CONFIGS[0]);
    session
}

#[test]
fn test_session_lifecycle() {
    let mut session = started(Mark::X);
    assert_eq!(session.turn(), Mark::X);
    assert_eq!(session.opponent(), Mark::O);

    let outcome = session.apply_human_move(Position::Center).expect("valid move");
    assert_eq!(outcome, MoveOutcome::Continue(Mark::O));
    assert_eq!(session.move_count(), 1);
    assert!(session.is_opponent_turn());
}

#[test]
fn test_human_cannot_move_for_opponent() {
    let mut session = started(Mark::X);
    session.apply_human_move(Position::Center).expect("valid move");
    assert_eq!(
        session.apply_human_move(Position::TopLeft),
        Err(MoveError::WrongTurn(Mark::X))
    );
    assert_eq!(session.move_count(), 1);
}

#[test]
fn test_occupied_square_rejected() {
    let mut session = started(Mark::X);
    session.apply_move(Position::Center).expect("valid move");
    assert_eq!(
        session.apply_move(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut session = started(Mark::X);
    assert_eq!(session.apply_human_index(42), Err(MoveError::OutOfBounds(42)));
}

#[test]
fn test_win_detection_reports_line_ends() {
    let mut session = started(Mark::O);
    // X: 0, 3 ; O: 2, 4, 6 completes the anti-diagonal.
    for pos in [Position::TopLeft, Position::TopRight, Position::MiddleLeft, Position::Center] {
        session.apply_move(pos).expect("valid move");
    }
    session.apply_move(Position::BottomRight).expect("valid move");
    let outcome = session.apply_move(Position::BottomLeft).expect("valid move");

    assert_eq!(
        outcome,
        MoveOutcome::Winner {
            mark: Mark::O,
            line: WinLine {
                start: Position::TopRight,
                mid: Position::Center,
                end: Position::BottomLeft,
            },
        }
    );
    assert!(session.is_locked());
    assert_eq!(session.check_winner().map(|l| l.end), Some(Position::BottomLeft));
}

#[test]
fn test_ninth_move_without_line_is_draw() {
    let mut session = started(Mark::X);
    let moves = [4, 0, 2, 6, 3, 5, 1, 7, 8];
    let mut outcome = None;
    for index in moves {
        outcome = Some(session.apply_move(Position::from_index(index).expect("index")).expect("valid"));
    }
    assert_eq!(outcome, Some(MoveOutcome::Draw));
    assert!(session.is_locked());
    assert_eq!(session.move_count(), 9);
    assert_eq!(session.apply_move(Position::Center), Err(MoveError::GameLocked));
}

#[test]
fn test_reset_after_win() {
    let mut session = started(Mark::X);
    for index in [0, 3, 1, 4, 2] {
        session.apply_move(Position::from_index(index).expect("index")).expect("valid");
    }
    assert!(session.is_locked());

    session.reset();
    assert!(!session.is_locked());
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.turn(), Mark::X);
    assert!(session.apply_human_move(Position::Center).is_ok());
}

proptest! {
    /// Rejected moves never change the session.
    #[test]
    fn prop_invalid_moves_do_not_mutate(indices in prop::collection::vec(0usize..12, 0..30)) {
        let mut session = started(Mark::X);
        for index in indices {
            let before = session.clone();
            let result = match Position::try_from(index) {
                Ok(pos) => session.apply_move(pos),
                Err(e) => Err(e),
            };
            match result {
                Ok(_) => {
                    prop_assert_eq!(session.move_count(), before.move_count() + 1);
                }
                Err(_) => {
                    prop_assert_eq!(&session, &before);
                }
            }
        }
    }

    /// A reported line always belongs to the mark that just moved, and a
    /// continuing game has no complete line for either mark.
    #[test]
    fn prop_winner_only_for_mover(indices in prop::collection::vec(0usize..9, 0..20)) {
        let mut session = started(Mark::O);
        for index in indices {
            let pos = Position::from_index(index).expect("index");
            let mover = session.turn();
            match session.apply_move(pos) {
                Ok(MoveOutcome::Winner { mark, line }) => {
                    prop_assert_eq!(mark, mover);
                    for cell in [line.start, line.mid, line.end] {
                        prop_assert!(session.board().is_marked_by(cell, mover));
                    }
                    prop_assert!(check_winner(session.board(), mover.other()).is_none());
                }
                Ok(MoveOutcome::Continue(next)) => {
                    prop_assert_eq!(next, mover.other());
                    prop_assert!(check_winner(session.board(), Mark::X).is_none());
                    prop_assert!(check_winner(session.board(), Mark::O).is_none());
                }
                Ok(MoveOutcome::Draw) => {
                    prop_assert_eq!(session.move_count(), 9);
                }
                Err(_) => {}
            }
            prop_assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }
}
