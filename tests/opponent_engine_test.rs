//! Tests for the opponent's tiered move selection.

use rand::rngs::mock::StepRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trap_tictactoe::{
    GameSession, Mark, MoveOutcome, Position, TRAP_CONFIGS, Tier, TrapConfig, critical_move,
    decide,
};

/// Starts a session and applies `indices` alternately from X.
fn play(human: Mark, trap: TrapConfig, indices: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    session.start(human, trap);
    for &index in indices {
        let pos = Position::from_index(index).expect("index in range");
        session.apply_move(pos).expect("legal setup move");
    }
    session
}

#[test]
fn test_opening_move_is_trap_start_with_fixed_rng() {
    for trap in TRAP_CONFIGS {
        let session = play(Mark::O, trap, &[]);
        let mut rng = StepRng::new(0, 0);
        let decision = decide(&session, &mut rng).expect("move available");
        assert_eq!(decision.position, trap.start);
    }
}

#[test]
fn test_center_opening_answered_on_trap_corner() {
    for trap in TRAP_CONFIGS {
        let session = play(Mark::X, trap, &[4]);
        let decision = decide(&session, &mut ChaCha8Rng::seed_from_u64(1)).expect("move");
        assert_eq!(decision.position, trap.start);
        assert!(Position::CORNERS.contains(&decision.position));
    }
}

#[test]
fn test_edge_opening_answered_on_center() {
    let session = play(Mark::X, TRAP_CONFIGS[3], &[1]);
    let decision = decide(&session, &mut ChaCha8Rng::seed_from_u64(1)).expect("move");
    assert_eq!(decision.position, Position::Center);
}

#[test]
fn test_human_pair_is_blocked() {
    // Human X on 0 and 1, opponent O on 4.
    let session = play(Mark::X, TRAP_CONFIGS[0], &[0, 4, 1]);
    assert_eq!(critical_move(&session), Some(Position::TopRight));
    let decision = decide(&session, &mut ChaCha8Rng::seed_from_u64(5)).expect("move");
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.tier, Tier::Critical);
}

#[test]
fn test_opponent_pair_overrides_stage_table() {
    // Opponent X on 0 and 1, human O on 4 and 8. Stage 4 would otherwise apply.
    let session = play(Mark::O, TRAP_CONFIGS[3], &[0, 4, 1, 8]);
    assert_eq!(session.move_count(), 4);
    let decision = decide(&session, &mut ChaCha8Rng::seed_from_u64(5)).expect("move");
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.tier, Tier::Critical);
}

#[test]
fn test_second_opponent_move_takes_inverse_after_center_reply() {
    for trap in TRAP_CONFIGS {
        let session = play(Mark::O, trap, &[trap.start.to_index(), 4]);
        let decision = decide(&session, &mut ChaCha8Rng::seed_from_u64(2)).expect("move");
        assert_eq!(decision.position, trap.inverse);
    }
}

#[test]
fn test_decision_does_not_mutate_session() {
    let session = play(Mark::X, TRAP_CONFIGS[1], &[0]);
    let before = session.clone();
    let _ = decide(&session, &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(session, before);
}

#[test]
fn test_full_games_always_get_a_legal_reply() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for game in 0..200 {
        let human = if game % 2 == 0 { Mark::X } else { Mark::O };
        let mut session = GameSession::new();
        session.start_with_random_trap(human, &mut rng);

        loop {
            let outcome = if session.is_opponent_turn() {
                let (pos, outcome) = session.apply_opponent_move(&mut rng).expect("legal reply");
                assert_eq!(session.history().last(), Some(&pos));
                outcome
            } else {
                let empty = Position::valid_moves(session.board());
                let pos = empty[rng.gen_range(0..empty.len())];
                session.apply_human_move(pos).expect("legal human move")
            };
            if outcome.is_terminal() {
                break;
            }
        }

        assert!(session.is_locked());
        assert!(session.move_count() <= 9);
    }
}

#[test]
fn test_opponent_never_misses_an_immediate_win() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for _ in 0..200 {
        let mut session = GameSession::new();
        session.start_with_random_trap(Mark::X, &mut rng);
        while !session.is_locked() {
            if session.is_opponent_turn() {
                let had_win = critical_move(&session)
                    .map(|pos| {
                        let mut probe = session.clone();
                        matches!(probe.apply_move(pos), Ok(MoveOutcome::Winner { .. }))
                    })
                    .unwrap_or(false);
                let (_, outcome) = session.apply_opponent_move(&mut rng).expect("reply");
                if had_win {
                    assert!(matches!(outcome, MoveOutcome::Winner { mark: Mark::O, .. }));
                }
            } else {
                let empty = Position::valid_moves(session.board());
                let pos = empty[rng.gen_range(0..empty.len())];
                session.apply_human_move(pos).expect("legal");
            }
        }
    }
}
