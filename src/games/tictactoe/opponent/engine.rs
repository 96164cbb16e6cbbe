//! Move selection for the rule-based opponent.
//!
//! Three tiers are tried in order and the first one that produces a cell
//! wins:
//!
//! 1. **Critical** - complete an opponent line, otherwise block a human one.
//! 2. **Strategic** - the staged heuristic table, while fewer than five
//!    moves have been played.
//! 3. **Random** - any empty cell.
//!
//! Selection never mutates the session. The caller applies the returned
//! position through the normal move path.

use super::super::rules::WIN_PATTERNS;
use super::super::{Board, GameSession, Position, Square};
use super::strategy::{self, Response, STAGES};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, trace};

/// Tier that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Tier {
    /// Winning or blocking cell.
    #[display("critical")]
    Critical,
    /// Staged heuristic table.
    #[display("strategic")]
    Strategic,
    /// Uniform choice among empty cells.
    #[display("random")]
    Random,
}

/// A chosen cell and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Tier that produced it.
    pub tier: Tier,
}

/// Chooses the opponent's next cell.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(session, rng), fields(move_count = session.move_count()))]
pub fn decide<R: Rng + ?Sized>(session: &GameSession, rng: &mut R) -> Option<Decision> {
    if let Some(position) = critical_move(session) {
        debug!(%position, "Critical move");
        return Some(Decision {
            position,
            tier: Tier::Critical,
        });
    }

    if session.move_count() < STAGES
        && let Some(position) = strategic_move(session, rng)
        && session.board().is_empty(position)
    {
        debug!(%position, "Strategic move");
        return Some(Decision {
            position,
            tier: Tier::Strategic,
        });
    }

    let position = random_move(session.board(), &Position::ALL, rng)?;
    debug!(%position, "Random move");
    Some(Decision {
        position,
        tier: Tier::Random,
    })
}

/// Tier 1: a cell that wins now, or else a cell that stops the human
/// winning next turn.
///
/// Patterns are scanned in declared order. The first winning cell returns
/// immediately. Blocking cells do not stop the scan; when several human
/// threats exist the one found last is returned.
#[instrument(skip(session))]
pub fn critical_move(session: &GameSession) -> Option<Position> {
    let board = session.board();
    let human = Square::Occupied(session.human());
    let opponent = Square::Occupied(session.opponent());
    let mut block = None;

    for pattern in WIN_PATTERNS {
        let mut human_cells = 0;
        let mut opponent_cells = 0;
        let mut empty = Vec::with_capacity(3);
        for pos in pattern {
            match board.get(pos) {
                s if s == human => human_cells += 1,
                s if s == opponent => opponent_cells += 1,
                _ => empty.push(pos),
            }
        }

        if let &[gap] = empty.as_slice() {
            if opponent_cells == 2 {
                trace!(%gap, "Winning cell");
                return Some(gap);
            }
            if human_cells == 2 {
                trace!(%gap, "Blocking cell");
                block = Some(gap);
            }
        }
    }

    block
}

/// Tier 2: the first matching heuristic for the current move count.
///
/// A single-cell response is returned as is; the caller must still check
/// that it is empty. A multi-cell response is narrowed to its empty cells
/// and one is picked at random.
#[instrument(skip(session, rng))]
pub fn strategic_move<R: Rng + ?Sized>(session: &GameSession, rng: &mut R) -> Option<Position> {
    let response = strategy::first_match(
        session.trap(),
        session.move_count(),
        session.board(),
        session.human(),
    )?;

    match response {
        Response::Single(pos) => Some(pos),
        Response::AnyOf(cells) => random_move(session.board(), &cells, rng),
    }
}

/// Tier 3: a uniform choice among the empty cells of `candidates`.
pub fn random_move<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Position],
    rng: &mut R,
) -> Option<Position> {
    let empty: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    empty.choose(rng).copied()
}
