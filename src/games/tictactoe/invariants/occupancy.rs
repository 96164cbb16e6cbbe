//! Occupancy invariant: the move counter matches the board.

use super::super::GameSession;
use super::Invariant;

/// Invariant: exactly `move_count` squares are occupied.
pub struct OccupancyInvariant;

impl Invariant<GameSession> for OccupancyInvariant {
    fn holds(session: &GameSession) -> bool {
        session.board().occupied() == session.move_count() && session.move_count() <= 9
    }

    fn description() -> &'static str {
        "Occupied squares equal the move count"
    }
}
