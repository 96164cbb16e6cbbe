//! Corner-anchored trap layouts.
//!
//! Each session picks one layout at random and keeps it until the next
//! start. The staged heuristics read their corner, line, column and
//! inverse cells from it, so different sessions play the same plan
//! rotated onto a different corner.

use super::super::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A trap layout anchored on one corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrapConfig {
    /// Corner the opponent opens on.
    pub start: Position,
    /// Cells along the anchor corner's row or column, nearest first.
    pub line: [Position; 2],
    /// Cells along the other edge from the anchor corner, nearest first.
    pub column: [Position; 2],
    /// Corner diagonally opposite `start`.
    pub inverse: Position,
}

/// The four layouts, one per corner.
pub const TRAP_CONFIGS: [TrapConfig; 4] = [
    TrapConfig {
        start: Position::TopLeft,
        line: [Position::TopCenter, Position::TopRight],
        column: [Position::MiddleLeft, Position::BottomLeft],
        inverse: Position::BottomRight,
    },
    TrapConfig {
        start: Position::TopRight,
        line: [Position::TopCenter, Position::TopLeft],
        column: [Position::MiddleRight, Position::BottomRight],
        inverse: Position::BottomLeft,
    },
    TrapConfig {
        start: Position::BottomLeft,
        line: [Position::MiddleLeft, Position::TopLeft],
        column: [Position::BottomCenter, Position::BottomRight],
        inverse: Position::TopRight,
    },
    TrapConfig {
        start: Position::BottomRight,
        line: [Position::BottomCenter, Position::BottomLeft],
        column: [Position::MiddleRight, Position::TopRight],
        inverse: Position::TopLeft,
    },
];

impl TrapConfig {
    /// Picks one of the four layouts uniformly at random.
    #[instrument(skip(rng))]
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let trap = TRAP_CONFIGS[rng.gen_range(0..TRAP_CONFIGS.len())];
        debug!(start = %trap.start, "Selected trap layout");
        trap
    }
}

impl Default for TrapConfig {
    fn default() -> Self {
        TRAP_CONFIGS[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_one_layout_per_corner() {
        let starts: HashSet<_> = TRAP_CONFIGS.iter().map(|t| t.start).collect();
        assert_eq!(starts.len(), 4);
        for corner in Position::CORNERS {
            assert!(starts.contains(&corner));
        }
    }

    #[test]
    fn test_inverse_is_opposite_corner() {
        for trap in TRAP_CONFIGS {
            assert_eq!(trap.start.to_index() + trap.inverse.to_index(), 8);
        }
    }

    #[test]
    fn test_layout_cells_are_distinct() {
        for trap in TRAP_CONFIGS {
            let cells: HashSet<_> = [
                trap.start,
                trap.line[0],
                trap.line[1],
                trap.column[0],
                trap.column[1],
                trap.inverse,
            ]
            .into_iter()
            .collect();
            assert_eq!(cells.len(), 6);
            assert!(!cells.contains(&Position::Center));
        }
    }

    #[test]
    fn test_choose_reaches_every_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let seen: HashSet<_> = (0..200).map(|_| TrapConfig::choose(&mut rng).start).collect();
        assert_eq!(seen.len(), 4);
    }
}
