//! Staged heuristic table for the opponent's first five turns.
//!
//! The table is indexed by the number of moves already played. Each stage
//! holds an ordered list of conditional moves; the first rule whose
//! conditions hold supplies the response.

use super::super::{Board, Mark, Position};
use super::trap::TrapConfig;
use Position::*;

/// Number of stages in the table (move counts 0 through 4).
pub const STAGES: usize = 5;

/// What a matching rule plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// One fixed cell. The caller still checks it is empty.
    Single(Position),
    /// Pick uniformly among whichever of these cells are empty.
    AnyOf(Vec<Position>),
}

/// A heuristic rule keyed on the human's occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalMove {
    /// Every one of these cells must belong to the human.
    pub all_of: Vec<Position>,
    /// If non-empty, at least one of these cells must belong to the human.
    pub at_least_one_of: Vec<Position>,
    /// Move to make when the rule matches.
    pub response: Response,
}

impl ConditionalMove {
    fn always(response: Response) -> Self {
        Self {
            all_of: Vec::new(),
            at_least_one_of: Vec::new(),
            response,
        }
    }

    fn when(all_of: &[Position], response: Response) -> Self {
        Self {
            all_of: all_of.to_vec(),
            at_least_one_of: Vec::new(),
            response,
        }
    }

    fn when_any(all_of: &[Position], at_least_one_of: &[Position], response: Response) -> Self {
        Self {
            all_of: all_of.to_vec(),
            at_least_one_of: at_least_one_of.to_vec(),
            response,
        }
    }

    /// Returns true if the human's marks satisfy this rule.
    pub fn matches(&self, board: &Board, human: Mark) -> bool {
        let owned = |pos: &Position| board.is_marked_by(*pos, human);
        let all_owned = self.all_of.iter().all(owned);
        let some_owned = self.at_least_one_of.is_empty() || self.at_least_one_of.iter().any(owned);
        all_owned && some_owned
    }
}

fn one(pos: Position) -> Response {
    Response::Single(pos)
}

fn any(cells: &[Position]) -> Response {
    Response::AnyOf(cells.to_vec())
}

/// Builds the rule list for `stage`, substituting the trap's cells.
///
/// Returns an empty list for stages past the table.
pub fn stage_rules(trap: &TrapConfig, stage: usize) -> Vec<ConditionalMove> {
    let TrapConfig {
        start,
        line,
        column,
        inverse,
    } = *trap;

    match stage {
        // Opponent opens.
        0 => vec![ConditionalMove::always(one(start))],
        // Human opened.
        1 => vec![
            ConditionalMove::when(&[Center], one(start)),
            ConditionalMove::always(one(Center)),
        ],
        2 => vec![
            ConditionalMove::when(&[Center], one(inverse)),
            ConditionalMove::when_any(&[], &line, one(column[1])),
            ConditionalMove::when_any(&[], &column, one(line[1])),
            ConditionalMove::always(any(&[column[1], line[1]])),
        ],
        3 => vec![
            ConditionalMove::when(&[TopLeft, BottomRight], any(&Position::CARDINALS)),
            ConditionalMove::when(&[TopRight, BottomLeft], any(&Position::CARDINALS)),
            ConditionalMove::when_any(&[Center], &Position::CORNERS, any(&[column[1], line[1]])),
            ConditionalMove::when_any(&[TopCenter], &[MiddleLeft, MiddleRight], any(&[TopLeft, TopRight])),
            ConditionalMove::when_any(
                &[BottomCenter],
                &[MiddleLeft, MiddleRight],
                any(&[BottomLeft, BottomRight]),
            ),
            ConditionalMove::when_any(&[TopCenter], &[BottomLeft, BottomRight], one(TopLeft)),
            ConditionalMove::when_any(&[BottomCenter], &[TopLeft, TopRight], one(BottomLeft)),
            ConditionalMove::when_any(&[MiddleLeft], &[TopRight, BottomRight], one(BottomLeft)),
            ConditionalMove::when_any(&[MiddleRight], &[TopLeft, BottomLeft], one(BottomRight)),
        ],
        4 => vec![
            ConditionalMove::when(&[TopCenter, MiddleLeft], one(Center)),
            ConditionalMove::when(&[TopCenter, MiddleRight], one(Center)),
            ConditionalMove::when(&[BottomCenter, MiddleLeft], one(Center)),
            ConditionalMove::when(&[BottomCenter, MiddleRight], one(Center)),
            ConditionalMove::when(&[line[0], column[0]], one(inverse)),
            ConditionalMove::always(any(&[line[1], column[1], inverse])),
        ],
        _ => Vec::new(),
    }
}

/// Returns the response of the first matching rule for `stage`.
pub fn first_match(
    trap: &TrapConfig,
    stage: usize,
    board: &Board,
    human: Mark,
) -> Option<Response> {
    stage_rules(trap, stage)
        .into_iter()
        .find(|rule| rule.matches(board, human))
        .map(|rule| rule.response)
}
