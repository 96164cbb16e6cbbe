//! Game session: board, turn, roles, and the single move-application path.

use super::action::{MoveError, MoveOutcome};
use super::invariants::{InvariantSet, SessionInvariants};
use super::opponent::{self, TrapConfig};
use super::rules::{self, WinLine};
use super::{Board, Mark, Position, Square};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// One game against the rule-based opponent.
///
/// A fresh session is locked until [`GameSession::start`] assigns the
/// human's mark. Once a line is completed or the ninth cell is filled the
/// session locks again and stays locked until reset or restarted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: Mark,
    human: Mark,
    opponent: Mark,
    move_count: usize,
    locked: bool,
    trap: TrapConfig,
    history: Vec<Position>,
}

impl GameSession {
    /// Creates an idle session that accepts no moves until started.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::FIRST,
            human: Mark::X,
            opponent: Mark::O,
            move_count: 0,
            locked: true,
            trap: TrapConfig::default(),
            history: Vec::new(),
        }
    }

    /// Starts a game on a cleared board with the given roles and trap.
    #[instrument(skip(self, trap), fields(trap_start = %trap.start))]
    pub fn start(&mut self, human: Mark, trap: TrapConfig) {
        self.reset();
        self.human = human;
        self.opponent = human.other();
        self.trap = trap;
        info!(opponent = %self.opponent, "Session started");
    }

    /// Starts a game with a randomly chosen trap layout.
    pub fn start_with_random_trap<R: Rng + ?Sized>(&mut self, human: Mark, rng: &mut R) {
        let trap = TrapConfig::choose(rng);
        self.start(human, trap);
    }

    /// Clears the board and counters and unlocks the session.
    ///
    /// Roles and trap layout are kept; the turn returns to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Mark::FIRST;
        self.move_count = 0;
        self.locked = false;
        self.history.clear();
        debug!("Session reset");
    }

    /// Places the current turn's mark at `pos`.
    ///
    /// This is the only path that mutates the board. It does not check
    /// whose turn it is; see [`GameSession::apply_human_move`] for the
    /// guarded entry point.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameLocked` if the game is over or not started,
    /// and `MoveError::SquareOccupied` if the cell is taken. Nothing
    /// changes on error.
    #[instrument(skip(self), fields(position = %pos, mark = %self.turn))]
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.locked {
            warn!("Move rejected: session locked");
            return Err(MoveError::GameLocked);
        }
        if !self.board.is_empty(pos) {
            warn!("Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mover = self.turn;
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(pos);
        self.move_count += 1;

        let outcome = if let Some(line) = self.check_winner() {
            self.locked = true;
            info!(winner = %mover, start = %line.start, end = %line.end, "Game won");
            MoveOutcome::Winner { mark: mover, line }
        } else if self.move_count == 9 {
            self.locked = true;
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            self.turn = mover.other();
            MoveOutcome::Continue(self.turn)
        };

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after move"
        );

        Ok(outcome)
    }

    /// Applies a move on behalf of the human player.
    ///
    /// # Errors
    ///
    /// As [`GameSession::apply_move`], plus `MoveError::WrongTurn` when it
    /// is the opponent's turn.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.locked {
            return Err(MoveError::GameLocked);
        }
        if self.turn != self.human {
            warn!(turn = %self.turn, "Move rejected: not the human's turn");
            return Err(MoveError::WrongTurn(self.human));
        }
        self.apply_move(pos)
    }

    /// Applies a human move given as a raw board index.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` for indices past 8, otherwise as
    /// [`GameSession::apply_human_move`].
    pub fn apply_human_index(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::try_from(index)?;
        self.apply_human_move(pos)
    }

    /// Chooses the opponent's cell without applying it.
    ///
    /// Returns `None` when the session is locked or it is not the
    /// opponent's turn.
    pub fn request_opponent_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<opponent::Decision> {
        if self.locked || self.turn != self.opponent {
            return None;
        }
        opponent::decide(self, rng)
    }

    /// Chooses and applies the opponent's move.
    ///
    /// # Errors
    ///
    /// `MoveError::GameLocked` if the game is over, `MoveError::WrongTurn`
    /// if it is the human's turn.
    #[instrument(skip(self, rng))]
    pub fn apply_opponent_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Position, MoveOutcome), MoveError> {
        if self.locked {
            return Err(MoveError::GameLocked);
        }
        if self.turn != self.opponent {
            return Err(MoveError::WrongTurn(self.opponent));
        }
        let decision = opponent::decide(self, rng).ok_or(MoveError::GameLocked)?;
        debug!(position = %decision.position, tier = %decision.tier, "Opponent chose move");
        let outcome = self.apply_move(decision.position)?;
        Ok((decision.position, outcome))
    }

    /// Returns the first line held by the mark whose turn it is.
    pub fn check_winner(&self) -> Option<WinLine> {
        rules::check_winner(&self.board, self.turn)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the mark to move (or the last mover once locked).
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Returns the opponent's mark.
    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    /// Returns how many moves have been applied.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns true while no move may be applied.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns true when the opponent should move next.
    pub fn is_opponent_turn(&self) -> bool {
        !self.locked && self.turn == self.opponent
    }

    /// Returns this session's trap layout.
    pub fn trap(&self) -> &TrapConfig {
        &self.trap
    }

    /// Returns the cells played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
