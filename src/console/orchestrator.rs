//! Drives a session between the human and the opponent.
//!
//! Every applied move is published as a [`GameEvent`] on an unbounded
//! channel. Renderers observe the events; nothing in the game core calls
//! into them.

use super::scheduler::Delay;
use crate::config::GameConfig;
use crate::games::tictactoe::{Board, GameSession, Mark, MoveError, MoveOutcome, Position};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A session started with these roles.
    SessionStarted {
        /// Human's mark.
        human: Mark,
        /// Opponent's mark.
        opponent: Mark,
    },
    /// The opponent is waiting out its thinking delay.
    OpponentThinking,
    /// A move was applied.
    MoveMade {
        /// Mark placed.
        mark: Mark,
        /// Cell played.
        position: Position,
        /// Board after the move.
        board: Board,
    },
    /// The turn passed to this mark.
    TurnChanged(Mark),
    /// A line was completed; draw from `start` to `end`.
    Victory {
        /// Winning mark.
        winner: Mark,
        /// First cell of the line.
        start: Position,
        /// Last cell of the line.
        end: Position,
    },
    /// The board filled without a line.
    Draw,
    /// The board was cleared.
    Reset,
}

/// Orchestrates play between a human and the rule-based opponent.
pub struct Orchestrator<D> {
    session: GameSession,
    rng: ChaCha8Rng,
    delay: D,
    opponent_delay: Duration,
    first_move_delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<D: Delay> Orchestrator<D> {
    /// Creates an orchestrator with an idle session.
    #[instrument(skip(delay, event_tx))]
    pub fn new(config: &GameConfig, delay: D, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            session: GameSession::new(),
            rng,
            delay,
            opponent_delay: config.opponent_delay(),
            first_move_delay: config.first_move_delay(),
            event_tx,
        }
    }

    /// Returns the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Starts a session with the human on `human`, choosing a fresh trap
    /// layout. If the opponent holds X it moves after the first-move delay.
    #[instrument(skip(self))]
    pub async fn start_session(&mut self, human: Mark) {
        self.session.start_with_random_trap(human, &mut self.rng);
        info!(human = %human, trap_start = %self.session.trap().start, "Starting session");
        self.emit(GameEvent::SessionStarted {
            human,
            opponent: self.session.opponent(),
        });
        self.emit(GameEvent::TurnChanged(self.session.turn()));

        if self.session.is_opponent_turn() {
            self.opponent_turn(self.first_move_delay).await;
        }
    }

    /// Applies the human's move at board index `index`, then lets the
    /// opponent answer if the game continues.
    ///
    /// Returns the outcome of the human's move.
    ///
    /// # Errors
    ///
    /// Returns the rejected move's `MoveError`. Rejections change nothing
    /// and publish no events.
    #[instrument(skip(self))]
    pub async fn human_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let mark = self.session.human();
        let position = Position::try_from(index)?;
        let outcome = self.session.apply_human_move(position)?;
        self.publish(mark, position, outcome);

        if self.session.is_opponent_turn() {
            self.opponent_turn(self.opponent_delay).await;
        }
        Ok(outcome)
    }

    /// Clears the board, keeping roles and trap, and plays on.
    ///
    /// X moves first after a reset, so when the opponent holds X its
    /// opening is scheduled after the first-move delay.
    #[instrument(skip(self))]
    pub async fn reset_session(&mut self) {
        self.session.reset();
        self.emit(GameEvent::Reset);
        self.emit(GameEvent::TurnChanged(self.session.turn()));

        if self.session.is_opponent_turn() {
            self.opponent_turn(self.first_move_delay).await;
        }
    }

    /// Clears the board and starts again with the same human mark and a
    /// fresh trap layout.
    #[instrument(skip(self))]
    pub async fn restart(&mut self) {
        let human = self.session.human();
        self.emit(GameEvent::Reset);
        self.start_session(human).await;
    }

    /// Abandons the session and returns to the idle state.
    #[instrument(skip(self))]
    pub fn back_to_menu(&mut self) {
        self.session = GameSession::new();
        self.emit(GameEvent::Reset);
    }

    /// Waits out `delay`, then applies the opponent's move if it is still
    /// the opponent's turn.
    async fn opponent_turn(&mut self, delay: Duration) -> Option<MoveOutcome> {
        self.emit(GameEvent::OpponentThinking);
        self.delay.wait(delay).await;

        if !self.session.is_opponent_turn() {
            debug!("Opponent move no longer pending, skipping");
            return None;
        }

        let mark = self.session.opponent();
        match self.session.apply_opponent_move(&mut self.rng) {
            Ok((position, outcome)) => {
                self.publish(mark, position, outcome);
                Some(outcome)
            }
            Err(e) => {
                debug!(error = %e, "Opponent move rejected");
                None
            }
        }
    }

    fn publish(&self, mark: Mark, position: Position, outcome: MoveOutcome) {
        self.emit(GameEvent::MoveMade {
            mark,
            position,
            board: self.session.board().clone(),
        });
        match outcome {
            MoveOutcome::Continue(next) => self.emit(GameEvent::TurnChanged(next)),
            MoveOutcome::Winner { mark, line } => self.emit(GameEvent::Victory {
                winner: mark,
                start: line.start,
                end: line.end,
            }),
            MoveOutcome::Draw => self.emit(GameEvent::Draw),
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}
