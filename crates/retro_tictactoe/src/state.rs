//! Game state and the move transition.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A mark placed at a position.
///
/// History entries are first-class values: they can be serialized for
/// replay and logged for debugging, independent of the board they were
/// applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }

    /// The position where the mark was placed.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The mark that was placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} → {}", self.mark, self.position)
    }
}

/// Outcome classification, re-derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: [Position; 3],
    },
    /// Board is full with no completed line.
    Draw,
}

impl Status {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("cell at {} is already occupied", _0)]
    Occupied(Position),
    /// The game has already ended.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Complete game state.
///
/// The active mark alternates strictly: X moves on even move counts,
/// O on odd. The history is append-only and the move count is derived
/// from it, so count, history length, and occupied cells always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    active_mark: Mark,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, empty history.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_mark: Mark::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn active_mark(&self) -> Mark {
        self.active_mark
    }

    /// Returns the move history in chronological order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Classifies the current state. Pure and idempotent.
    pub fn status(&self) -> Status {
        rules::evaluate(self)
    }

    /// Applies a move for the active mark, checked.
    ///
    /// On success the cell is claimed, the move is appended to the
    /// history, and the active mark flips. Rejection leaves the state
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is terminal and
    /// [`MoveError::Occupied`] for a cell that already holds a mark.
    #[instrument(skip(self), fields(position = ?position, mark = ?self.active_mark))]
    pub fn try_apply(&mut self, position: Position) -> Result<(), MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::Occupied(position));
        }

        self.board.set(position, Cell::Occupied(self.active_mark));
        self.history.push(Move::new(position, self.active_mark));
        self.active_mark = self.active_mark.opponent();
        Ok(())
    }

    /// Returns the successor state for a move, ignoring invalid input.
    ///
    /// An occupied cell or a finished game yields a state deeply equal
    /// to the current one. The interactive caller disables invalid
    /// cells before the call is made; this is the second layer.
    #[must_use]
    pub fn with_move(&self, position: Position) -> Self {
        let mut next = self.clone();
        match next.try_apply(position) {
            Ok(()) => next,
            Err(reason) => {
                debug!(%reason, ?position, "move ignored");
                next
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
