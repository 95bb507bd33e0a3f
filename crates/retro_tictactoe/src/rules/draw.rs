//! Draw detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no completed line is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
