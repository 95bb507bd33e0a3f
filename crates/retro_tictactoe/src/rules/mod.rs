//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to the rules. Rules
//! are separated from state storage so they can be exercised against
//! any board, not only boards reached through legal play.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::state::{GameState, Status};
use tracing::instrument;

/// Classifies the state: win, draw, or still in progress.
///
/// Lines are scanned in the fixed [`LINES`] order and the first
/// completed line wins ties. A full board with no completed line is a
/// draw.
#[instrument(skip(state))]
pub fn evaluate(state: &GameState) -> Status {
    if let Some((mark, line)) = win::winning_line(state.board()) {
        return Status::Won { mark, line };
    }
    if draw::is_full(state.board()) {
        return Status::Draw;
    }
    Status::InProgress
}
