//! Board positions and their index mapping.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A position on the board.
///
/// Positions map to indices 0-8 in row-major order: row is `index / 3`,
/// column is `index % 3`, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts the position to its board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// Zero-based row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Filters positions by board state, returning only the empty cells.
    pub fn open_cells(board: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    /// Human-friendly 1-based coordinates, as shown in the move history.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}, Col {}", self.row() + 1, self.col() + 1)
    }
}
