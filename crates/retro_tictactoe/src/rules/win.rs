//! Win detection.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 lines that decide the game: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its mark, scanning [`LINES`]
/// in order.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(mark) = board.get(a) {
            if board.get(b) == Cell::Occupied(mark) && board.get(c) == Cell::Occupied(mark) {
                return Some((mark, line));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, positions: &[Position], mark: Mark) {
        for pos in positions {
            board.set(*pos, Cell::Occupied(mark));
        }
    }

    #[test]
    fn no_winner_on_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn winner_top_row() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Mark::X,
        );
        let (mark, line) = winning_line(&board).unwrap();
        assert_eq!(mark, Mark::X);
        assert_eq!(
            line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn winner_column() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopCenter, Position::Center, Position::BottomCenter],
            Mark::O,
        );
        let (mark, _) = winning_line(&board).unwrap();
        assert_eq!(mark, Mark::O);
    }

    #[test]
    fn winner_diagonal() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Mark::O,
        );
        let (mark, line) = winning_line(&board).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(
            line,
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }

    #[test]
    fn no_winner_when_line_incomplete() {
        let mut board = Board::new();
        occupy(&mut board, &[Position::TopLeft, Position::TopCenter], Mark::X);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn mixed_marks_do_not_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        board.set(Position::TopCenter, Cell::Occupied(Mark::O));
        board.set(Position::TopRight, Cell::Occupied(Mark::X));
        assert_eq!(winning_line(&board), None);
    }

    // Unreachable through legal play, but the scan order is defined:
    // first completed line in LINES order wins ties.
    #[test]
    fn first_line_in_order_wins_ties() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Mark::X,
        );
        occupy(
            &mut board,
            &[Position::MiddleLeft, Position::Center, Position::MiddleRight],
            Mark::X,
        );
        let (_, line) = winning_line(&board).unwrap();
        assert_eq!(
            line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
