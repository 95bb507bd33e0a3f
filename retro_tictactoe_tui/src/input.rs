//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use retro_tictactoe::Position;

/// Moves the cursor one cell in the arrow direction, clamped at the
/// board edges. Other keys leave the cursor where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
