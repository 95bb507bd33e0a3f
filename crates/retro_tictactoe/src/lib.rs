//! Retro Tic Tac Toe rules engine.
//!
//! Pure game logic with no I/O: a 9-cell board, strict turn alternation,
//! win/draw evaluation over the 8 fixed lines, and an append-only move
//! history. A presentation layer owns a single [`GameState`] value and
//! replaces it wholesale on each accepted transition.
//!
//! # Example
//!
//! ```
//! use retro_tictactoe::{GameState, Mark, Position, Status};
//!
//! let mut game = GameState::new();
//! game.try_apply(Position::TopLeft)?;
//! assert_eq!(game.active_mark(), Mark::O);
//! assert_eq!(game.status(), Status::InProgress);
//! # Ok::<(), retro_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod state;
mod types;

pub mod rules;

pub use position::Position;
pub use state::{GameState, Move, MoveError, Status};
pub use types::{Board, Cell, Mark};
