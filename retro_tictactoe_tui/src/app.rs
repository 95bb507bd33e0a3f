//! Application state and logic.

use crate::input;
use crate::theme::Theme;
use crossterm::event::KeyCode;
use retro_tictactoe::{GameState, Position, Status};
use tracing::debug;

/// Main application state.
///
/// Owns the single [`GameState`] and replaces it wholesale on each
/// accepted transition; the board is never mutated in place.
pub struct App {
    state: GameState,
    cursor: Position,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Creates a new application: fresh game, cursor on the center
    /// cell, light theme.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            theme: Theme::Light,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Active color theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translates a key press into a game or shell operation.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.cursor = pos;
                    self.activate(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Applies a move at the given cell. An occupied cell or a finished
    /// game leaves the state untouched, with no visible effect.
    fn activate(&mut self, position: Position) {
        debug!(?position, "activating cell");
        self.state = self.state.with_move(position);
    }

    /// Replaces the game with a fresh one.
    pub fn reset(&mut self) {
        debug!("restarting game");
        self.state = GameState::new();
    }

    /// Flips between the light and dark themes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = ?self.theme, "theme switched");
    }

    /// Status line for the current state.
    pub fn status_line(&self) -> String {
        match self.state.status() {
            Status::InProgress => format!("Player {}'s turn", self.state.active_mark()),
            Status::Won { mark, .. } => format!("Player {} wins!", mark),
            Status::Draw => "It's a draw".to_string(),
        }
    }

    /// One display line per history entry, latest last.
    pub fn history_lines(&self) -> Vec<String> {
        self.state
            .history()
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("{}. {}", i + 1, mv))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retro_tictactoe::Mark;

    fn win_for_x(app: &mut App) {
        // X takes the top row
        for key in ['1', '5', '2', '6', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
    }

    #[test]
    fn fresh_app_reports_x_turn() {
        let app = App::new();
        assert_eq!(app.status_line(), "Player X's turn");
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn status_line_after_win() {
        let mut app = App::new();
        win_for_x(&mut app);
        assert_eq!(app.status_line(), "Player X wins!");
    }

    #[test]
    fn status_line_after_draw() {
        let mut app = App::new();
        for key in ['1', '5', '3', '2', '4', '6', '8', '7', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.status_line(), "It's a draw");
    }

    #[test]
    fn history_lines_are_numbered_and_one_based() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('7'));
        app.handle_key(KeyCode::Char('5'));

        assert_eq!(
            app.history_lines(),
            vec![
                "1. Player X → Row 3, Col 1".to_string(),
                "2. Player O → Row 2, Col 2".to_string(),
            ]
        );
    }

    #[test]
    fn activating_occupied_cell_changes_nothing() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));

        let before = app.state().clone();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.state(), &before);
        assert_eq!(app.state().active_mark(), Mark::O);
    }

    #[test]
    fn cells_are_inert_after_the_game_ends() {
        let mut app = App::new();
        win_for_x(&mut app);

        let before = app.state().clone();
        app.handle_key(KeyCode::Char('4'));
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state().move_count(), 1);
        assert!(!app.state().board().is_empty(Position::Center));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut app = App::new();
        win_for_x(&mut app);
        app.handle_key(KeyCode::Char('r'));

        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.status_line(), "Player X's turn");
    }

    #[test]
    fn theme_toggles_and_defaults_to_light() {
        let mut app = App::new();
        assert_eq!(app.theme(), Theme::Light);
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Dark);
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn quit_keys_raise_the_flag() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
