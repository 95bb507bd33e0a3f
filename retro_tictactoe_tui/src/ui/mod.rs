//! Stateless frame rendering: every widget is re-derived from the
//! current application state.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use retro_tictactoe::Status;

/// Renders a full frame.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = f.area();

    // Fill the whole frame so the theme background applies everywhere.
    let backdrop = Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    f.render_widget(backdrop, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Length(11), // Board
            Constraint::Length(3),  // Status
            Constraint::Min(3),     // Move history
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    draw_title(f, chunks[0], app);
    board::render_board(f, chunks[1], app);
    draw_status(f, chunks[2], app);
    draw_history(f, chunks[3], app);
    draw_footer(f, chunks[4], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let title = Paragraph::new("▓█ Retro Tic Tac Toe █▓")
        .style(
            Style::default()
                .fg(palette.accent)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let color = match app.state().status() {
        Status::InProgress => palette.accent,
        Status::Won { .. } => palette.win,
        Status::Draw => palette.text,
    };
    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(color).bg(palette.background))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.grid)),
        );
    f.render_widget(status, area);
}

/// Move list, shown once the first move is made. Scrolls so the latest
/// entries stay visible.
fn draw_history(f: &mut Frame, area: Rect, app: &App) {
    let lines = app.history_lines();
    if lines.is_empty() {
        return;
    }

    let palette = app.theme().palette();
    let visible = area.height.saturating_sub(2) as usize;
    let skipped = lines.len().saturating_sub(visible);

    let text: Vec<Line> = lines
        .iter()
        .skip(skipped)
        .map(|l| Line::from(l.as_str()))
        .collect();

    let history = Paragraph::new(text)
        .style(Style::default().fg(palette.text).bg(palette.background))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moves")
                .border_style(Style::default().fg(palette.grid)),
        );
    f.render_widget(history, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let help = format!(
        "arrows move | 1-9/enter place | r new game | t theme ({}) | q quit",
        app.theme().label()
    );
    let footer = Paragraph::new(help)
        .style(Style::default().fg(palette.hint).bg(palette.background))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
