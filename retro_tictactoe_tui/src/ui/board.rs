//! Board rendering.

use crate::app::App;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use retro_tictactoe::{Board, Cell, Mark, Position, Status};

/// Renders the 3x3 grid, centered in the given area.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme().palette();
    let status = app.state().status();
    let winning = match status {
        Status::Won { line, .. } => Some(line),
        _ => None,
    };

    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let ctx = CellContext {
        board: app.state().board(),
        cursor: app.cursor(),
        terminal: status.is_terminal(),
        winning,
        palette,
    };

    render_row(f, rows[0], &ctx, 0);
    render_separator(f, rows[1], &palette);
    render_row(f, rows[2], &ctx, 3);
    render_separator(f, rows[3], &palette);
    render_row(f, rows[4], &ctx, 6);
}

struct CellContext<'a> {
    board: &'a Board,
    cursor: Position,
    terminal: bool,
    winning: Option<[Position; 3]>,
    palette: Palette,
}

fn render_row(f: &mut Frame, area: Rect, ctx: &CellContext, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (slot, offset) in [(0, 0), (2, 1), (4, 2)] {
        if let Some(pos) = Position::from_index(start + offset) {
            render_cell(f, cols[slot], ctx, pos);
        }
    }
    render_vertical_sep(f, cols[1], &ctx.palette);
    render_vertical_sep(f, cols[3], &ctx.palette);
}

fn render_cell(f: &mut Frame, area: Rect, ctx: &CellContext, pos: Position) {
    let palette = &ctx.palette;
    let (symbol, fg) = match ctx.board.get(pos) {
        Cell::Occupied(Mark::X) => ("X".to_string(), palette.x_mark),
        Cell::Occupied(Mark::O) => ("O".to_string(), palette.o_mark),
        // Vacant cells show their key hint; once the game ends they are
        // inert and render blank.
        Cell::Empty if ctx.terminal => (" ".to_string(), palette.hint),
        Cell::Empty => (format!("{}", pos.index() + 1), palette.hint),
    };

    let on_winning_line = ctx.winning.is_some_and(|line| line.contains(&pos));
    let style = if on_winning_line {
        Style::default()
            .fg(fg)
            .bg(palette.win)
            .add_modifier(Modifier::BOLD)
    } else if pos == ctx.cursor && !ctx.terminal {
        Style::default()
            .fg(palette.background)
            .bg(palette.cursor)
            .add_modifier(Modifier::BOLD)
    } else {
        let style = Style::default().fg(fg).bg(palette.background);
        if matches!(ctx.board.get(pos), Cell::Occupied(_)) {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    };

    // Pad with a leading blank line so the mark sits mid-cell.
    let text = vec![Line::default(), Line::from(symbol)];
    let cell = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(cell, area);
}

fn render_separator(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.grid).bg(palette.background));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new(vec![
        Line::from("│"),
        Line::from("│"),
        Line::from("│"),
    ])
    .style(Style::default().fg(palette.grid).bg(palette.background))
    .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
