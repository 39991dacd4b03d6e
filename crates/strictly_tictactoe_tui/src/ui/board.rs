//! Board screen: status line and the 3x3 grid.

use super::center_rect;
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Mark, Phase, Position, Square, turn_label};

const CELL_WIDTH: u16 = 7;

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(5),    // Board
        ])
        .split(area);

    let state = app.state();
    let (status, style) = match state.outcome() {
        Some(outcome) => {
            let color = if outcome.is_tie() {
                Color::Magenta
            } else {
                Color::Green
            };
            (
                outcome.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            turn_label(state).unwrap_or_default(),
            Style::default().fg(Color::Yellow),
        ),
    };
    let status = Paragraph::new(status)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    draw_grid(frame, chunks[1], app);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let grid = center_rect(area, CELL_WIDTH * 3 + 2, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(grid);

    for row in 0..3 {
        frame.render_widget(grid_row(app, row), rows[row * 2]);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn grid_row(app: &App, row: usize) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(5);
    for col in 0..3 {
        if col > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        if let Some(pos) = Position::from_row_col(row, col) {
            spans.push(cell(app, pos));
        }
    }
    Paragraph::new(Line::from(spans))
}

fn cell(app: &App, pos: Position) -> Span<'static> {
    let state = app.state();
    let (symbol, mut style) = match state.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if state.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if state.phase() == Phase::InProgress && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(format!("{symbol:^width$}", width = CELL_WIDTH as usize), style)
}
