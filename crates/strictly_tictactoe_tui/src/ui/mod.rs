//! Stateless rendering: one screen per phase.

mod board;
mod setup;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use strictly_tictactoe::Phase;

/// Draws the screen matching the app's current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.state().phase() {
        Phase::Setup => "Tab: next field | Enter: start | Esc: quit",
        Phase::InProgress => "Arrows: move | Enter/Space or 1-9: play | q: quit",
        Phase::Finished => "r: restart | n: new players | q: quit",
    };

    match app.state().phase() {
        Phase::Setup => setup::draw(frame, chunks[1], app),
        Phase::InProgress | Phase::Finished => board::draw(frame, chunks[1], app),
    }

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

/// A `width` x `height` rectangle centred in `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
