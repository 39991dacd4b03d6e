//! Setup screen: player names, mark selection, start button.

use super::center_rect;
use crate::app::App;
use crate::input::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Mark, Seat};

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 44, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player one
            Constraint::Length(3), // Player two
            Constraint::Length(1), // Mark
            Constraint::Length(3), // Start
            Constraint::Length(1), // Error
        ])
        .split(form);

    draw_name(frame, rows[0], app, Seat::One, Focus::PlayerOneName);
    draw_name(frame, rows[1], app, Seat::Two, Focus::PlayerTwoName);
    draw_mark(frame, rows[2], app);
    draw_start(frame, rows[3], app);

    if app.state().name_error() {
        let config = app.engine().config();
        let message = format!(
            "Player names must be {}-{} characters long",
            config.name_min_len(),
            config.name_max_len()
        );
        let error = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, rows[4]);
    }
}

fn focus_style(app: &App, field: Focus) -> Style {
    if app.focus() == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn draw_name(frame: &mut Frame, area: Rect, app: &App, seat: Seat, field: Focus) {
    let player = app.state().player(seat);
    let title = match seat {
        Seat::One => format!("Player one ({})", player.mark()),
        Seat::Two => format!("Player two ({})", player.mark()),
    };

    let mut border = focus_style(app, field);
    if app.state().name_error() && !app.engine().config().accepts_name(player.name()) {
        border = border.fg(Color::Red);
    }

    let mut text = player.name().to_string();
    if app.focus() == field {
        text.push('_');
    }

    let input = Paragraph::new(text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}

fn draw_mark(frame: &mut Frame, area: Rect, app: &App) {
    let chosen = app.state().player_one().mark();
    let option = |mark: Mark| {
        if mark == chosen {
            Span::styled(
                format!("[{mark}]"),
                Style::default().add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(format!(" {mark} "))
        }
    };

    let line = Line::from(vec![
        Span::styled("Player one plays: ", focus_style(app, Focus::Mark)),
        option(Mark::X),
        Span::raw(" "),
        option(Mark::O),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_start(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.focus() == Focus::Start {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let button = Paragraph::new("Start")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
