//! Keyboard navigation helpers.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// Moves the board cursor one cell; edges stop the cursor.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps keys `1`-`9` to board indices 0-8, keypad order left to right.
pub fn digit_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}

/// Field with keyboard focus on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Player one's name.
    #[default]
    PlayerOneName,
    /// Player two's name.
    PlayerTwoName,
    /// Player one's mark selector.
    Mark,
    /// The start button.
    Start,
}

impl Focus {
    /// Next field, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::PlayerOneName => Self::PlayerTwoName,
            Self::PlayerTwoName => Self::Mark,
            Self::Mark => Self::Start,
            Self::Start => Self::PlayerOneName,
        }
    }

    /// Previous field, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::PlayerOneName => Self::Start,
            Self::PlayerTwoName => Self::PlayerOneName,
            Self::Mark => Self::PlayerTwoName,
            Self::Start => Self::Mark,
        }
    }
}
