//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line, in [`LINES`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).mark())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in cells {
            board.set(Position::ALL[index], Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let cells: Vec<_> = line.iter().map(|p| (p.to_index(), Mark::O)).collect();
            let board = board_with(&cells);
            assert_eq!(check_winner(&board), Some(Mark::O));
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_reported() {
        // X holds the top row and the left column; the row comes first.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}
