//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    fn fill(board: &mut Board, xs: &[usize], os: &[usize]) {
        for &i in xs {
            board.set(Position::ALL[i], Square::Occupied(Mark::X));
        }
        for &i in os {
            board.set(Position::ALL[i], Square::Occupied(Mark::O));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        fill(&mut board, &[4], &[]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X X O / O O X / X O X
        fill(&mut board, &[0, 1, 5, 6, 8], &[2, 3, 4, 7]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // Full board where X completes the top row
        fill(&mut board, &[0, 1, 2, 5, 7], &[3, 4, 6, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
