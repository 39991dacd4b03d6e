//! Moves and the results of the engine's mutating operations.
//!
//! A rejected move is not an error: stale clicks from the frontend are
//! expected, so the engine reports them as [`MoveOutcome::Ignored`] and leaves
//! the state untouched. Only setup validation has an error type.

use super::{Mark, Phase, Player, Position, Seat};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// Moves are only accepted while a game is in progress.
    #[display("Moves are not accepted during {}", _0)]
    NotInProgress(Phase),

    /// The index is not on the board.
    #[display("Index {} is off the board", _0)]
    OutOfRange(usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// What happened to a call to `make_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and the other mark moves next.
    Continued(Move),
    /// The mark was placed and completed a line.
    Won {
        /// The winning move.
        last: Move,
        /// The player holding the winning mark.
        winner: Player,
    },
    /// The mark was placed and filled the board without a line.
    Tied(Move),
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if a mark was placed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// Returns the placed move, if any.
    pub fn applied_move(&self) -> Option<Move> {
        match self {
            MoveOutcome::Continued(m) | MoveOutcome::Tied(m) => Some(*m),
            MoveOutcome::Won { last, .. } => Some(*last),
            MoveOutcome::Ignored(_) => None,
        }
    }
}

/// Error returned by `start_game`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StartError {
    /// One or both names are too short or too long.
    #[display("Player names must be {min}-{max} characters long")]
    InvalidNames {
        /// Seats whose names failed validation.
        seats: Vec<Seat>,
        /// Shortest accepted name.
        min: usize,
        /// Longest accepted name.
        max: usize,
    },

    /// The game has already left setup.
    #[display("Game can only be started from setup (currently {phase})")]
    NotInSetup {
        /// Phase at the time of the call.
        phase: Phase,
    },
}
