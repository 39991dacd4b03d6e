//! Lifecycle phase of a game session and the outcome of a finished round.

use super::Player;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle state of a session.
///
/// `Setup -> InProgress -> Finished`, `InProgress | Finished -> InProgress` on restart,
/// and any phase back to `Setup` on reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Phase {
    /// Players are entering names and choosing marks.
    #[default]
    Setup,
    /// Moves are being accepted.
    InProgress,
    /// A line was completed or the board filled up.
    Finished,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Board filled with no completed line.
    Tie,
}

impl Outcome {
    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} won!", player.name()),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}
