//! Complementary marks invariant: one player holds X, the other O.

use super::super::GameState;
use super::Invariant;

/// Invariant: the two players never hold the same mark.
pub struct ComplementaryMarksInvariant;

impl Invariant<GameState> for ComplementaryMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state.player_one().mark() == state.player_two().mark().opponent()
    }

    fn description() -> &'static str {
        "Players hold complementary marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_defaults_hold() {
        assert!(ComplementaryMarksInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_swapped_marks_hold() {
        let state = GameState::new().with_player_one_mark(Mark::O);
        assert!(ComplementaryMarksInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_mark_violates() {
        let mut state = GameState::new();
        state.player_two = state.player_two.clone().with_mark(Mark::X);
        assert!(!ComplementaryMarksInvariant::holds(&state));
    }
}
