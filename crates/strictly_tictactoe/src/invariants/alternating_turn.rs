//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Mark, Phase};
use super::Invariant;

/// Invariant: marks alternate, X first.
///
/// History must show X, O, X, O, ... and the active mark must be the next
/// one in that pattern. After the final move of a round the active mark stays
/// on whoever made it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            mov.mark == expected
        });
        if !alternates {
            return false;
        }

        match (state.phase(), history.last()) {
            (Phase::Finished, Some(last)) => state.active_mark() == last.mark,
            _ => {
                let expected_next = if history.len() % 2 == 0 {
                    Mark::X
                } else {
                    Mark::O
                };
                state.active_mark() == expected_next
            }
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
