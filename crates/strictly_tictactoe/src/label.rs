//! Display strings derived from a snapshot.

use super::{GameState, Phase};

/// `"<name> won!"` or `"It's a tie!"` once the round is finished.
pub fn winner_label(state: &GameState) -> Option<String> {
    state.outcome().map(|outcome| outcome.to_string())
}

/// `"Current turn: <name> (<mark>)"` while the round is in progress.
pub fn turn_label(state: &GameState) -> Option<String> {
    (state.phase() == Phase::InProgress).then(|| {
        let player = state.active_player();
        format!("Current turn: {} ({})", player.name(), player.mark())
    })
}
