//! Strictly Tic-Tac-Toe - two-player session engine
//!
//! A state machine for a 3x3 game between two named players: setup with
//! name validation and mark selection, alternating moves, win and tie
//! detection, restart and reset.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] is an immutable snapshot; every operation
//!   builds a new value.
//! - **Engine**: [`GameEngine`] owns the current snapshot and publishes it to
//!   subscribers through a watch channel.
//! - **Rules**: pure win/tie checks over a [`Board`].
//! - **Invariants**: properties checked after every commit in debug builds.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, Phase, Seat};
//!
//! let mut engine = GameEngine::new();
//! engine.set_player_name(Seat::One, "Amy");
//! engine.set_player_name(Seat::Two, "Bob");
//! engine.start_game().expect("names are valid");
//!
//! for index in [0, 3, 1, 4, 2] {
//!     engine.make_move(index);
//! }
//!
//! let state = engine.snapshot();
//! assert_eq!(state.phase(), Phase::Finished);
//! assert_eq!(engine.winner_label().as_deref(), Some("Amy won!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
pub mod invariants;
mod label;
mod phases;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{IgnoredMove, Move, MoveOutcome, StartError};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, SharedEngine};
pub use label::{turn_label, winner_label};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Mark, Player, Seat, Square};

/// Snapshot receiver handed out by [`GameEngine::subscribe`].
pub type SnapshotReceiver = tokio::sync::watch::Receiver<GameState>;
