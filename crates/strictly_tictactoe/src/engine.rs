//! Game engine: owns the session state and publishes snapshots.

use super::action::{MoveOutcome, StartError};
use super::config::GameConfig;
use super::invariants;
use super::label;
use super::position::Position;
use super::state::GameState;
use super::types::{Mark, Player, Seat};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Tic-tac-toe session engine.
///
/// Holds one [`GameState`] and replaces it wholesale on every mutation.
/// Observers either pull with [`snapshot`](Self::snapshot) or
/// [`subscribe`](Self::subscribe) to a watch channel that is notified only
/// when a mutation actually changed the state.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    snapshots: watch::Sender<GameState>,
}

impl GameEngine {
    /// Creates an engine with the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates an engine with the given configuration.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        info!("Creating game engine");
        let (snapshots, _) = watch::channel(GameState::new());
        Self { config, snapshots }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.snapshots.borrow().clone()
    }

    /// Returns a receiver that observes every committed change.
    ///
    /// The current state counts as already seen.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.snapshots.subscribe()
    }

    // ─────────────────────────────────────────────────────────────
    //  Setup
    // ─────────────────────────────────────────────────────────────

    /// Replaces the name of the player in `seat`. Validation waits for start.
    #[instrument(skip(self, name))]
    pub fn set_player_name(&mut self, seat: Seat, name: impl Into<String>) {
        let next = self.snapshots.borrow().with_player_name(seat, name);
        self.commit(next);
    }

    /// Gives player one `mark` and player two the other one.
    ///
    /// Accepted in any phase; a running board is not affected.
    #[instrument(skip(self))]
    pub fn set_player_one_mark(&mut self, mark: Mark) {
        let next = self.snapshots.borrow().with_player_one_mark(mark);
        self.commit(next);
    }

    /// Validates both names and moves from setup into play.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidNames`] when a name is too short or too
    /// long; the snapshot then carries `name_error`. Returns
    /// [`StartError::NotInSetup`] outside setup, leaving the state untouched.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> Result<(), StartError> {
        let (next, result) = self.snapshots.borrow().started(&self.config);
        self.commit(next);
        match &result {
            Ok(()) => info!("Game started"),
            Err(e) => debug!(error = %e, "Game not started"),
        }
        result
    }

    // ─────────────────────────────────────────────────────────────
    //  Play
    // ─────────────────────────────────────────────────────────────

    /// Places the active mark at board index `index` (0-8).
    ///
    /// Moves outside play, off the board, or onto an occupied square are
    /// ignored and leave the state unchanged.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) -> MoveOutcome {
        let (next, outcome) = self.snapshots.borrow().after_move(index);
        self.commit(next);
        match &outcome {
            MoveOutcome::Won { winner, .. } => {
                info!(winner = winner.name(), mark = %winner.mark(), "Game won")
            }
            MoveOutcome::Tied(_) => info!("Game tied"),
            _ => {}
        }
        outcome
    }

    /// Places the active mark at `position`.
    pub fn play(&mut self, position: Position) -> MoveOutcome {
        self.make_move(position.to_index())
    }

    /// Starts another round with the same players.
    ///
    /// Ignored during setup; names are only validated by
    /// [`start_game`](Self::start_game).
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) {
        let next = self.snapshots.borrow().restarted();
        if self.commit(next) {
            info!("Game restarted");
        }
    }

    /// Discards both players and returns to setup.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        if self.commit(GameState::new()) {
            info!("Game reset");
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived queries
    // ─────────────────────────────────────────────────────────────

    /// Winner or tie text once the round is finished.
    pub fn winner_label(&self) -> Option<String> {
        label::winner_label(&self.snapshots.borrow())
    }

    /// The player holding the active mark.
    pub fn active_player(&self) -> Player {
        self.snapshots.borrow().active_player().clone()
    }

    /// Swaps in `next` and notifies subscribers if it differs.
    fn commit(&mut self, next: GameState) -> bool {
        debug_assert!(
            invariants::check_state(&next).is_ok(),
            "Invariant violation: {:?}",
            invariants::check_state(&next)
        );
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`GameEngine`] shared between threads.
///
/// Mutations are serialised behind a mutex; each runs to completion before
/// the next is accepted. Snapshots can be read without taking the lock.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
    snapshots: watch::Receiver<GameState>,
}

impl SharedEngine {
    /// Wraps an engine for shared use.
    pub fn new(engine: GameEngine) -> Self {
        let snapshots = engine.subscribe();
        Self {
            inner: Arc::new(Mutex::new(engine)),
            snapshots,
        }
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut GameEngine) -> T) -> T {
        // A panic inside `f` cannot leave a half-applied state behind:
        // commits are whole-value swaps.
        let mut engine = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut engine)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.snapshots.borrow().clone()
    }

    /// Returns a receiver that observes every committed change.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.snapshots.clone()
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(GameEngine::new())
    }
}
