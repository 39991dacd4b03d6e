//! The game state snapshot and its pure transitions.
//!
//! Every transition borrows the current state and returns a new one; nothing
//! here mutates a published value. The engine decides whether the new value
//! differs and publishes it.

use super::action::{IgnoredMove, Move, MoveOutcome, StartError};
use super::config::GameConfig;
use super::phases::{Outcome, Phase};
use super::position::Position;
use super::rules;
use super::types::{Board, Mark, Player, Seat, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete session state: players, board, turn and lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// First player.
    pub(crate) player_one: Player,
    /// Second player.
    pub(crate) player_two: Player,
    /// The board.
    pub(crate) board: Board,
    /// Mark written by the next accepted move.
    #[getter(skip)]
    pub(crate) active_mark: Mark,
    /// Lifecycle phase.
    #[getter(skip)]
    pub(crate) phase: Phase,
    /// Winner of the round, set only when a line was completed.
    #[getter(skip)]
    pub(crate) winner: Option<Player>,
    /// Set when the last start attempt had an invalid name.
    #[getter(skip)]
    pub(crate) name_error: bool,
    /// Moves of the current round, in order.
    #[getter(skip)]
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Fresh session: setup phase, unnamed players, player one on X.
    pub fn new() -> Self {
        Self::round(Player::unnamed(Mark::X), Player::unnamed(Mark::O), Phase::Setup)
    }

    fn round(player_one: Player, player_two: Player, phase: Phase) -> Self {
        Self {
            player_one,
            player_two,
            board: Board::new(),
            active_mark: Mark::X,
            phase,
            winner: None,
            name_error: false,
            history: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Mark written by the next accepted move.
    pub fn active_mark(&self) -> Mark {
        self.active_mark
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winner of a finished round, `None` while playing or on a tie.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    /// Whether the last start attempt failed name validation.
    pub fn name_error(&self) -> bool {
        self.name_error
    }

    /// Moves of the current round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player_one,
            Seat::Two => &self.player_two,
        }
    }

    /// Returns the seat whose player currently holds `mark`.
    pub fn seat_holding(&self, mark: Mark) -> Seat {
        if self.player_one.mark() == mark {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// Returns the player currently holding `mark`.
    pub fn player_holding(&self, mark: Mark) -> &Player {
        self.player(self.seat_holding(mark))
    }

    /// The player whose mark moves next, resolved by value on every call.
    pub fn active_player(&self) -> &Player {
        self.player_holding(self.active_mark)
    }

    /// Outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.phase, &self.winner) {
            (Phase::Finished, Some(winner)) => Some(Outcome::Winner(winner.clone())),
            (Phase::Finished, None) => Some(Outcome::Tie),
            _ => None,
        }
    }

    /// The completed line of a won round.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        if self.winner.is_some() {
            rules::winning_line(&self.board)
        } else {
            None
        }
    }

    /// Empty positions, or nothing when moves are not being accepted.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase == Phase::InProgress {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Copy with a new name for the player in `seat`.
    pub fn with_player_name(&self, seat: Seat, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        match seat {
            Seat::One => next.player_one = self.player_one.clone().with_name(name),
            Seat::Two => next.player_two = self.player_two.clone().with_name(name),
        }
        next
    }

    /// Copy where player one holds `mark` and player two the other one.
    pub fn with_player_one_mark(&self, mark: Mark) -> Self {
        let mut next = self.clone();
        next.player_one = self.player_one.clone().with_mark(mark);
        next.player_two = self.player_two.clone().with_mark(mark.opponent());
        next
    }

    /// Validates both names and enters play.
    ///
    /// On failure the returned state carries `name_error` and stays in setup.
    #[instrument(skip(self, config), fields(phase = %self.phase))]
    pub fn started(&self, config: &GameConfig) -> (Self, Result<(), StartError>) {
        if self.phase != Phase::Setup {
            return (
                self.clone(),
                Err(StartError::NotInSetup { phase: self.phase }),
            );
        }

        let invalid: Vec<Seat> = [Seat::One, Seat::Two]
            .into_iter()
            .filter(|&seat| !config.accepts_name(self.player(seat).name()))
            .collect();

        let mut next = self.clone();
        if invalid.is_empty() {
            next.phase = Phase::InProgress;
            next.name_error = false;
            next.active_mark = Mark::X;
            (next, Ok(()))
        } else {
            debug!(?invalid, "Name validation failed");
            next.name_error = true;
            let err = StartError::InvalidNames {
                seats: invalid,
                min: *config.name_min_len(),
                max: *config.name_max_len(),
            };
            (next, Err(err))
        }
    }

    /// Places the active mark at `index` and evaluates termination.
    ///
    /// Returns an unchanged copy with [`MoveOutcome::Ignored`] when the move
    /// is not accepted.
    #[instrument(skip(self), fields(phase = %self.phase, mark = %self.active_mark))]
    pub fn after_move(&self, index: usize) -> (Self, MoveOutcome) {
        if self.phase != Phase::InProgress {
            return self.ignored(IgnoredMove::NotInProgress(self.phase));
        }
        let Some(position) = Position::from_index(index) else {
            return self.ignored(IgnoredMove::OutOfRange(index));
        };
        if !self.board.is_empty(position) {
            return self.ignored(IgnoredMove::SquareOccupied(position));
        }

        let placed = Move::new(self.active_mark, position);
        let mut next = self.clone();
        next.board.set(position, Square::Occupied(placed.mark));
        next.history.push(placed);

        if let Some(mark) = rules::check_winner(&next.board) {
            let winner = next.player_holding(mark).clone();
            next.phase = Phase::Finished;
            next.winner = Some(winner.clone());
            return (
                next,
                MoveOutcome::Won {
                    last: placed,
                    winner,
                },
            );
        }

        if rules::is_draw(&next.board) {
            next.phase = Phase::Finished;
            next.winner = None;
            return (next, MoveOutcome::Tied(placed));
        }

        next.active_mark = placed.mark.opponent();
        (next, MoveOutcome::Continued(placed))
    }

    fn ignored(&self, reason: IgnoredMove) -> (Self, MoveOutcome) {
        debug!(%reason, "Move ignored");
        (self.clone(), MoveOutcome::Ignored(reason))
    }

    /// A new round with the same players.
    ///
    /// Setup has no validated players yet, so the copy is unchanged there.
    pub fn restarted(&self) -> Self {
        if self.phase == Phase::Setup {
            debug!("Restart ignored during setup");
            return self.clone();
        }
        Self::round(
            self.player_one.clone(),
            self.player_two.clone(),
            Phase::InProgress,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
