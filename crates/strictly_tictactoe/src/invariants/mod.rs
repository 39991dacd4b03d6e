//! State invariants.
//!
//! Each invariant is a property of a [`GameState`] that must hold after
//! every transition. The engine checks the full set on each commit in debug
//! builds; tests check them directly.

use super::GameState;

/// A property every reachable `S` satisfies.
pub trait Invariant<S> {
    /// `true` when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property statement.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Tuples of two to four invariants, checked in order.
pub trait InvariantSet<S> {
    /// Runs every member and collects the ones that fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod complementary_marks;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use complementary_marks::ComplementaryMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// Every invariant a [`GameState`] must satisfy.
pub type TicTacToeInvariants = (
    ComplementaryMarksInvariant,
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
    HistoryConsistentInvariant,
);

/// Runs the full invariant set, joining violations into one message.
pub fn check_state(state: &GameState) -> Result<(), String> {
    TicTacToeInvariants::check_all(state).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}
