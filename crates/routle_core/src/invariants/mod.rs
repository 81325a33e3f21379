//! First-class invariants for a guessing round.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and checked after every transition in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so several invariants compose into one check.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod correctness_consistent;
pub mod history_bounded;
pub mod outcome_consistent;
pub mod unsolved;

pub use correctness_consistent::CorrectnessConsistentInvariant;
pub use history_bounded::HistoryBoundedInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use unsolved::UnsolvedInvariant;

/// All invariants of a round still in progress.
pub type RoundInvariants = (
    HistoryBoundedInvariant,
    UnsolvedInvariant,
    CorrectnessConsistentInvariant,
);

/// All invariants of a finished round.
pub type FinishedInvariants = (CorrectnessConsistentInvariant, OutcomeConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuessResult, Resolved, Route, RoundInProgress};

    fn target() -> Route {
        Route::new("8", "Halsted")
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_round() {
        let round = RoundInProgress::new(target());
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let guesses = vec![Resolved::new("9", "Ashland"), Resolved::new("20", "Madison")];

        match RoundInProgress::replay(target(), &guesses) {
            Ok(GuessResult::InProgress(round)) => {
                assert!(RoundInvariants::check_all(&round).is_ok());
            }
            other => panic!("Expected in-progress round, got {other:?}"),
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut round = RoundInProgress::new(target());
        // Record a hit on the target as a miss.
        round
            .history
            .push(crate::Guess::new(Resolved::new("8", "Halsted"), false));

        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <CorrectnessConsistentInvariant as Invariant<RoundInProgress>>::description()
        );
    }

    #[test]
    fn test_finished_set_holds_after_win() {
        let guesses = vec![Resolved::new("8", "Halsted")];

        match RoundInProgress::replay(target(), &guesses) {
            Ok(GuessResult::Finished(round)) => {
                assert!(FinishedInvariants::check_all(&round).is_ok());
            }
            other => panic!("Expected finished round, got {other:?}"),
        }
    }
}
