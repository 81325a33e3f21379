//! Contract-based validation for guesses.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(round, guess)} guess {Q(before, after)}`.

use super::action::GuessError;
use super::invariants::{InvariantSet, RoundInvariants};
use super::typestate::RoundInProgress;
use super::{rules, Resolved};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

/// Precondition: the round still has a guess left.
pub struct GuessesRemain;

impl GuessesRemain {
    /// Fails with [`GuessError::RoundOver`] once the limit is reached.
    #[instrument(skip(round))]
    pub fn check(round: &RoundInProgress) -> Result<(), GuessError> {
        if rules::is_exhausted(round.history().len()) {
            warn!(guesses = round.history().len(), "Guess after limit");
            Err(GuessError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Contract for guess actions.
///
/// Preconditions:
/// - A guess must remain
///
/// Postconditions:
/// - History grew by exactly one
/// - Round invariants hold
pub struct GuessContract;

impl Contract<RoundInProgress, Resolved> for GuessContract {
    fn pre(round: &RoundInProgress, _action: &Resolved) -> Result<(), GuessError> {
        GuessesRemain::check(round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), GuessError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(GuessError::InvariantViolation(format!(
                "Postcondition failed: history went from {} to {} guesses",
                before.history().len(),
                after.history().len()
            )));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Guess, GuessResult, Route, MAX_GUESSES};

    fn round() -> RoundInProgress {
        RoundInProgress::new(Route::new("8", "Halsted"))
    }

    #[test]
    fn test_precondition_fresh_round() {
        let action = Resolved::new("9", "Ashland");
        assert!(GuessContract::pre(&round(), &action).is_ok());
    }

    #[test]
    fn test_precondition_full_round() {
        let mut round = round();
        for i in 0..MAX_GUESSES {
            round
                .history
                .push(Guess::new(Resolved::new(format!("w{i}"), "Wrong"), false));
        }
        let action = Resolved::new("8", "Halsted");
        assert_eq!(GuessContract::pre(&round, &action), Err(GuessError::RoundOver));
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = round();
        let action = Resolved::new("9", "Ashland");

        match before.clone().guess(action) {
            Ok(GuessResult::InProgress(after)) => {
                assert!(GuessContract::post(&before, &after).is_ok());
            }
            other => panic!("Expected in-progress round, got {other:?}"),
        }
    }

    #[test]
    fn test_postcondition_detects_skipped_append() {
        let before = round();
        let after = before.clone();
        assert!(matches!(
            GuessContract::post(&before, &after),
            Err(GuessError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = round();
        let mut after = before.clone();
        after
            .history
            .push(Guess::new(Resolved::new("8", "Halsted"), true));

        let err = GuessContract::post(&before, &after).unwrap_err();
        assert!(err.to_string().contains("no correct guess"));
    }
}
