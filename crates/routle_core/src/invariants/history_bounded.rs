//! History bound invariant: a round in progress always has a guess left.

use super::super::{rules, RoundInProgress};
use super::Invariant;

/// Invariant: an in-progress round has fewer than `MAX_GUESSES` guesses.
///
/// The guess that reaches the limit always finishes the round, so a live
/// round can never be full.
pub struct HistoryBoundedInvariant;

impl Invariant<RoundInProgress> for HistoryBoundedInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        !rules::is_exhausted(round.history().len())
    }

    fn description() -> &'static str {
        "In-progress history is shorter than the guess limit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Guess, GuessResult, Resolved, Route, MAX_GUESSES};

    #[test]
    fn test_holds_until_last_guess() {
        let mut round = RoundInProgress::new(Route::new("8", "Halsted"));
        for i in 0..MAX_GUESSES - 1 {
            assert!(HistoryBoundedInvariant::holds(&round));
            round = match round.guess(Resolved::new(format!("w{i}"), "Wrong")) {
                Ok(GuessResult::InProgress(next)) => next,
                other => panic!("Round should continue, got {other:?}"),
            };
        }
        assert!(HistoryBoundedInvariant::holds(&round));
    }

    #[test]
    fn test_full_history_violates() {
        let mut round = RoundInProgress::new(Route::new("8", "Halsted"));
        for i in 0..MAX_GUESSES {
            round
                .history
                .push(Guess::new(Resolved::new(format!("w{i}"), "Wrong"), false));
        }
        assert!(!HistoryBoundedInvariant::holds(&round));
    }
}
