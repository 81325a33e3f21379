//! Outcome invariant: a finished round's outcome follows from its history.

use super::super::{rules, Outcome, RoundFinished};
use super::Invariant;

/// Invariant: `Won` iff the last guess is correct; `Lost` iff every guess
/// was spent without a hit.
pub struct OutcomeConsistentInvariant;

impl Invariant<RoundFinished> for OutcomeConsistentInvariant {
    fn holds(round: &RoundFinished) -> bool {
        let history = round.history();
        let correct = history.iter().filter(|guess| guess.correct()).count();
        let last_correct = history.last().is_some_and(|guess| guess.correct());

        match round.outcome() {
            Outcome::Won => correct == 1 && last_correct,
            Outcome::Lost => correct == 0 && history.len() == rules::MAX_GUESSES,
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with history"
    }
}
