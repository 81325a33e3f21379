//! Correctness invariant: every recorded flag agrees with the ids.

use super::super::{rules, Guess, RoundFinished, RoundInProgress, Route};
use super::Invariant;

/// Invariant: each guess is marked correct exactly when its id is the
/// target's id.
pub struct CorrectnessConsistentInvariant;

fn consistent(target: &Route, history: &[Guess]) -> bool {
    history
        .iter()
        .all(|guess| guess.correct() == rules::is_correct(guess.id(), target))
}

impl Invariant<RoundInProgress> for CorrectnessConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        consistent(round.target(), round.history())
    }

    fn description() -> &'static str {
        "Guess correctness matches target id"
    }
}

impl Invariant<RoundFinished> for CorrectnessConsistentInvariant {
    fn holds(round: &RoundFinished) -> bool {
        consistent(round.target(), round.history())
    }

    fn description() -> &'static str {
        "Guess correctness matches target id"
    }
}
