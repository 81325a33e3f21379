//! Unsolved invariant: no correct guess while the round is live.

use super::super::RoundInProgress;
use super::Invariant;

/// Invariant: an in-progress round contains no correct guess.
///
/// A correct guess ends the round on the spot, which also means a round
/// can never hold more than one correct guess.
pub struct UnsolvedInvariant;

impl Invariant<RoundInProgress> for UnsolvedInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        round.history().iter().all(|guess| !guess.correct())
    }

    fn description() -> &'static str {
        "In-progress round has no correct guess"
    }
}
