//! Game rules for route guessing.
//!
//! Pure functions over guess counts and ids. Kept apart from the round
//! types so contracts and invariants can compose them.

use crate::Route;
use tracing::instrument;

/// Number of guesses a player gets per round.
pub const MAX_GUESSES: usize = 5;

/// Returns true if the guessed id names the target.
///
/// Only ids are compared, so differences in display-name formatting can
/// never change the verdict.
#[instrument(skip(target), fields(target_id = %target.id()))]
pub fn is_correct(guess_id: &str, target: &Route) -> bool {
    guess_id == target.id()
}

/// Returns how many guesses are left after `history_len` have been made.
pub fn remaining(history_len: usize) -> usize {
    MAX_GUESSES.saturating_sub(history_len)
}

/// Returns true once no guesses are left.
pub fn is_exhausted(history_len: usize) -> bool {
    history_len >= MAX_GUESSES
}
