//! Outcome of a finished round.

use serde::{Deserialize, Serialize};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// The player named the target.
    Won,
    /// The player ran out of guesses.
    Lost,
}

impl Outcome {
    /// Returns true if the player won.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}
