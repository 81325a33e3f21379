//! Phase-specific typestate structs for a guessing round.
//!
//! Each phase is its own type. A `RoundFinished` ALWAYS has an outcome,
//! and only a `RoundInProgress` can accept a guess.

use super::action::GuessError;
use super::contracts::{Contract, GuessContract};
#[cfg(debug_assertions)]
use super::invariants::{FinishedInvariants, InvariantSet};
use super::phases::Outcome;
use super::{rules, Guess, Resolved, Route};
use serde::Serialize;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - can accept guesses.
///
/// Invariants enforced by type and contract:
/// - target never changes
/// - fewer than `MAX_GUESSES` guesses, none of them correct
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundInProgress {
    pub(crate) target: Route,
    pub(crate) history: Vec<Guess>,
}

impl RoundInProgress {
    /// Starts a round against `target` with empty history.
    #[instrument(fields(target_id = %target.id()))]
    pub fn new(target: Route) -> Self {
        Self {
            target,
            history: Vec::new(),
        }
    }

    /// Applies a guess, consuming the round.
    ///
    /// Returns the continued round, or a finished one when the guess hits
    /// the target or spends the last attempt.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(guesses = self.history.len()))]
    pub fn guess(self, resolved: Resolved) -> Result<GuessResult, GuessError> {
        GuessContract::pre(&self, &resolved)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut round = self;
        let correct = rules::is_correct(&resolved.id, &round.target);
        round.history.push(Guess::new(resolved, correct));
        debug!(correct, guesses = round.history.len(), "Guess recorded");

        if correct {
            return Ok(GuessResult::Finished(round.finish(Outcome::Won)?));
        }

        if rules::is_exhausted(round.history.len()) {
            return Ok(GuessResult::Finished(round.finish(Outcome::Lost)?));
        }

        #[cfg(debug_assertions)]
        GuessContract::post(&before, &round)?;

        Ok(GuessResult::InProgress(round))
    }

    fn finish(self, outcome: Outcome) -> Result<RoundFinished, GuessError> {
        let finished = RoundFinished {
            target: self.target,
            history: self.history,
            outcome,
        };

        #[cfg(debug_assertions)]
        FinishedInvariants::check_all(&finished).map_err(|violations| {
            GuessError::InvariantViolation(format!(
                "Finished round inconsistent: {}",
                violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            ))
        })?;

        debug!(%outcome, guesses = finished.history.len(), "Round finished");
        Ok(finished)
    }

    /// Returns the target route.
    pub fn target(&self) -> &Route {
        &self.target
    }

    /// Returns the guesses made so far.
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Returns how many guesses are left.
    pub fn remaining(&self) -> usize {
        rules::remaining(self.history.len())
    }

    /// Replays guesses from a fresh round.
    ///
    /// Stops at the first guess that finishes the round; later guesses are
    /// ignored.
    #[instrument(skip(guesses), fields(count = guesses.len()))]
    pub fn replay(target: Route, guesses: &[Resolved]) -> Result<GuessResult, GuessError> {
        let mut round = RoundInProgress::new(target);

        for resolved in guesses {
            match round.guess(resolved.clone())? {
                GuessResult::InProgress(r) => round = r,
                GuessResult::Finished(r) => return Ok(GuessResult::Finished(r)),
            }
        }

        Ok(GuessResult::InProgress(round))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
///
/// The outcome is always present, and no method appends to history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundFinished {
    target: Route,
    history: Vec<Guess>,
    outcome: Outcome,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the target route.
    pub fn target(&self) -> &Route {
        &self.target
    }

    /// Returns the full guess history.
    pub fn history(&self) -> &[Guess] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of applying a guess.
#[derive(Debug)]
pub enum GuessResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}
