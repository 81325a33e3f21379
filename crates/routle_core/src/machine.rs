//! The authoritative state machine for one guessing session.

use super::action::GuessError;
use super::phases::Outcome;
use super::reveal::reveal;
use super::typestate::{GuessResult, RoundFinished, RoundInProgress};
use super::{rules, Guess, Resolved, Route};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// What a submission did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    /// The guess missed and guesses remain.
    Continue {
        /// Guesses left after this one.
        remaining: usize,
    },
    /// The guess named the target.
    Won {
        /// Display name of the target.
        target_name: String,
    },
    /// The guess missed and was the last one.
    Lost {
        /// Display name of the target.
        target_name: String,
    },
    /// The session had already ended; nothing was recorded.
    AlreadyOver,
}

impl SubmitOutcome {
    /// Returns true if this submission ended the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmitOutcome::Won { .. } | SubmitOutcome::Lost { .. })
    }
}

/// Game state for one session, in either phase.
///
/// This is the single mutation point of a session: every visible effect
/// is derived from what [`submit`](Self::submit) returns and the history
/// snapshot afterwards. A new session gets a new machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum GameStateMachine {
    /// Accepting guesses.
    InProgress(RoundInProgress),
    /// Terminal.
    Finished(RoundFinished),
}

impl From<GuessResult> for GameStateMachine {
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::InProgress(round) => GameStateMachine::InProgress(round),
            GuessResult::Finished(round) => GameStateMachine::Finished(round),
        }
    }
}

impl GameStateMachine {
    /// Creates a session with a fixed target and empty history.
    #[instrument(fields(target_id = %target.id()))]
    pub fn new(target: Route) -> Self {
        info!("Session started");
        GameStateMachine::InProgress(RoundInProgress::new(target))
    }

    /// Rebuilds a session by replaying resolved guesses.
    #[instrument(skip(guesses), fields(target_id = %target.id(), count = guesses.len()))]
    pub fn replay(target: Route, guesses: &[Resolved]) -> Result<Self, GuessError> {
        RoundInProgress::replay(target, guesses).map(Self::from)
    }

    /// Records a resolved guess.
    ///
    /// Once the session is over every call is a no-op returning
    /// [`SubmitOutcome::AlreadyOver`].
    #[instrument(skip(self), fields(guesses = self.history().len()))]
    pub fn submit(&mut self, resolved: Resolved) -> Result<SubmitOutcome, GuessError> {
        let round = match self {
            GameStateMachine::InProgress(round) if !rules::is_exhausted(round.history().len()) => {
                round
            }
            _ => {
                debug!("Submission after session end ignored");
                return Ok(SubmitOutcome::AlreadyOver);
            }
        };

        let next = round.clone().guess(resolved)?;
        *self = next.into();

        let outcome = match self {
            GameStateMachine::InProgress(round) => SubmitOutcome::Continue {
                remaining: round.remaining(),
            },
            GameStateMachine::Finished(round) => {
                let target_name = round.target().name().to_string();
                info!(outcome = %round.outcome(), guesses = round.history().len(), "Session over");
                match round.outcome() {
                    Outcome::Won => SubmitOutcome::Won { target_name },
                    Outcome::Lost => SubmitOutcome::Lost { target_name },
                }
            }
        };

        Ok(outcome)
    }

    /// Returns the target route.
    pub fn target(&self) -> &Route {
        match self {
            GameStateMachine::InProgress(round) => round.target(),
            GameStateMachine::Finished(round) => round.target(),
        }
    }

    /// Returns a read-only snapshot of the guesses so far.
    pub fn history(&self) -> &[Guess] {
        match self {
            GameStateMachine::InProgress(round) => round.history(),
            GameStateMachine::Finished(round) => round.history(),
        }
    }

    /// Returns true once no more guesses are accepted.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStateMachine::Finished(_))
    }

    /// Returns the outcome, if the session is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStateMachine::InProgress(_) => None,
            GameStateMachine::Finished(round) => Some(round.outcome()),
        }
    }

    /// Returns how many guesses are left.
    pub fn remaining(&self) -> usize {
        match self {
            GameStateMachine::InProgress(round) => round.remaining(),
            GameStateMachine::Finished(_) => 0,
        }
    }

    /// Returns the reveal intensity for the current history.
    pub fn reveal(&self) -> f64 {
        reveal(self.history().len())
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            GameStateMachine::InProgress(round) => {
                format!("In progress. {} guesses left.", round.remaining())
            }
            GameStateMachine::Finished(round) => match round.outcome() {
                Outcome::Won => format!(
                    "Game over. Found \"{}\" on guess {}.",
                    round.target().name(),
                    round.history().len()
                ),
                Outcome::Lost => {
                    format!("Game over. The answer was \"{}\".", round.target().name())
                }
            },
        }
    }

    /// Serializes the session as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
