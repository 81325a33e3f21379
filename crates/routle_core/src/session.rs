//! Session readiness and the input-to-view flow.
//!
//! A [`Session`] is `NotReady` until the candidate routes and the target
//! are known. Submissions before then are rejected instead of being scored
//! against a missing target.

use super::action::GuessError;
use super::index::{IndexError, RouteIndex};
use super::machine::{GameStateMachine, SubmitOutcome};
use super::resolver::{GuessResolver, Resolution};
use super::{Guess, Route};
use derive_more::{Display, From};
use tracing::{debug, info, instrument, warn};

/// Receives the background reveal intensity.
pub trait RevealSink {
    /// Sets the reveal intensity, always within `[0, 1]`.
    fn set_reveal(&mut self, intensity: f64);
}

/// Receives the guess history after each accepted submission.
pub trait ProgressSink {
    /// Shows the current guess history.
    fn show_history(&mut self, history: &[Guess]);
}

/// Everything a session pushes updates into.
pub trait GameView: RevealSink + ProgressSink {}

impl<T: RevealSink + ProgressSink> GameView for T {}

/// Input that could not become a guess. The session is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    /// Nothing was typed.
    #[display("Type a route name or id")]
    Empty,

    /// The text matches no route.
    #[display("Pick a route from the list")]
    Unresolved(String),
}

impl std::error::Error for ValidationError {}

/// Why a submission was not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum TurnError {
    /// No target has been chosen yet.
    #[display("The game is not ready yet")]
    #[from(ignore)]
    NotReady,

    /// The input was empty or unresolved.
    #[display("{}", _0)]
    Validation(ValidationError),

    /// The state machine refused the guess.
    #[display("{}", _0)]
    Guess(GuessError),
}

impl std::error::Error for TurnError {}

/// Why a session could not start.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The candidate routes could not be indexed.
    #[display("{}", _0)]
    Index(IndexError),

    /// The target is not among the candidates.
    #[display("Target route {:?} is not a candidate", _0)]
    #[from(ignore)]
    UnknownTarget(String),
}

impl std::error::Error for SessionError {}

/// One play session, explicitly ready or not.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// Waiting for routes and a target.
    #[default]
    NotReady,
    /// Accepting input.
    Ready {
        /// Resolver over the candidate routes.
        resolver: GuessResolver,
        /// Authoritative game state.
        machine: GameStateMachine,
    },
}

impl Session {
    /// Creates a session that is not ready yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ready session from candidates and a chosen target.
    #[instrument(skip(routes), fields(target_id = %target.id()))]
    pub fn start(routes: Vec<Route>, target: Route) -> Result<Self, SessionError> {
        let index = RouteIndex::from_routes(routes)?;

        if index.lookup_by_id(target.id()).is_none() {
            warn!("Target missing from candidates");
            return Err(SessionError::UnknownTarget(target.id().to_string()));
        }

        info!(candidates = index.len(), "Session ready");
        Ok(Session::Ready {
            resolver: GuessResolver::new(index),
            machine: GameStateMachine::new(target),
        })
    }

    /// Replaces this session wholesale with a freshly started one.
    ///
    /// On failure the current session is left untouched.
    #[instrument(skip(self, routes), fields(target_id = %target.id()))]
    pub fn begin(&mut self, routes: Vec<Route>, target: Route) -> Result<(), SessionError> {
        *self = Self::start(routes, target)?;
        Ok(())
    }

    /// Returns true once routes and target are loaded.
    pub fn is_ready(&self) -> bool {
        matches!(self, Session::Ready { .. })
    }

    /// Returns the resolver, if ready.
    pub fn resolver(&self) -> Option<&GuessResolver> {
        match self {
            Session::NotReady => None,
            Session::Ready { resolver, .. } => Some(resolver),
        }
    }

    /// Returns the state machine, if ready.
    pub fn machine(&self) -> Option<&GameStateMachine> {
        match self {
            Session::NotReady => None,
            Session::Ready { machine, .. } => Some(machine),
        }
    }

    /// Returns the guess history; empty when not ready.
    pub fn history(&self) -> &[Guess] {
        match self.machine() {
            Some(machine) => machine.history(),
            None => &[],
        }
    }

    /// Returns true if a ready session has ended.
    pub fn is_over(&self) -> bool {
        self.machine().is_some_and(GameStateMachine::is_over)
    }

    /// Pushes the current history and reveal into `view`.
    pub fn present(&self, view: &mut impl GameView) {
        let history = self.history();
        view.show_history(history);
        view.set_reveal(super::reveal(history.len()));
    }

    /// Handles one raw submission from the input surface.
    ///
    /// Trims the text, resolves it and submits it. The view is updated
    /// only when a guess was actually recorded.
    #[instrument(skip(self, view))]
    pub fn submit_text(
        &mut self,
        raw: &str,
        view: &mut impl GameView,
    ) -> Result<SubmitOutcome, TurnError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ValidationError::Empty.into());
        }

        let Session::Ready { resolver, machine } = self else {
            debug!("Submission before session ready");
            return Err(TurnError::NotReady);
        };

        let resolved = match resolver.resolve(text) {
            Resolution::Resolved(resolved) => resolved,
            Resolution::Unresolved => {
                return Err(ValidationError::Unresolved(text.to_string()).into());
            }
        };

        let outcome = machine.submit(resolved)?;
        if outcome != SubmitOutcome::AlreadyOver {
            self.present(view);
        }
        Ok(outcome)
    }
}
