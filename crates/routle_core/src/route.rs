//! Core domain types: candidate routes, resolved input and recorded guesses.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A candidate transit route.
///
/// Routes are immutable once loaded for a session. The `id` is the only
/// key used for correctness; the `name` is what players see and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    id: String,
    name: String,
}

impl Route {
    /// Creates a route from its canonical id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns the canonical identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Player input that resolved to a canonical route.
///
/// Produced only by [`GuessResolver`](crate::GuessResolver); the state
/// machine never sees raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolved {
    /// Canonical route id.
    pub id: String,
    /// Canonical display name.
    pub name: String,
}

impl Resolved {
    /// Creates a resolved pair.
    #[instrument(skip_all)]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&Route> for Resolved {
    fn from(route: &Route) -> Self {
        Self::new(route.id(), route.name())
    }
}

/// One accepted submission and whether it hit the target.
///
/// Guesses are appended to history exactly once and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    id: String,
    name: String,
    correct: bool,
}

impl Guess {
    pub(crate) fn new(resolved: Resolved, correct: bool) -> Self {
        Self {
            id: resolved.id,
            name: resolved.name,
            correct,
        }
    }

    /// Returns the guessed route id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the guessed route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this guess named the target.
    pub fn correct(&self) -> bool {
        self.correct
    }
}
