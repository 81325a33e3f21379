//! Resolution of free-text player input into canonical routes.

use crate::{Resolved, RouteIndex};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of resolving player text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The text names exactly one canonical route.
    Resolved(Resolved),
    /// The text matches nothing.
    Unresolved,
}

impl Resolution {
    /// Returns the resolved route, if any.
    pub fn into_resolved(self) -> Option<Resolved> {
        match self {
            Resolution::Resolved(resolved) => Some(resolved),
            Resolution::Unresolved => None,
        }
    }

    /// Returns true if the text resolved.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Which lookup produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum MatchStrategy {
    ExactName,
    ExactId,
    CaseInsensitiveName,
}

/// Resolves player text against a [`RouteIndex`].
///
/// Strategies are tried in a fixed order and the first hit wins:
/// exact name, then exact id, then name ignoring case. Nothing looser
/// than case folding is attempted.
#[derive(Debug, Clone, Default)]
pub struct GuessResolver {
    index: RouteIndex,
}

impl GuessResolver {
    /// Creates a resolver over a built index.
    pub fn new(index: RouteIndex) -> Self {
        Self { index }
    }

    /// Returns the underlying index.
    pub fn index(&self) -> &RouteIndex {
        &self.index
    }

    /// Resolves trimmed player text.
    #[instrument(skip(self))]
    pub fn resolve(&self, raw: &str) -> Resolution {
        match self.matched(raw) {
            Some((resolved, strategy)) => {
                debug!(%strategy, id = %resolved.id, "Input resolved");
                Resolution::Resolved(resolved)
            }
            None => {
                debug!("Input matched no route");
                Resolution::Unresolved
            }
        }
    }

    fn matched(&self, raw: &str) -> Option<(Resolved, MatchStrategy)> {
        if raw.is_empty() {
            return None;
        }

        if let Some(id) = self.index.lookup_by_name(raw) {
            return Some((Resolved::new(id, raw), MatchStrategy::ExactName));
        }

        if let Some(name) = self.index.lookup_by_id(raw) {
            return Some((Resolved::new(raw, name), MatchStrategy::ExactId));
        }

        self.index
            .lookup_by_name_case_insensitive(raw)
            .map(|(id, name)| (Resolved::new(id, name), MatchStrategy::CaseInsensitiveName))
    }
}
