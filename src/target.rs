//! Target route selection for a new session.

use derive_more::Display;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use routle_core::Route;
use tracing::{debug, instrument};

/// How the hidden target is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSelection {
    /// Uniform draw; deterministic when seeded.
    Random {
        /// Seed for the draw, or entropy when absent.
        seed: Option<u64>,
    },
    /// A specific route id.
    Fixed(String),
}

/// The target could not be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TargetError {
    /// There is nothing to choose from.
    #[display("No candidate routes to choose from")]
    NoCandidates,

    /// The requested id is not a candidate.
    #[display("Route {:?} is not a candidate", _0)]
    UnknownId(String),
}

impl std::error::Error for TargetError {}

/// Picks the session target from the candidates.
#[instrument(skip(routes), fields(candidates = routes.len()))]
pub fn choose_target(routes: &[Route], selection: &TargetSelection) -> Result<Route, TargetError> {
    let chosen = match selection {
        TargetSelection::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
                None => ChaCha8Rng::from_entropy(),
            };
            routes.choose(&mut rng).ok_or(TargetError::NoCandidates)?
        }
        TargetSelection::Fixed(id) => routes
            .iter()
            .find(|route| route.id() == id)
            .ok_or_else(|| TargetError::UnknownId(id.clone()))?,
    };

    debug!(target_id = chosen.id(), "Target chosen");
    Ok(chosen.clone())
}
