//! Errors raised while validating or applying a guess.

/// Error that can occur when validating or applying a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The round has no guesses left.
    #[display("Round is already over")]
    RoundOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {}
