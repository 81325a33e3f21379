//! Routle core - pure route-guessing game logic.
//!
//! A hidden target route is fixed at session start and the player gets
//! [`MAX_GUESSES`] attempts to name it.
//!
//! # Architecture
//!
//! - **Index**: bidirectional name/id lookup ([`RouteIndex`])
//! - **Resolver**: free text to canonical route ([`GuessResolver`])
//! - **State machine**: guess history and win/lose ([`GameStateMachine`])
//! - **Reveal**: guess count to background intensity ([`reveal`])
//! - **Session**: readiness and view updates ([`Session`])
//!
//! # Example
//!
//! ```
//! use routle_core::{Route, Session, SubmitOutcome, Guess, RevealSink, ProgressSink};
//!
//! struct Quiet;
//! impl RevealSink for Quiet { fn set_reveal(&mut self, _: f64) {} }
//! impl ProgressSink for Quiet { fn show_history(&mut self, _: &[Guess]) {} }
//!
//! let routes = vec![Route::new("8", "Halsted"), Route::new("9", "Ashland")];
//! let mut session = Session::start(routes, Route::new("8", "Halsted"))?;
//!
//! let outcome = session.submit_text("halsted", &mut Quiet)?;
//! assert_eq!(outcome, SubmitOutcome::Won { target_name: "Halsted".into() });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod index;
pub mod invariants;
mod machine;
mod phases;
mod resolver;
mod reveal;
mod route;
pub mod rules;
mod session;
mod typestate;

// Crate-level exports - Domain types
pub use route::{Guess, Resolved, Route};

// Crate-level exports - Resolution
pub use index::{IndexError, RouteIndex};
pub use resolver::{GuessResolver, Resolution};

// Crate-level exports - Round state
pub use action::GuessError;
pub use contracts::{Contract, GuessContract, GuessesRemain};
pub use machine::{GameStateMachine, SubmitOutcome};
pub use phases::Outcome;
pub use rules::MAX_GUESSES;
pub use typestate::{GuessResult, RoundFinished, RoundInProgress};

// Crate-level exports - Reveal
pub use reveal::{reveal, REVEAL_STEP};

// Crate-level exports - Session
pub use session::{
    GameView, ProgressSink, RevealSink, Session, SessionError, TurnError, ValidationError,
};
