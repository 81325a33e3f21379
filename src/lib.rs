//! Routle - guess the hidden transit route.
//!
//! This crate wires the pure game logic in [`routle_core`] to the world:
//! dataset loading, target selection, a terminal view and a line-driven
//! play loop.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with environment overrides
//! - **Dataset**: GeoJSON or JSON to candidate routes
//! - **Target**: seeded or fixed target draw
//! - **Terminal**: guess bars, reveal gauge, announcements
//! - **Play**: the input loop driving a [`routle_core::Session`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod dataset;
mod play;
mod target;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, RoutleConfig, DATA_ENV_VAR, DEFAULT_CONFIG_PATH};

// Crate-level exports - Collaborators
pub use dataset::{load_routes, parse_routes, DataError, PropertyKeys};
pub use target::{choose_target, TargetError, TargetSelection};

// Crate-level exports - Terminal play
pub use play::{run as run_session, SUGGESTION_LIMIT};
pub use terminal::TerminalView;
