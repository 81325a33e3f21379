//! Routle - terminal route-guessing game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DataArgs};
use routle::{
    choose_target, load_routes, run_session, PropertyKeys, RoutleConfig, TargetSelection,
    TerminalView,
};
use routle_core::{Route, Session};
use std::io::{self, Write};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            data,
            seed,
            target,
            no_color,
            show_target,
        } => run_play(data, seed, target, no_color, show_target),
        Command::Routes { data } => run_routes(data),
    }
}

/// Resolves config from file, environment and flags, then loads routes.
#[instrument(skip_all)]
fn load(data: &DataArgs) -> Result<(RoutleConfig, Vec<Route>)> {
    let mut config = RoutleConfig::load(data.config.as_deref())?.with_env_overrides();
    if let Some(path) = &data.data {
        config = config.with_data_path(path.clone());
    }
    debug!(?config, "Effective configuration");

    let keys = PropertyKeys {
        id: config.id_property(),
        name: config.name_property(),
    };
    let routes = load_routes(config.data_path(), keys).with_context(|| {
        format!("Failed to load routes from {}", config.data_path().display())
    })?;

    Ok((config, routes))
}

/// Play one round in the terminal
#[instrument(skip(data))]
fn run_play(
    data: DataArgs,
    seed: Option<u64>,
    target: Option<String>,
    no_color: bool,
    show_target: bool,
) -> Result<()> {
    let (config, routes) = load(&data)?;

    let selection = match target {
        Some(id) => TargetSelection::Fixed(id),
        None => TargetSelection::Random {
            seed: seed.or(*config.seed()),
        },
    };
    let target = choose_target(&routes, &selection).context("Failed to choose target")?;
    let candidates = routes.len();

    let mut session = Session::new();
    session
        .begin(routes, target.clone())
        .context("Failed to start session")?;
    info!(candidates, "Starting round");

    let color = *config.color() && !no_color;
    let mut view = TerminalView::new(io::stdout().lock(), color);
    view.banner(candidates)?;
    if show_target {
        view.notice(&format!("Target route (debug): {}", target.name()))?;
    }
    session.present(&mut view);

    let outcome = run_session(&mut session, io::stdin().lock(), &mut view)?;
    if let Some(machine) = session.machine() {
        let snapshot = machine.to_json()?;
        debug!(%snapshot, "Final state");
    }
    info!(?outcome, "Round ended");

    Ok(())
}

/// List candidate routes
#[instrument(skip(data))]
fn run_routes(data: DataArgs) -> Result<()> {
    let (_, routes) = load(&data)?;

    let mut out = io::stdout().lock();
    for route in &routes {
        writeln!(out, "{}\t{}", route.id(), route.name())?;
    }
    Ok(())
}
