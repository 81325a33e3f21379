//! Command-line interface for routle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Routle - guess the transit route in five tries
#[derive(Parser, Debug)]
#[command(name = "routle")]
#[command(about = "Guess the hidden transit route", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Dataset and config location shared by all commands
#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Route dataset (GeoJSON or JSON route list)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Config file (defaults to routle.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one round in the terminal
    Play {
        #[command(flatten)]
        data: DataArgs,

        /// Seed for the target draw
        #[arg(long)]
        seed: Option<u64>,

        /// Play against a specific route id
        #[arg(long)]
        target: Option<String>,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,

        /// Print the target before the first guess (debugging)
        #[arg(long)]
        show_target: bool,
    },

    /// List candidate routes
    Routes {
        #[command(flatten)]
        data: DataArgs,
    },
}
