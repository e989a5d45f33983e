//! Tradeline CLI - Command-line dashboard for credit tradeline analytics.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a CSV of tradelines
//! tradeline analyze accounts.csv
//!
//! # Same, as JSON, with a custom heuristics file
//! tradeline --format json analyze accounts.json --config tradeline.toml
//!
//! # Export the account table
//! tradeline analyze accounts.csv --export table.csv
//!
//! # Built-in sample portfolio
//! tradeline sample
//!
//! # Print the default configuration
//! tradeline config show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, format, quiet)?,
        Commands::Sample(args) => commands::sample::execute(args, format, quiet)?,
        Commands::Config(args) => commands::config::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
