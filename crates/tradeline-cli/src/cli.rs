//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, ConfigArgs, SampleArgs};

/// Tradeline - Credit utilization and paydown dashboard
#[derive(Parser)]
#[command(name = "tradeline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output and lower the log level to warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze tradelines from a CSV or JSON file
    Analyze(AnalyzeArgs),

    /// Analyze the built-in sample portfolio
    Sample(SampleArgs),

    /// Inspect analyzer configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable dashboard
    #[default]
    Table,
    /// JSON report
    Json,
    /// CSV account table
    Csv,
    /// Minimal output (headline metrics on one line)
    Minimal,
}
