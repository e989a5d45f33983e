//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod sample;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use config::ConfigArgs;
pub use sample::SampleArgs;

use std::path::PathBuf;

use clap::Args;

/// Options shared by every command that produces a report.
#[derive(Args, Debug, Default)]
pub struct ReportOptions {
    /// Analyzer configuration file (TOML)
    #[arg(short, long, env = crate::config::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Also write the account table to this CSV file
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}
