//! Sample command implementation.
//!
//! Runs the dashboard on the built-in demo portfolio.

use anyhow::Result;
use clap::Args;
use tracing::info;
use tradeline_core::sample_portfolio;

use crate::cli::OutputFormat;
use crate::commands::analyze::run_report;
use crate::commands::ReportOptions;

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub options: ReportOptions,
}

/// Execute the sample command.
pub fn execute(args: SampleArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let records = sample_portfolio();
    info!(count = records.len(), "analyzing sample portfolio");
    run_report(&records, &args.options, format, quiet)
}
