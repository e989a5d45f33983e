//! Config command implementation.
//!
//! Shows the effective analyzer configuration and where it is read from.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::{default_config_path, resolve, to_toml_string};
use crate::output::{print_info, print_output, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show(ShowArgs),

    /// Show the per-user configuration file location
    Path,
}

/// Arguments for show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file to show instead of the per-user one
    #[arg(short, long, env = crate::config::CONFIG_ENV)]
    pub config: Option<PathBuf>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show(show_args) => execute_show(show_args, format),
        ConfigCommand::Path => execute_path(format),
    }
}

/// Show current configuration.
fn execute_show(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let (config, _) = resolve(args.config.as_deref())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Minimal => {
            print!("{}", to_toml_string(&config)?);
        }
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(format: OutputFormat) -> Result<()> {
    let path = default_config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    let exists = path.exists();

    match format {
        OutputFormat::Table => {
            print_info(&format!("Config file: {}", path.display()));
            if exists {
                print_info("Status: exists");
            } else {
                print_info("Status: not created yet (using defaults)");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "exists": exists,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("path", path.display().to_string()),
                KeyValue::new("exists", exists.to_string()),
            ];
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
