//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;
use tradeline_core::TradelineError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file extension is not `.csv` or `.json`.
    #[error("Unsupported input file: {0}. Use a .csv or .json file.")]
    UnsupportedInput(PathBuf),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Input rejected by the analytics engine.
    #[error(transparent)]
    Tradeline(#[from] TradelineError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
