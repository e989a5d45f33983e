//! Error types for the Tradeline engine.
//!
//! Every failure the engine can produce is a [`TradelineError`]. Analysis is
//! fail-fast: the first invalid record aborts the run and no report is built.

use thiserror::Error;

/// A specialized Result type for Tradeline operations.
pub type TradelineResult<T> = Result<T, TradelineError>;

/// Errors that can occur while ingesting or analyzing tradelines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradelineError {
    /// A record failed validation (zero or negative limit, negative balance
    /// or APR, empty name, malformed numeric text).
    #[error("Invalid tradeline '{account}': {reason}")]
    InvalidTradeline {
        /// Account name of the offending record.
        account: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// Portfolio-level ratios were requested for an empty record set.
    #[error("Portfolio has no tradelines")]
    EmptyPortfolio,

    /// A row of tabular input could not be ingested.
    #[error("Invalid input row {row}: {source}")]
    InvalidRow {
        /// 1-based data row number (header excluded).
        row: usize,
        /// The underlying failure.
        #[source]
        source: Box<TradelineError>,
    },

    /// Analyzer configuration is inconsistent.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Which setting is wrong and why.
        reason: String,
    },

    /// CSV reader or writer failure.
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON input is not an array of tradeline objects.
    #[error("JSON error: {0}")]
    Json(String),
}

impl TradelineError {
    /// Create an invalid tradeline error.
    #[must_use]
    pub fn invalid_tradeline(account: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTradeline {
            account: account.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error with the input row it came from.
    #[must_use]
    pub fn at_row(self, row: usize) -> Self {
        Self::InvalidRow {
            row,
            source: Box::new(self),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a CSV error.
    #[must_use]
    pub fn csv(message: impl std::fmt::Display) -> Self {
        Self::Csv(message.to_string())
    }

    /// Create a JSON error.
    #[must_use]
    pub fn json(message: impl std::fmt::Display) -> Self {
        Self::Json(message.to_string())
    }

    /// Returns true if this error rejects an individual record, including
    /// record failures reported against an input row.
    #[must_use]
    pub fn is_invalid_tradeline(&self) -> bool {
        match self {
            Self::InvalidTradeline { .. } => true,
            Self::InvalidRow { source, .. } => source.is_invalid_tradeline(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TradelineError::invalid_tradeline("Chase Freedom", "limit must be positive");
        assert!(err.to_string().contains("Chase Freedom"));
        assert!(err.to_string().contains("limit must be positive"));

        let err = TradelineError::invalid_tradeline("Card", "balance 'x' is not a number").at_row(3);
        assert_eq!(
            err.to_string(),
            "Invalid input row 3: Invalid tradeline 'Card': balance 'x' is not a number"
        );

        let err = TradelineError::invalid_config("target above trigger");
        assert!(err.to_string().starts_with("Invalid configuration"));

        assert!(TradelineError::EmptyPortfolio
            .to_string()
            .contains("no tradelines"));
    }

    #[test]
    fn test_is_invalid_tradeline() {
        assert!(TradelineError::invalid_tradeline("A", "bad").is_invalid_tradeline());
        assert!(!TradelineError::EmptyPortfolio.is_invalid_tradeline());
        assert!(!TradelineError::csv("boom").is_invalid_tradeline());
        assert!(!TradelineError::json("expected `[`").is_invalid_tradeline());
        assert!(TradelineError::invalid_tradeline("A", "bad")
            .at_row(1)
            .is_invalid_tradeline());
        assert!(!TradelineError::csv("short row").at_row(2).is_invalid_tradeline());
    }

    #[test]
    fn test_error_clone() {
        let err = TradelineError::EmptyPortfolio;
        assert_eq!(err.clone(), err);
    }
}
