//! # Tradeline Analytics
//!
//! Credit portfolio analytics: turns a list of tradelines into a
//! [`PortfolioReport`] with utilization, interest cost, a score-potential
//! estimate, a per-account action plan, and a credit-mix check.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Fail-fast validation**: Every record is validated before any metric
//!   is computed; the first invalid record aborts the run
//! - **Injectable heuristics**: Score buckets, quest thresholds, and the
//!   credit-mix threshold live in [`AnalyzerConfig`]
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use tradeline_analytics::prelude::*;
//!
//! let report = analyze(&sample_portfolio()).unwrap();
//!
//! assert_eq!(report.score_potential, 45);
//! assert!(!report.credit_mix_alert);
//! for quest in report.open_quests() {
//!     println!("{}: pay {:?}", quest.account_name(), quest.pay_amount());
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Metrics, aggregation, score heuristic, quests, credit mix, report
//! - [`tabular`] - CSV import of tradelines and export of the account table
//! - [`types`] - Config, policies, derived metrics, quests
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large record sets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod tabular;
pub mod types;

// Re-export main types
pub use types::{
    AnalyzerConfig, CreditMixConfig, CreditMixStrategy, DerivedMetrics, Quest, QuestThresholds,
    ScoreHeuristic, ZeroLimitPolicy,
};

// Re-export analytics types and functions
pub use analytics::{
    aggregate, analyze, analyze_with, check_credit_mix, compute_all_metrics, compute_metrics,
    estimate_score_potential, generate_quest, generate_quests, maybe_parallel_fold,
    maybe_parallel_map, monthly_interest, percentage_of, validate_record, validate_records,
    AccountAnalysis, AccountRow, PortfolioReport, PortfolioTotals, UtilizationStatus,
    INTEREST_SCALE,
};

// Re-export tabular I/O
pub use tabular::{
    read_account_table_csv, read_tradelines_csv, read_tradelines_json, write_account_table_csv,
    ACCOUNT_TABLE_HEADERS,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tradeline_analytics::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tradeline_core::{
        sample_portfolio, AccountType, TradelineError, TradelineRecord, TradelineResult,
    };

    // Config types
    pub use crate::types::{
        AnalyzerConfig, CreditMixConfig, CreditMixStrategy, QuestThresholds, ScoreHeuristic,
        ZeroLimitPolicy,
    };

    // Analytics
    pub use crate::analytics::{
        aggregate, analyze, analyze_with, check_credit_mix, compute_metrics,
        estimate_score_potential, generate_quest, AccountAnalysis, AccountRow, PortfolioReport,
        PortfolioTotals, UtilizationStatus,
    };
    pub use crate::types::{DerivedMetrics, Quest};

    // Tabular I/O
    pub use crate::tabular::{read_tradelines_csv, read_tradelines_json, write_account_table_csv};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        let err = tradeline_core::TradelineError::EmptyPortfolio;
        assert!(err.to_string().contains("no tradelines"));
        assert_eq!(ACCOUNT_TABLE_HEADERS.len(), 5);
    }
}
