//! Portfolio report.
//!
//! Combines per-account metrics, totals, the score heuristic, the action
//! plan, and the credit-mix check into the engine's single output value.

use super::aggregate::{totals_for, PortfolioTotals};
use super::credit_mix::check_credit_mix;
use super::metrics::{compute_all_metrics, validate_records};
use super::quests::generate_quests;
use super::score::UtilizationStatus;
use crate::types::{AnalyzerConfig, DerivedMetrics, Quest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tradeline_core::{AccountType, TradelineRecord, TradelineResult};

/// One analyzed account: the input record alongside its derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAnalysis {
    /// Account name.
    pub account_name: String,
    /// Current balance.
    pub balance: Decimal,
    /// Credit limit or original principal.
    pub limit: Decimal,
    /// Annual percentage rate (%).
    pub apr: Decimal,
    /// Declared account type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    /// Balance as a percentage of limit.
    pub utilization: Decimal,
    /// Monthly interest at the current balance.
    pub monthly_interest: Decimal,
}

impl AccountAnalysis {
    /// Pairs a record with its metrics.
    #[must_use]
    pub fn new(record: &TradelineRecord, metrics: &DerivedMetrics) -> Self {
        Self {
            account_name: record.account_name.clone(),
            balance: record.balance,
            limit: record.limit,
            apr: record.apr,
            account_type: record.account_type,
            utilization: metrics.utilization,
            monthly_interest: metrics.monthly_interest,
        }
    }

    /// Returns the derived metrics for this account.
    #[must_use]
    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics {
            utilization: self.utilization,
            monthly_interest: self.monthly_interest,
        }
    }
}

/// Flat per-account row: `Account, Balance, Limit, Utilization, APR`.
///
/// Amounts serialize as plain decimal text so the table survives a CSV
/// round trip without precision loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRow {
    /// Account name.
    #[serde(rename = "Account")]
    pub account: String,
    /// Current balance.
    #[serde(rename = "Balance", with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    /// Credit limit.
    #[serde(rename = "Limit", with = "rust_decimal::serde::str")]
    pub limit: Decimal,
    /// Utilization (%).
    #[serde(rename = "Utilization", with = "rust_decimal::serde::str")]
    pub utilization: Decimal,
    /// Annual percentage rate (%).
    #[serde(rename = "APR", with = "rust_decimal::serde::str")]
    pub apr: Decimal,
}

impl From<&AccountAnalysis> for AccountRow {
    fn from(account: &AccountAnalysis) -> Self {
        Self {
            account: account.account_name.clone(),
            balance: account.balance.normalize(),
            limit: account.limit.normalize(),
            utilization: account.utilization.normalize(),
            apr: account.apr.normalize(),
        }
    }
}

/// Complete analysis of a set of tradelines.
///
/// This is the primary output of the engine. It is rebuilt from scratch on
/// every call and fully determined by the input records and config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Number of accounts analyzed.
    pub account_count: usize,

    /// Per-account rows, in input order.
    pub accounts: Vec<AccountAnalysis>,

    /// Sum of balances.
    pub total_balance: Decimal,

    /// Sum of limits.
    pub total_limit: Decimal,

    /// `total_balance / total_limit * 100`.
    pub overall_utilization: Decimal,

    /// Sum of per-account monthly interest.
    pub monthly_interest_leak: Decimal,

    /// Headline status for overall utilization.
    pub utilization_status: UtilizationStatus,

    /// Estimated score points recoverable.
    pub score_potential: u32,

    /// One directive per account, in input order.
    pub quests: Vec<Quest>,

    /// True when the portfolio appears to lack an installment loan.
    pub credit_mix_alert: bool,
}

impl PortfolioReport {
    /// Analyzes a set of tradelines.
    ///
    /// Every record is validated before any metric is computed; the first
    /// invalid record aborts the run.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an inconsistent config, `InvalidTradeline`
    /// for the first invalid record or for amounts too large to compute with,
    /// or `EmptyPortfolio` for an empty set under the default zero-limit
    /// policy.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use tradeline_analytics::prelude::*;
    ///
    /// let report = PortfolioReport::calculate(&sample_portfolio(), &AnalyzerConfig::default())?;
    /// println!("Utilization: {}%", report.overall_utilization.round_dp(1));
    /// ```
    pub fn calculate(
        records: &[TradelineRecord],
        config: &AnalyzerConfig,
    ) -> TradelineResult<Self> {
        config.validate()?;
        debug!(
            records = records.len(),
            policy = %config.zero_limit_policy,
            "analyzing tradelines"
        );

        validate_records(records, config).map_err(|e| {
            warn!(error = %e, "rejected tradelines");
            e
        })?;

        let metrics = compute_all_metrics(records, config)?;
        let totals = totals_for(records, config)?;

        let accounts = records
            .iter()
            .zip(&metrics)
            .map(|(record, metrics)| AccountAnalysis::new(record, metrics))
            .collect();
        let quests = generate_quests(records, &metrics, &config.quests)?;
        let score_potential = config.score.points_for(totals.overall_utilization);
        let credit_mix_alert = check_credit_mix(records, &config.credit_mix);

        debug!(
            overall_utilization = %totals.overall_utilization,
            score_potential,
            credit_mix_alert,
            "portfolio analyzed"
        );

        Ok(Self {
            account_count: records.len(),
            accounts,
            total_balance: totals.total_balance,
            total_limit: totals.total_limit,
            overall_utilization: totals.overall_utilization,
            monthly_interest_leak: totals.monthly_interest_leak,
            utilization_status: UtilizationStatus::classify(totals.overall_utilization, config),
            score_potential,
            quests,
            credit_mix_alert,
        })
    }

    /// Returns the portfolio totals.
    #[must_use]
    pub fn totals(&self) -> PortfolioTotals {
        PortfolioTotals {
            total_balance: self.total_balance,
            total_limit: self.total_limit,
            overall_utilization: self.overall_utilization,
            monthly_interest_leak: self.monthly_interest_leak,
        }
    }

    /// Returns the flat per-account table.
    #[must_use]
    pub fn account_rows(&self) -> Vec<AccountRow> {
        self.accounts.iter().map(AccountRow::from).collect()
    }

    /// Returns the quests that still require a payment.
    pub fn open_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| !q.is_complete())
    }

    /// Returns the total payment required to complete every open quest.
    #[must_use]
    pub fn total_paydown(&self) -> Decimal {
        self.quests.iter().filter_map(Quest::pay_amount).sum()
    }
}

/// Analyzes tradelines with the default configuration.
///
/// # Errors
///
/// See [`PortfolioReport::calculate`].
pub fn analyze(records: &[TradelineRecord]) -> TradelineResult<PortfolioReport> {
    PortfolioReport::calculate(records, &AnalyzerConfig::default())
}

/// Analyzes tradelines with an explicit configuration.
///
/// # Errors
///
/// See [`PortfolioReport::calculate`].
pub fn analyze_with(
    records: &[TradelineRecord],
    config: &AnalyzerConfig,
) -> TradelineResult<PortfolioReport> {
    PortfolioReport::calculate(records, config)
}
