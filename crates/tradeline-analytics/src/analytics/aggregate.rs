//! Portfolio-level totals.

use super::metrics::{monthly_interest, percentage_of, validate_records};
use crate::analytics::parallel::maybe_parallel_fold;
use crate::types::{AnalyzerConfig, ZeroLimitPolicy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradeline_core::{TradelineError, TradelineRecord, TradelineResult};

/// Sums and ratios across the whole record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    /// Sum of balances.
    pub total_balance: Decimal,

    /// Sum of limits.
    pub total_limit: Decimal,

    /// `total_balance / total_limit * 100`.
    pub overall_utilization: Decimal,

    /// Sum of per-account monthly interest.
    pub monthly_interest_leak: Decimal,
}

impl PortfolioTotals {
    /// Totals for an empty portfolio under [`ZeroLimitPolicy::ZeroUtilization`].
    #[must_use]
    pub fn zero() -> Self {
        Self {
            total_balance: Decimal::ZERO,
            total_limit: Decimal::ZERO,
            overall_utilization: Decimal::ZERO,
            monthly_interest_leak: Decimal::ZERO,
        }
    }

    /// Returns the headroom left before every limit is reached.
    #[must_use]
    pub fn available_credit(&self) -> Decimal {
        self.total_limit - self.total_balance
    }
}

/// Aggregates balances, limits, and interest across all records.
///
/// Sums are exact and independent of record order: monthly interest is
/// kept at a fixed scale, so no addition rounds.
///
/// # Errors
///
/// Under [`ZeroLimitPolicy::Reject`], returns `EmptyPortfolio` for an empty
/// record set. Returns `InvalidTradeline` for the first invalid record, or
/// for the `"portfolio"` when a total does not fit in a `Decimal`.
pub fn aggregate(
    records: &[TradelineRecord],
    config: &AnalyzerConfig,
) -> TradelineResult<PortfolioTotals> {
    validate_records(records, config)?;
    totals_for(records, config)
}

/// Aggregates records that have already been validated.
pub(crate) fn totals_for(
    records: &[TradelineRecord],
    config: &AnalyzerConfig,
) -> TradelineResult<PortfolioTotals> {
    if records.is_empty() {
        return match config.zero_limit_policy {
            ZeroLimitPolicy::Reject => Err(TradelineError::EmptyPortfolio),
            ZeroLimitPolicy::ZeroUtilization => Ok(PortfolioTotals::zero()),
        };
    }

    let sums = maybe_parallel_fold(
        records,
        config,
        Some((Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)),
        |acc, record| {
            let (balance, limit, leak) = acc?;
            Some((
                balance.checked_add(record.balance)?,
                limit.checked_add(record.limit)?,
                leak.checked_add(monthly_interest(record).ok()?)?,
            ))
        },
        |left, right| {
            let ((a, b, c), (d, e, f)) = (left?, right?);
            Some((a.checked_add(d)?, b.checked_add(e)?, c.checked_add(f)?))
        },
    );
    // Every addend is non-negative, so overflow does not depend on order.
    let (total_balance, total_limit, monthly_interest_leak) = sums.ok_or_else(|| {
        TradelineError::invalid_tradeline("portfolio", "portfolio totals overflow")
    })?;

    let overall_utilization = match percentage_of(total_balance, total_limit) {
        Some(pct) => pct,
        None if total_limit.is_zero()
            && config.zero_limit_policy == ZeroLimitPolicy::ZeroUtilization =>
        {
            Decimal::ZERO
        }
        None => {
            return Err(TradelineError::invalid_tradeline(
                "portfolio",
                "overall utilization cannot be computed from the total limit",
            ))
        }
    };

    Ok(PortfolioTotals {
        total_balance,
        total_limit,
        overall_utilization,
        monthly_interest_leak,
    })
}
