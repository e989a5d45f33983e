//! Per-account metrics and record validation.

use crate::analytics::parallel::maybe_parallel_map;
use crate::types::{AnalyzerConfig, DerivedMetrics, ZeroLimitPolicy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tradeline_core::{TradelineRecord, TradelineResult};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Decimal places kept in monthly interest. A fixed scale keeps portfolio
/// sums exact, so they do not depend on record order or on the fold path.
pub const INTEREST_SCALE: u32 = 10;

/// Computes utilization and monthly interest for a single record.
///
/// `utilization = balance / limit * 100` and
/// `monthly_interest = balance * (apr / 100) / 12`.
///
/// # Errors
///
/// Returns `InvalidTradeline` if the record fails validation, if the limit
/// is zero under [`ZeroLimitPolicy::Reject`], or if either metric overflows.
pub fn compute_metrics(
    record: &TradelineRecord,
    config: &AnalyzerConfig,
) -> TradelineResult<DerivedMetrics> {
    validate_record(record, config)?;

    let utilization = match percentage_of(record.balance, record.limit) {
        Some(pct) => pct,
        None if record.limit.is_zero() => Decimal::ZERO,
        None => return Err(record.invalid("utilization overflows")),
    };

    Ok(DerivedMetrics {
        utilization,
        monthly_interest: monthly_interest(record)?,
    })
}

/// Interest accrued per month at the record's current balance, rounded to
/// [`INTEREST_SCALE`] decimal places.
///
/// # Errors
///
/// Returns `InvalidTradeline` if the product does not fit in a `Decimal`.
pub fn monthly_interest(record: &TradelineRecord) -> TradelineResult<Decimal> {
    record
        .balance
        .checked_mul(record.apr / Decimal::ONE_HUNDRED)
        .and_then(|annual| annual.checked_div(MONTHS_PER_YEAR))
        .map(|monthly| monthly.round_dp(INTEREST_SCALE))
        .ok_or_else(|| record.invalid("monthly interest overflows"))
}

/// Returns `part / whole * 100`, or `None` when `whole` is zero or the
/// result does not fit.
#[must_use]
pub fn percentage_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Validates a record against its own invariants and the zero-limit policy.
///
/// # Errors
///
/// Returns `InvalidTradeline` describing the first problem found.
pub fn validate_record(record: &TradelineRecord, config: &AnalyzerConfig) -> TradelineResult<()> {
    record.validate()?;
    if record.limit.is_zero() && config.zero_limit_policy == ZeroLimitPolicy::Reject {
        return Err(record.invalid("limit must be positive to compute utilization"));
    }
    Ok(())
}

/// Validates every record in input order, stopping at the first failure.
///
/// # Errors
///
/// Returns the error for the first invalid record.
pub fn validate_records(records: &[TradelineRecord], config: &AnalyzerConfig) -> TradelineResult<()> {
    records
        .iter()
        .try_for_each(|record| validate_record(record, config))
}

/// Computes metrics for every record, preserving input order.
///
/// # Errors
///
/// Returns the error for the first invalid record in input order.
pub fn compute_all_metrics(
    records: &[TradelineRecord],
    config: &AnalyzerConfig,
) -> TradelineResult<Vec<DerivedMetrics>> {
    maybe_parallel_map(records, config, |record| compute_metrics(record, config))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradeline_core::TradelineError;

    fn record(balance: Decimal, limit: Decimal, apr: Decimal) -> TradelineRecord {
        TradelineRecord::new("Card", balance, limit, apr).unwrap()
    }

    #[test]
    fn test_compute_metrics() {
        let config = AnalyzerConfig::default();
        let metrics = compute_metrics(&record(dec!(4500), dec!(5000), dec!(24.99)), &config).unwrap();

        assert_eq!(metrics.utilization, dec!(90));
        // 4500 × 0.2499 / 12 = 93.7125
        assert_eq!(metrics.monthly_interest, dec!(93.7125));
    }

    #[test]
    fn test_over_limit_utilization() {
        let config = AnalyzerConfig::default();
        let metrics = compute_metrics(&record(dec!(1100), dec!(1000), dec!(0)), &config).unwrap();
        assert_eq!(metrics.utilization, dec!(110));
        assert_eq!(metrics.monthly_interest, Decimal::ZERO);
    }

    #[test]
    fn test_zero_limit_rejected_by_default() {
        let config = AnalyzerConfig::default();
        let err = compute_metrics(&record(dec!(100), dec!(0), dec!(20)), &config).unwrap_err();
        assert!(matches!(err, TradelineError::InvalidTradeline { .. }));
        assert!(err.to_string().contains("limit must be positive"));
    }

    #[test]
    fn test_zero_limit_as_zero_utilization() {
        let config = AnalyzerConfig::default().with_zero_limit_policy(ZeroLimitPolicy::ZeroUtilization);
        let metrics = compute_metrics(&record(dec!(100), dec!(0), dec!(12)), &config).unwrap();
        assert_eq!(metrics.utilization, Decimal::ZERO);
        assert_eq!(metrics.monthly_interest, dec!(1));
    }

    #[test]
    fn test_unvalidated_record_is_checked() {
        let config = AnalyzerConfig::default();
        let bad = TradelineRecord {
            account_name: "Card".to_string(),
            balance: dec!(-5),
            limit: dec!(100),
            apr: dec!(10),
            account_type: None,
        };
        assert!(compute_metrics(&bad, &config).is_err());
    }

    #[test]
    fn test_monthly_interest_has_fixed_scale() {
        let interest = monthly_interest(&record(dec!(9087.5), dec!(10000), dec!(24.99))).unwrap();
        // 9087.5 × 0.2499 / 12 = 189.2471875 exactly; a repeating quotient
        // is cut at the fixed scale.
        assert_eq!(interest, dec!(189.2471875));
        let repeating = monthly_interest(&record(dec!(100), dec!(1000), dec!(1))).unwrap();
        assert_eq!(repeating, dec!(0.0833333333));
    }

    #[test]
    fn test_huge_balance_overflow_is_an_error() {
        let config = AnalyzerConfig::default();
        let big = record(Decimal::MAX, Decimal::MAX, dec!(200));
        let err = compute_metrics(&big, &config).unwrap_err();
        assert!(err.is_invalid_tradeline());
        assert!(err.to_string().contains("monthly interest overflows"));
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(dec!(1), dec!(4)), Some(dec!(25)));
        assert_eq!(percentage_of(dec!(1), Decimal::ZERO), None);
    }

    #[test]
    fn test_compute_all_stops_at_first_invalid() {
        let config = AnalyzerConfig::default();
        let records = vec![
            record(dec!(10), dec!(100), dec!(1)),
            TradelineRecord::new("First Zero", dec!(1), dec!(0), dec!(1)).unwrap(),
            TradelineRecord::new("Second Zero", dec!(1), dec!(0), dec!(1)).unwrap(),
        ];
        let err = compute_all_metrics(&records, &config).unwrap_err();
        assert!(err.to_string().contains("First Zero"));
        assert_eq!(validate_records(&records, &config), Err(err));
    }
}
