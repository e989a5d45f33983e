//! Action-plan generation.

use crate::types::{DerivedMetrics, Quest, QuestThresholds};
use rust_decimal::Decimal;
use tradeline_core::{TradelineRecord, TradelineResult};

/// Builds the directive for one account.
///
/// Accounts above the trigger utilization get an [`Quest::Optimize`] with
/// `target_balance = limit * target / 100` and
/// `pay_amount = balance - target_balance`; all others are
/// [`Quest::Complete`].
///
/// # Errors
///
/// Returns `InvalidTradeline` if the target balance does not fit in a
/// `Decimal`.
pub fn generate_quest(
    record: &TradelineRecord,
    metrics: &DerivedMetrics,
    thresholds: &QuestThresholds,
) -> TradelineResult<Quest> {
    if metrics.utilization <= thresholds.trigger_utilization {
        return Ok(Quest::Complete {
            account_name: record.account_name.clone(),
            utilization: metrics.utilization,
        });
    }

    let target_balance = record
        .limit
        .checked_mul(thresholds.target_utilization / Decimal::ONE_HUNDRED)
        .ok_or_else(|| record.invalid("target balance overflows"))?;
    let pay_amount = record
        .balance
        .checked_sub(target_balance)
        .ok_or_else(|| record.invalid("paydown amount overflows"))?;

    Ok(Quest::Optimize {
        account_name: record.account_name.clone(),
        utilization: metrics.utilization,
        target_utilization: thresholds.target_utilization,
        target_balance,
        pay_amount,
    })
}

/// Builds one directive per record, in input order.
///
/// # Errors
///
/// Returns the first error from [`generate_quest`].
pub fn generate_quests(
    records: &[TradelineRecord],
    metrics: &[DerivedMetrics],
    thresholds: &QuestThresholds,
) -> TradelineResult<Vec<Quest>> {
    records
        .iter()
        .zip(metrics)
        .map(|(record, metrics)| generate_quest(record, metrics, thresholds))
        .collect()
}
