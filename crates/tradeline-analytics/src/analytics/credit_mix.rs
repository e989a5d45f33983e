//! Credit-mix diversity check.

use crate::types::CreditMixConfig;
use tradeline_core::TradelineRecord;

/// Returns true (alert) when no record counts as an installment loan.
///
/// With the default [`CreditMixConfig`], declared account types are
/// honored and untyped records fall back to the `limit > 10000` proxy.
#[must_use]
pub fn check_credit_mix(records: &[TradelineRecord], config: &CreditMixConfig) -> bool {
    !records
        .iter()
        .any(|record| config.counts_as_installment(record))
}
