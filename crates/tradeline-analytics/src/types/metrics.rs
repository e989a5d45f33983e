//! Per-account derived metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metrics derived from a single tradeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Balance as a percentage of limit. Exceeds 100 when over limit.
    pub utilization: Decimal,

    /// Interest accrued per month at the current balance.
    pub monthly_interest: Decimal,
}

impl DerivedMetrics {
    /// Returns the interest accrued over a year at the current balance.
    #[must_use]
    pub fn annual_interest(&self) -> Decimal {
        self.monthly_interest * Decimal::from(12)
    }

    /// Returns true if the balance exceeds the limit.
    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.utilization > Decimal::ONE_HUNDRED
    }
}
