//! Per-account action-plan directives.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A directive for a single account in the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Quest {
    /// Utilization is above the trigger: pay the account down to the target.
    Optimize {
        /// Account the directive applies to.
        account_name: String,
        /// Current utilization (%).
        utilization: Decimal,
        /// Utilization reached after the payment (%).
        target_utilization: Decimal,
        /// Balance at the target utilization.
        target_balance: Decimal,
        /// Amount to pay now.
        pay_amount: Decimal,
    },

    /// Utilization is already at or below the trigger.
    Complete {
        /// Account the directive applies to.
        account_name: String,
        /// Current utilization (%).
        utilization: Decimal,
    },
}

impl Quest {
    /// Returns the account the quest applies to.
    #[must_use]
    pub fn account_name(&self) -> &str {
        match self {
            Self::Optimize { account_name, .. } | Self::Complete { account_name, .. } => {
                account_name
            }
        }
    }

    /// Returns the account utilization the quest was derived from.
    #[must_use]
    pub fn utilization(&self) -> Decimal {
        match self {
            Self::Optimize { utilization, .. } | Self::Complete { utilization, .. } => {
                *utilization
            }
        }
    }

    /// Returns the payment to make, if any.
    #[must_use]
    pub fn pay_amount(&self) -> Option<Decimal> {
        match self {
            Self::Optimize { pay_amount, .. } => Some(*pay_amount),
            Self::Complete { .. } => None,
        }
    }

    /// Returns true if the account is already optimized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}
