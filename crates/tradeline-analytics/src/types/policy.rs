//! Policies for ambiguous inputs.

use serde::{Deserialize, Serialize};

/// How a zero limit (or a zero total limit) is handled when computing
/// utilization.
///
/// The policy applies uniformly to per-account and portfolio-level ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroLimitPolicy {
    /// Reject the record (or the empty portfolio) with an error.
    #[default]
    Reject,

    /// Treat the ratio as 0% utilization.
    ZeroUtilization,
}

impl ZeroLimitPolicy {
    /// Returns a human-readable name for the policy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reject => "Reject",
            Self::ZeroUtilization => "Zero Utilization",
        }
    }
}

impl std::fmt::Display for ZeroLimitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How installment loans are detected for the credit-mix check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditMixStrategy {
    /// Use the declared account type; records without one fall back to the
    /// limit-size proxy.
    #[default]
    DeclaredType,

    /// Ignore declared types: any limit above the threshold counts as an
    /// installment loan.
    LimitProxy,
}

impl CreditMixStrategy {
    /// Returns a human-readable name for the strategy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeclaredType => "Declared Type",
            Self::LimitProxy => "Limit Proxy",
        }
    }
}

impl std::fmt::Display for CreditMixStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
