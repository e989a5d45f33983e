//! Account type classification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of credit account a tradeline reports.
///
/// Legacy inputs carry no type; the credit-mix check then falls back to
/// inferring installment loans from the size of the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Credit cards and lines of credit.
    Revolving,

    /// Auto loans, mortgages, student loans, credit builder loans.
    Installment,
}

impl AccountType {
    /// Returns a human-readable name for the account type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Revolving => "Revolving",
            Self::Installment => "Installment",
        }
    }

    /// Returns the short code used in tabular input.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Revolving => "revolving",
            Self::Installment => "installment",
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revolving" | "card" | "credit card" => Ok(Self::Revolving),
            "installment" | "loan" => Ok(Self::Installment),
            other => Err(format!(
                "unknown account type '{other}' (expected revolving or installment)"
            )),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
