//! Tradeline record representation.

use super::AccountType;
use crate::error::{TradelineError, TradelineResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single reported credit account.
///
/// Records are immutable inputs to an analysis run. Construct them with
/// [`TradelineRecord::new`] or [`TradelineRecord::parse`] to validate at
/// ingestion time; records built by other means are validated again by the
/// analyzer before any metric is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradelineRecord {
    /// Display name of the account. Not required to be unique.
    pub account_name: String,

    /// Current balance owed.
    pub balance: Decimal,

    /// Credit limit, or original principal for installment loans.
    pub limit: Decimal,

    /// Annual percentage rate in percent units (24.99 means 24.99%).
    pub apr: Decimal,

    /// Declared account type, absent in legacy inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
}

impl TradelineRecord {
    /// Creates a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`TradelineError::InvalidTradeline`] if the name is blank or
    /// any amount is negative. A zero limit is accepted here; whether it is
    /// usable is decided by the analyzer's zero-limit policy.
    pub fn new(
        account_name: impl Into<String>,
        balance: Decimal,
        limit: Decimal,
        apr: Decimal,
    ) -> TradelineResult<Self> {
        let record = Self {
            account_name: account_name.into(),
            balance,
            limit,
            apr,
            account_type: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Ingests a record from text fields, as supplied by forms or files.
    ///
    /// # Errors
    ///
    /// Returns [`TradelineError::InvalidTradeline`] if any numeric field is
    /// not a plain decimal number, or if the parsed record fails validation.
    pub fn parse(account_name: &str, balance: &str, limit: &str, apr: &str) -> TradelineResult<Self> {
        let name = account_name.trim();
        let balance = parse_amount(name, "balance", balance)?;
        let limit = parse_amount(name, "limit", limit)?;
        let apr = parse_amount(name, "apr", apr)?;
        Self::new(name, balance, limit, apr)
    }

    /// Sets the declared account type.
    #[must_use]
    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    /// Checks the record invariants that hold regardless of policy.
    ///
    /// # Errors
    ///
    /// Returns [`TradelineError::InvalidTradeline`] describing the first
    /// violated invariant.
    pub fn validate(&self) -> TradelineResult<()> {
        if self.account_name.trim().is_empty() {
            return Err(TradelineError::invalid_tradeline(
                &self.account_name,
                "account_name cannot be empty",
            ));
        }

        if self.balance < Decimal::ZERO {
            return Err(self.invalid("balance cannot be negative"));
        }

        if self.limit < Decimal::ZERO {
            return Err(self.invalid("limit cannot be negative"));
        }

        if self.apr < Decimal::ZERO {
            return Err(self.invalid("apr cannot be negative"));
        }

        Ok(())
    }

    /// Returns true if the limit can be used as a utilization denominator.
    #[must_use]
    pub fn has_positive_limit(&self) -> bool {
        self.limit > Decimal::ZERO
    }

    /// Builds an [`TradelineError::InvalidTradeline`] for this record.
    #[must_use]
    pub fn invalid(&self, reason: impl Into<String>) -> TradelineError {
        TradelineError::invalid_tradeline(&self.account_name, reason)
    }
}

fn parse_amount(account: &str, field: &str, text: &str) -> TradelineResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TradelineError::invalid_tradeline(
            account,
            format!("{field} is missing"),
        ));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            TradelineError::invalid_tradeline(
                account,
                format!("{field} '{trimmed}' is not a number"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_valid() {
        let record =
            TradelineRecord::new("Chase Freedom", dec!(4500), dec!(5000), dec!(24.99)).unwrap();
        assert_eq!(record.account_name, "Chase Freedom");
        assert_eq!(record.balance, dec!(4500));
        assert!(record.account_type.is_none());
        assert!(record.has_positive_limit());
    }

    #[test]
    fn test_zero_limit_accepted_at_construction() {
        let record = TradelineRecord::new("Closed Card", dec!(0), dec!(0), dec!(0)).unwrap();
        assert!(!record.has_positive_limit());
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let err = TradelineRecord::new("A", dec!(-1), dec!(100), dec!(10)).unwrap_err();
        assert!(err.to_string().contains("balance cannot be negative"));

        let err = TradelineRecord::new("A", dec!(1), dec!(-100), dec!(10)).unwrap_err();
        assert!(err.to_string().contains("limit cannot be negative"));

        let err = TradelineRecord::new("A", dec!(1), dec!(100), dec!(-0.5)).unwrap_err();
        assert!(err.to_string().contains("apr cannot be negative"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = TradelineRecord::new("   ", dec!(1), dec!(100), dec!(10)).unwrap_err();
        assert!(err.is_invalid_tradeline());
    }

    #[test]
    fn test_parse() {
        let record = TradelineRecord::parse(" Capital One ", "800", "1000.00", " 21.0").unwrap();
        assert_eq!(record.account_name, "Capital One");
        assert_eq!(record.limit, dec!(1000));
        assert_eq!(record.apr, dec!(21));
    }

    #[test]
    fn test_parse_malformed() {
        let err = TradelineRecord::parse("Card", "12O0", "5000", "19.9").unwrap_err();
        assert_eq!(
            err,
            TradelineError::invalid_tradeline("Card", "balance '12O0' is not a number")
        );

        let err = TradelineRecord::parse("Card", "100", "", "19.9").unwrap_err();
        assert!(err.to_string().contains("limit is missing"));

        assert!(TradelineRecord::parse("Card", "100", "5000", "NaN").is_err());
    }

    #[test]
    fn test_parse_scientific_notation() {
        let record = TradelineRecord::parse("Card", "1.5e3", "5E3", "2.499e1").unwrap();
        assert_eq!(record.balance, dec!(1500));
        assert_eq!(record.limit, dec!(5000));
        assert_eq!(record.apr, dec!(24.99));
    }

    #[test]
    fn test_with_account_type() {
        let record = TradelineRecord::new("Auto Loan", dec!(12000), dec!(15000), dec!(5.5))
            .unwrap()
            .with_account_type(AccountType::Installment);
        assert_eq!(record.account_type, Some(AccountType::Installment));
    }

    #[test]
    fn test_serde_legacy_json() {
        let json = r#"{"account_name":"Card","balance":100,"limit":1000,"apr":19.99}"#;
        let record: TradelineRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.balance, dec!(100));
        assert_eq!(record.apr, dec!(19.99));
        assert!(record.account_type.is_none());

        let out = serde_json::to_string(&record).unwrap();
        assert!(!out.contains("account_type"));
    }
}
