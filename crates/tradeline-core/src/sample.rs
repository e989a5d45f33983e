//! Built-in demonstration portfolio.

use crate::types::TradelineRecord;
use rust_decimal_macros::dec;

/// Returns the three-account demo portfolio: two credit cards and an auto loan.
///
/// Account types are left undeclared so the portfolio exercises the legacy
/// limit-size credit-mix proxy.
#[must_use]
pub fn sample_portfolio() -> Vec<TradelineRecord> {
    vec![
        TradelineRecord {
            account_name: "Chase Freedom".to_string(),
            balance: dec!(4500),
            limit: dec!(5000),
            apr: dec!(24.99),
            account_type: None,
        },
        TradelineRecord {
            account_name: "Capital One Quicksilver".to_string(),
            balance: dec!(800),
            limit: dec!(1000),
            apr: dec!(21.0),
            account_type: None,
        },
        TradelineRecord {
            account_name: "Auto Loan".to_string(),
            balance: dec!(12000),
            limit: dec!(15000),
            apr: dec!(5.5),
            account_type: None,
        },
    ]
}
