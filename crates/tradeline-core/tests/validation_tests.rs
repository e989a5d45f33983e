//! Randomized validation tests for tradeline ingestion.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tradeline_core::prelude::*;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

proptest! {
    #[test]
    fn parse_matches_typed_constructor(
        balance in 0i64..100_000_000,
        limit in 1i64..100_000_000,
        apr in 0i64..5_000,
    ) {
        let (b, l, a) = (cents(balance), cents(limit), cents(apr));
        let parsed = TradelineRecord::parse(
            "Card",
            &b.to_string(),
            &l.to_string(),
            &a.to_string(),
        ).unwrap();
        let typed = TradelineRecord::new("Card", b, l, a).unwrap();
        prop_assert_eq!(parsed, typed);
    }

    #[test]
    fn negative_balance_always_rejected(balance in 1i64..100_000_000, limit in 0i64..100_000_000) {
        let result = TradelineRecord::new("Card", -cents(balance), cents(limit), Decimal::ZERO);
        prop_assert!(result.as_ref().is_err_and(TradelineError::is_invalid_tradeline));
    }

    #[test]
    fn negative_limit_always_rejected(limit in 1i64..100_000_000) {
        let result = TradelineRecord::new("Card", Decimal::ZERO, -cents(limit), Decimal::ZERO);
        prop_assert!(result.as_ref().is_err_and(TradelineError::is_invalid_tradeline));
    }

    #[test]
    fn non_numeric_text_rejected(text in "[a-zA-Z$%#]{1,8}") {
        let result = TradelineRecord::parse("Card", &text, "1000", "19.99");
        prop_assert!(result.is_err());
    }
}

#[test]
fn sample_portfolio_round_trips_through_json() {
    let records = sample_portfolio();
    let json = serde_json::to_string(&records).unwrap();
    let parsed: Vec<TradelineRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, records);
}
