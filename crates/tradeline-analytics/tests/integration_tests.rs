//! Integration tests for tradeline-analytics.
//!
//! These tests run the full pipeline on realistic portfolios.

use tradeline_analytics::prelude::*;
use tradeline_analytics::read_account_table_csv;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn tradeline(name: &str, balance: Decimal, limit: Decimal, apr: Decimal) -> TradelineRecord {
    TradelineRecord::new(name, balance, limit, apr).unwrap()
}

/// A card-only portfolio sitting just under and just over the quest trigger.
fn revolving_portfolio() -> Vec<TradelineRecord> {
    vec![
        tradeline("Store Card", dec!(290), dec!(1000), dec!(26.99)),
        tradeline("Travel Card", dec!(2910), dec!(10000), dec!(19.99)),
        tradeline("Gas Card", dec!(0), dec!(500), dec!(29.99)),
    ]
}

// =============================================================================
// END-TO-END SAMPLE
// =============================================================================

#[test]
fn test_sample_portfolio_report() {
    let report = analyze(&sample_portfolio()).unwrap();

    assert_eq!(report.account_count, 3);
    assert_eq!(report.total_balance, dec!(17300));
    assert_eq!(report.total_limit, dec!(21000));
    assert_eq!(report.overall_utilization.round_dp(2), dec!(82.38));
    assert_eq!(report.monthly_interest_leak.round_dp(2), dec!(162.71));
    assert_eq!(report.score_potential, 45);
    assert_eq!(report.utilization_status, UtilizationStatus::High);
    assert!(!report.credit_mix_alert);

    let payments: Vec<_> = report.quests.iter().map(Quest::pay_amount).collect();
    assert_eq!(
        payments,
        vec![Some(dec!(3100)), Some(dec!(520)), Some(dec!(7800))]
    );
    let names: Vec<_> = report.quests.iter().map(Quest::account_name).collect();
    assert_eq!(names, vec!["Chase Freedom", "Capital One Quicksilver", "Auto Loan"]);
}

#[test]
fn test_quests_follow_input_order_and_thresholds() {
    let report = analyze(&revolving_portfolio()).unwrap();

    assert!(report.quests[0].is_complete());
    match &report.quests[1] {
        Quest::Optimize {
            target_balance,
            pay_amount,
            ..
        } => {
            assert_eq!(*target_balance, dec!(2800));
            assert_eq!(*pay_amount, dec!(110));
        }
        other => panic!("expected an optimize quest, got {other:?}"),
    }
    assert!(report.quests[2].is_complete());
    assert_eq!(report.open_quests().count(), 1);
    assert_eq!(report.total_paydown(), dec!(110));
}

#[test]
fn test_credit_mix_alert_for_cards_only() {
    let report = analyze(&revolving_portfolio()).unwrap();
    assert!(report.credit_mix_alert);
}

#[test]
fn test_declared_installment_clears_alert() {
    let mut records = revolving_portfolio();
    records.push(
        tradeline("Credit Builder", dec!(500), dec!(600), dec!(6))
            .with_account_type(AccountType::Installment),
    );
    let report = analyze(&records).unwrap();
    assert!(!report.credit_mix_alert);

    let legacy = AnalyzerConfig::default().with_credit_mix(CreditMixConfig::legacy());
    let report = analyze_with(&records, &legacy).unwrap();
    assert!(report.credit_mix_alert);
}

#[test]
fn test_declared_revolving_large_limit_still_alerts() {
    let records = vec![tradeline("Premium Card", dec!(1000), dec!(25000), dec!(18))
        .with_account_type(AccountType::Revolving)];
    assert!(analyze(&records).unwrap().credit_mix_alert);
}

// =============================================================================
// SCORE BUCKETS
// =============================================================================

#[test]
fn test_score_buckets_through_report() {
    let cases = [
        (dec!(3100), 45),
        (dec!(3000), 20),
        (dec!(1001), 20),
        (dec!(1000), 0),
        (dec!(0), 0),
    ];
    for (balance, expected) in cases {
        let report = analyze(&[tradeline("Card", balance, dec!(10000), dec!(20))]).unwrap();
        assert_eq!(report.score_potential, expected, "balance {balance}");
    }
}

// =============================================================================
// ZERO LIMITS AND EMPTY INPUT
// =============================================================================

#[test]
fn test_zero_limit_rejected_by_default() {
    let mut records = sample_portfolio();
    records.push(tradeline("Closed Card", dec!(0), dec!(0), dec!(0)));

    let err = analyze(&records).unwrap_err();
    assert!(err.is_invalid_tradeline());
    assert!(err.to_string().contains("Closed Card"));
}

#[test]
fn test_zero_limit_policy_reports_zero_utilization() {
    let mut records = sample_portfolio();
    records.push(tradeline("Closed Card", dec!(0), dec!(0), dec!(0)));
    let config = AnalyzerConfig::default().with_zero_limit_policy(ZeroLimitPolicy::ZeroUtilization);

    let report = analyze_with(&records, &config).unwrap();
    assert_eq!(report.account_count, 4);
    assert_eq!(report.accounts[3].utilization, Decimal::ZERO);
    assert!(report.quests[3].is_complete());
    assert_eq!(report.total_limit, dec!(21000));
}

#[test]
fn test_empty_portfolio() {
    assert_eq!(analyze(&[]).unwrap_err(), TradelineError::EmptyPortfolio);

    let config = AnalyzerConfig::default().with_zero_limit_policy(ZeroLimitPolicy::ZeroUtilization);
    let report = analyze_with(&[], &config).unwrap();
    assert_eq!(report.total_balance, Decimal::ZERO);
    assert_eq!(report.overall_utilization, Decimal::ZERO);
    assert!(report.quests.is_empty());
    assert!(report.credit_mix_alert);
}

#[test]
fn test_invalid_record_aborts_whole_run() {
    let bad = TradelineRecord {
        account_name: "Broken".to_string(),
        balance: dec!(100),
        limit: dec!(1000),
        apr: dec!(-1),
        account_type: None,
    };
    let mut records = sample_portfolio();
    records.push(bad);

    let err = analyze(&records).unwrap_err();
    assert!(matches!(err, TradelineError::InvalidTradeline { .. }));
}

// =============================================================================
// CUSTOM HEURISTICS
// =============================================================================

#[test]
fn test_custom_quest_thresholds() {
    let config = AnalyzerConfig::default().with_quests(QuestThresholds {
        trigger_utilization: dec!(10),
        target_utilization: dec!(9),
    });
    let report = analyze_with(&[tradeline("Card", dec!(200), dec!(1000), dec!(20))], &config).unwrap();
    assert_eq!(report.quests[0].pay_amount(), Some(dec!(110)));
}

// =============================================================================
// CSV
// =============================================================================

#[test]
fn test_csv_import_analyze_export() {
    let input = "\
Account,Balance,Limit,APR
Chase Freedom,4500,5000,24.99
Capital One Quicksilver,800,1000,21.0
Auto Loan,12000,15000,5.5
";
    let records = read_tradelines_csv(input.as_bytes()).unwrap();
    let report = analyze(&records).unwrap();

    let mut out = Vec::new();
    write_account_table_csv(&report, &mut out).unwrap();
    let rows = read_account_table_csv(out.as_slice()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].account, "Chase Freedom");
    assert_eq!(rows[0].utilization, dec!(90));
    assert_eq!(rows[2].apr, dec!(5.5));
}

#[test]
fn test_report_json_round_trip() {
    let report = analyze(&sample_portfolio()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"status\":\"optimize\""));

    // Amounts travel as JSON numbers, so compare the exact fields only.
    let parsed: PortfolioReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.account_count, report.account_count);
    assert_eq!(parsed.total_balance, report.total_balance);
    assert_eq!(parsed.utilization_status, report.utilization_status);
    assert_eq!(parsed.quests.len(), 3);
    assert_eq!(parsed.quests[1].pay_amount(), Some(dec!(520)));
}
