//! Analyze command implementation.
//!
//! Loads tradelines from a file, runs the analyzer, and renders the
//! dashboard.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tabled::Tabled;
use tracing::info;

use tradeline_analytics::{
    analyze_with, read_tradelines_csv, read_tradelines_json, write_account_table_csv,
    PortfolioReport, Quest,
};
use tradeline_core::TradelineRecord;

use crate::cli::OutputFormat;
use crate::commands::ReportOptions;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_money, format_percent, format_rate, print_alert, print_header, print_output,
    print_success, print_warning, KeyValue,
};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Tradeline file (.csv or .json)
    pub input: std::path::PathBuf,

    #[command(flatten)]
    pub options: ReportOptions,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let records = load_tradelines(&args.input)
        .with_context(|| format!("Failed to load tradelines from {}", args.input.display()))?;
    info!(count = records.len(), input = %args.input.display(), "loaded tradelines");

    run_report(&records, &args.options, format, quiet)
}

/// Analyzes records and renders the report. Shared with `sample`.
pub fn run_report(
    records: &[TradelineRecord],
    options: &ReportOptions,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let (config, source) = crate::config::resolve(options.config.as_deref())?;
    if let Some(path) = &source {
        info!(path = %path.display(), "using analyzer config");
    }

    let report = analyze_with(records, &config)?;

    if let Some(path) = &options.export {
        export_table(&report, path)?;
        if !quiet && format == OutputFormat::Table {
            print_success(&format!("Exported account table to {}", path.display()));
        }
    }

    render_report(&report, format, quiet)
}

/// Reads tradelines, choosing the format from the file extension.
pub fn load_tradelines(path: &Path) -> CliResult<Vec<TradelineRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => {
            let file = File::open(path)?;
            Ok(read_tradelines_csv(BufReader::new(file))?)
        }
        Some("json") => {
            let file = File::open(path)?;
            Ok(read_tradelines_json(BufReader::new(file))?)
        }
        _ => Err(CliError::UnsupportedInput(path.to_path_buf())),
    }
}

fn export_table(report: &PortfolioReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_account_table_csv(report, file)?;
    info!(path = %path.display(), rows = report.account_count, "exported account table");
    Ok(())
}

/// One row of the account breakdown.
#[derive(Debug, Tabled, serde::Serialize)]
struct AccountDisplay {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "APR")]
    apr: String,
    #[tabled(rename = "Monthly Interest")]
    monthly_interest: String,
}

/// Renders a report in the requested format.
pub fn render_report(report: &PortfolioReport, format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Table => render_dashboard(report, quiet),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(())
        }
        OutputFormat::Csv => {
            write_account_table_csv(report, std::io::stdout())?;
            Ok(())
        }
        OutputFormat::Minimal => {
            println!(
                "Utilization: {}, Interest: {}/mo, Score: +{}, Paydown: {}",
                format_percent(report.overall_utilization),
                format_money(report.monthly_interest_leak),
                report.score_potential,
                format_money(report.total_paydown()),
            );
            Ok(())
        }
    }
}

fn render_dashboard(report: &PortfolioReport, quiet: bool) -> Result<()> {
    let summary = vec![
        KeyValue::new("Accounts", report.account_count.to_string()),
        KeyValue::from_money("Total Balance", report.total_balance),
        KeyValue::from_money("Total Limit", report.total_limit),
        KeyValue::new(
            "Overall Utilization",
            format!(
                "{} ({})",
                format_percent(report.overall_utilization),
                report.utilization_status
            ),
        ),
        KeyValue::new(
            "Monthly Interest Leak",
            format!("{}/mo", format_money(report.monthly_interest_leak)),
        ),
        KeyValue::new("Score Potential", format!("+{} pts", report.score_potential)),
    ];

    print_header("Portfolio Overview");
    print_output(&summary, OutputFormat::Table)?;

    let rows: Vec<AccountDisplay> = report
        .accounts
        .iter()
        .map(|account| AccountDisplay {
            account: account.account_name.clone(),
            balance: format_money(account.balance),
            limit: format_money(account.limit),
            utilization: format_percent(account.utilization),
            apr: format_rate(account.apr),
            monthly_interest: format_money(account.monthly_interest),
        })
        .collect();

    print_header("Accounts");
    print_output(&rows, OutputFormat::Table)?;

    if !quiet {
        for account in report.accounts.iter().filter(|a| a.metrics().is_over_limit()) {
            print_warning(&format!("{} is over its limit", account.account_name));
        }
    }

    print_header("Action Plan");
    for quest in &report.quests {
        println!("{}", describe_quest(quest));
    }
    if report.quests.is_empty() {
        println!("No accounts to optimize.");
    }

    print_header("Credit Mix");
    if report.credit_mix_alert {
        print_alert("No installment loan detected. Consider a Credit Builder Loan to improve your credit mix.");
    } else {
        print_success("Installment loan present. Credit mix looks balanced.");
    }

    Ok(())
}

/// One line of the action plan.
fn describe_quest(quest: &Quest) -> String {
    match quest {
        Quest::Optimize {
            account_name,
            utilization,
            target_utilization,
            pay_amount,
            ..
        } => format!(
            "{account_name} ({}): Pay exactly {} to drop this card to {}% utilization.",
            format_percent(*utilization),
            format_money(*pay_amount),
            target_utilization.normalize(),
        ),
        Quest::Complete {
            account_name,
            utilization,
        } => format!(
            "{account_name} ({}): already optimized.",
            format_percent(*utilization)
        ),
    }
}
