//! Tabular import and export.
//!
//! Works on any `Read`/`Write`; opening files is left to the caller.
//!
//! CSV input rows use the headers `Account,Balance,Limit,APR` with an
//! optional `Type` column (`revolving` / `installment`). Lower-case headers
//! are also accepted, and unknown columns are ignored, so an exported
//! account table can be fed back in.
//!
//! JSON input is an array of objects with `account_name`, `balance`,
//! `limit`, `apr` and optional `account_type`. Amounts may be numbers or
//! numeric strings. Both formats go through [`TradelineRecord::parse`].

use crate::analytics::{AccountRow, PortfolioReport};
use serde::Deserialize;
use serde_json::Value;
use std::io::{Read, Write};
use tradeline_core::{AccountType, TradelineError, TradelineRecord, TradelineResult};

/// Header row of the exported account table.
pub const ACCOUNT_TABLE_HEADERS: [&str; 5] = ["Account", "Balance", "Limit", "Utilization", "APR"];

/// Raw CSV input row. Numbers stay as text until validated.
#[derive(Debug, Deserialize)]
struct TradelineRow {
    #[serde(rename = "Account", alias = "account", alias = "account_name")]
    account: String,
    #[serde(rename = "Balance", alias = "balance")]
    balance: String,
    #[serde(rename = "Limit", alias = "limit")]
    limit: String,
    #[serde(rename = "APR", alias = "apr")]
    apr: String,
    #[serde(rename = "Type", alias = "type", alias = "account_type", default)]
    account_type: Option<String>,
}

impl TradelineRow {
    fn into_record(self) -> TradelineResult<TradelineRecord> {
        let record = TradelineRecord::parse(&self.account, &self.balance, &self.limit, &self.apr)?;
        with_declared_type(record, self.account_type.as_deref())
    }
}

/// Raw JSON input object. Amounts are kept as JSON values until validated.
#[derive(Debug, Deserialize)]
struct JsonTradeline {
    #[serde(default, alias = "account", alias = "Account")]
    account_name: String,
    #[serde(default)]
    balance: Option<Value>,
    #[serde(default)]
    limit: Option<Value>,
    #[serde(default)]
    apr: Option<Value>,
    #[serde(default, alias = "type")]
    account_type: Option<String>,
}

impl JsonTradeline {
    fn into_record(self) -> TradelineResult<TradelineRecord> {
        let record = TradelineRecord::parse(
            &self.account_name,
            &amount_text(self.balance.as_ref()),
            &amount_text(self.limit.as_ref()),
            &amount_text(self.apr.as_ref()),
        )?;
        with_declared_type(record, self.account_type.as_deref())
    }
}

/// Numbers and strings pass through as text; anything else is left for
/// the parser to reject as not a number.
fn amount_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn with_declared_type(
    record: TradelineRecord,
    account_type: Option<&str>,
) -> TradelineResult<TradelineRecord> {
    match account_type.map(str::trim) {
        None | Some("") => Ok(record),
        Some(text) => {
            let account_type: AccountType = text
                .parse()
                .map_err(|reason: String| record.invalid(reason))?;
            Ok(record.with_account_type(account_type))
        }
    }
}

/// Reads tradelines from CSV.
///
/// Ingestion is fail-fast: the first malformed or invalid row aborts the
/// read with an `InvalidRow` error carrying its 1-based data row number.
pub fn read_tradelines_csv<R: Read>(reader: R) -> TradelineResult<Vec<TradelineRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<TradelineRow>().enumerate() {
        let row = index + 1;
        let raw = result.map_err(|e| TradelineError::csv(e).at_row(row))?;
        let record = raw.into_record().map_err(|e| e.at_row(row))?;
        records.push(record);
    }

    Ok(records)
}

/// Reads tradelines from a JSON array.
///
/// Fail-fast like [`read_tradelines_csv`]: the first invalid element aborts
/// the read with an `InvalidRow` error carrying its 1-based position.
/// Input that is not an array of objects is a `Json` error.
pub fn read_tradelines_json<R: Read>(reader: R) -> TradelineResult<Vec<TradelineRecord>> {
    let raw: Vec<JsonTradeline> = serde_json::from_reader(reader).map_err(TradelineError::json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, item)| item.into_record().map_err(|e| e.at_row(index + 1)))
        .collect()
}

/// Writes the per-account table (`Account,Balance,Limit,Utilization,APR`).
///
/// The header row is always written, even for an empty report. Numbers are
/// written as plain decimal text.
pub fn write_account_table_csv<W: Write>(report: &PortfolioReport, writer: W) -> TradelineResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(ACCOUNT_TABLE_HEADERS)
        .map_err(TradelineError::csv)?;
    for row in report.account_rows() {
        wtr.serialize(row).map_err(TradelineError::csv)?;
    }
    wtr.flush().map_err(TradelineError::csv)?;
    Ok(())
}

/// Reads an account table previously written by [`write_account_table_csv`].
pub fn read_account_table_csv<R: Read>(reader: R) -> TradelineResult<Vec<AccountRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    rdr.deserialize::<AccountRow>()
        .enumerate()
        .map(|(index, result)| result.map_err(|e| TradelineError::csv(e).at_row(index + 1)))
        .collect()
}
