//! Domain types for tradeline analytics.
//!
//! - [`TradelineRecord`]: A single reported credit account
//! - [`AccountType`]: Revolving vs installment classification

mod account_type;
mod record;

pub use account_type::AccountType;
pub use record::TradelineRecord;
