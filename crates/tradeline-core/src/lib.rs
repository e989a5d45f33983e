//! # Tradeline Core
//!
//! Core types and error taxonomy for the Tradeline credit analytics engine.
//!
//! - **Types**: [`TradelineRecord`] and [`AccountType`]
//! - **Validation**: ingestion-time checks that reject malformed records
//! - **Errors**: the single [`TradelineError`] taxonomy shared by every crate
//!
//! Monetary amounts and rates are [`rust_decimal::Decimal`], so no derived
//! metric can ever be NaN or infinite.
//!
//! ## Example
//!
//! ```rust
//! use tradeline_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let card = TradelineRecord::new("Chase Freedom", dec!(4500), dec!(5000), dec!(24.99)).unwrap();
//! assert!(card.has_positive_limit());
//!
//! let bad = TradelineRecord::parse("Store Card", "n/a", "500", "29.99");
//! assert!(bad.is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod sample;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{TradelineError, TradelineResult};
    pub use crate::sample::sample_portfolio;
    pub use crate::types::{AccountType, TradelineRecord};
    pub use rust_decimal::Decimal;
}

// Re-export commonly used types at crate root
pub use error::{TradelineError, TradelineResult};
pub use sample::sample_portfolio;
pub use types::{AccountType, TradelineRecord};
