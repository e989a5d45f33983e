//! Tradeline analytics.
//!
//! This module provides the analysis pipeline:
//! - Per-account utilization and monthly interest
//! - Portfolio totals and overall utilization
//! - Score-potential heuristic
//! - Paydown quests
//! - Credit-mix check
//!
//! All functions are pure - they take records and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod aggregate;
mod credit_mix;
mod metrics;
mod parallel;
mod quests;
mod score;
mod summary;

pub use aggregate::*;
pub use credit_mix::*;
pub use metrics::*;
pub use parallel::*;
pub use quests::*;
pub use score::*;
pub use summary::*;
