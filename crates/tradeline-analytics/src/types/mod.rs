//! Domain types for tradeline analytics.
//!
//! - [`DerivedMetrics`]: Utilization and monthly interest for one account
//! - [`Quest`]: A per-account paydown directive
//! - [`AnalyzerConfig`]: Heuristic tables and computation settings
//! - [`ZeroLimitPolicy`], [`CreditMixStrategy`]: Policies for ambiguous inputs

mod config;
mod metrics;
mod policy;
mod quest;

pub use config::{
    AnalyzerConfig, CreditMixConfig, QuestThresholds, ScoreHeuristic, HEALTHY_UTILIZATION_CEILING,
    INSTALLMENT_LIMIT_THRESHOLD, QUEST_TARGET_UTILIZATION, QUEST_TRIGGER_UTILIZATION,
    SCORE_BASE_POINTS, SCORE_HIGH_POINTS, SCORE_HIGH_UTILIZATION_THRESHOLD,
    SCORE_MODERATE_POINTS, SCORE_MODERATE_UTILIZATION_THRESHOLD,
};
pub use metrics::DerivedMetrics;
pub use policy::{CreditMixStrategy, ZeroLimitPolicy};
pub use quest::Quest;
