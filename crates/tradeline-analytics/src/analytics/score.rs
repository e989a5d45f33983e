//! Score-potential heuristic and dashboard status.

use crate::types::{AnalyzerConfig, ScoreHeuristic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estimates score points recoverable by lowering overall utilization.
///
/// Fixed step table: above 30% → 45, above 10% → 20, otherwise 0.
/// Values exactly at 30 or 10 fall into the lower bucket.
#[must_use]
pub fn estimate_score_potential(overall_utilization: Decimal) -> u32 {
    ScoreHeuristic::default().points_for(overall_utilization)
}

/// Headline status shown next to overall utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationStatus {
    /// Below the healthy ceiling.
    Healthy,
    /// At or above the healthy ceiling.
    High,
}

impl UtilizationStatus {
    /// Classifies an overall utilization percentage.
    #[must_use]
    pub fn classify(overall_utilization: Decimal, config: &AnalyzerConfig) -> Self {
        if overall_utilization < config.healthy_utilization_ceiling {
            Self::Healthy
        } else {
            Self::High
        }
    }

    /// Returns the dashboard label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::High => "HIGH",
        }
    }
}

impl std::fmt::Display for UtilizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
