//! Configuration for tradeline analytics computation.

use super::{CreditMixStrategy, ZeroLimitPolicy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tradeline_core::{AccountType, TradelineError, TradelineRecord, TradelineResult};

/// Overall utilization above which the largest score boost applies.
pub const SCORE_HIGH_UTILIZATION_THRESHOLD: Decimal = dec!(30);

/// Points estimated for portfolios above [`SCORE_HIGH_UTILIZATION_THRESHOLD`].
pub const SCORE_HIGH_POINTS: u32 = 45;

/// Overall utilization above which a moderate score boost applies.
pub const SCORE_MODERATE_UTILIZATION_THRESHOLD: Decimal = dec!(10);

/// Points estimated for portfolios in the moderate band.
pub const SCORE_MODERATE_POINTS: u32 = 20;

/// Points estimated at or below [`SCORE_MODERATE_UTILIZATION_THRESHOLD`].
pub const SCORE_BASE_POINTS: u32 = 0;

/// Account utilization above which a paydown quest is issued.
pub const QUEST_TRIGGER_UTILIZATION: Decimal = dec!(29);

/// Utilization a paydown quest brings the account down to.
///
/// Kept one point below [`QUEST_TRIGGER_UTILIZATION`] so every issued quest
/// has a strictly positive payment.
pub const QUEST_TARGET_UTILIZATION: Decimal = dec!(28);

/// Limits above this amount are assumed to be installment loans when no
/// account type is declared.
pub const INSTALLMENT_LIMIT_THRESHOLD: Decimal = dec!(10000);

/// Overall utilization below which the dashboard reports a healthy status.
pub const HEALTHY_UTILIZATION_CEILING: Decimal = dec!(30);

/// Step table mapping overall utilization to estimated score points.
///
/// Thresholds are strict: a utilization exactly at a threshold falls into
/// the lower bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreHeuristic {
    /// Utilization above which `high_points` apply.
    pub high_threshold: Decimal,
    /// Points for the high bucket.
    pub high_points: u32,
    /// Utilization above which `moderate_points` apply.
    pub moderate_threshold: Decimal,
    /// Points for the moderate bucket.
    pub moderate_points: u32,
    /// Points at or below `moderate_threshold`.
    pub base_points: u32,
}

impl Default for ScoreHeuristic {
    fn default() -> Self {
        Self {
            high_threshold: SCORE_HIGH_UTILIZATION_THRESHOLD,
            high_points: SCORE_HIGH_POINTS,
            moderate_threshold: SCORE_MODERATE_UTILIZATION_THRESHOLD,
            moderate_points: SCORE_MODERATE_POINTS,
            base_points: SCORE_BASE_POINTS,
        }
    }
}

impl ScoreHeuristic {
    /// Returns the estimated points for an overall utilization percentage.
    #[must_use]
    pub fn points_for(&self, overall_utilization: Decimal) -> u32 {
        if overall_utilization > self.high_threshold {
            self.high_points
        } else if overall_utilization > self.moderate_threshold {
            self.moderate_points
        } else {
            self.base_points
        }
    }
}

/// Trigger and target utilizations for paydown quests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestThresholds {
    /// Account utilization above which a quest is issued.
    pub trigger_utilization: Decimal,
    /// Utilization the quest's payment brings the account to.
    pub target_utilization: Decimal,
}

impl Default for QuestThresholds {
    fn default() -> Self {
        Self {
            trigger_utilization: QUEST_TRIGGER_UTILIZATION,
            target_utilization: QUEST_TARGET_UTILIZATION,
        }
    }
}

/// Settings for the credit-mix check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditMixConfig {
    /// How installment loans are detected.
    pub strategy: CreditMixStrategy,
    /// Limits strictly above this amount count as installment loans under
    /// the limit-size proxy.
    pub installment_limit_threshold: Decimal,
}

impl Default for CreditMixConfig {
    fn default() -> Self {
        Self {
            strategy: CreditMixStrategy::default(),
            installment_limit_threshold: INSTALLMENT_LIMIT_THRESHOLD,
        }
    }
}

impl CreditMixConfig {
    /// Configuration using only the limit-size proxy, ignoring declared types.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            strategy: CreditMixStrategy::LimitProxy,
            ..Self::default()
        }
    }

    /// Returns true if the record counts as an installment loan.
    #[must_use]
    pub fn counts_as_installment(&self, record: &TradelineRecord) -> bool {
        let by_limit = record.limit > self.installment_limit_threshold;
        match self.strategy {
            CreditMixStrategy::LimitProxy => by_limit,
            CreditMixStrategy::DeclaredType => match record.account_type {
                Some(account_type) => account_type == AccountType::Installment,
                None => by_limit,
            },
        }
    }
}

/// Configuration for tradeline analytics computation.
///
/// Controls parallelism, zero-limit handling, and every heuristic table.
/// Missing fields deserialize to their defaults, so partial config files
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum record count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// How zero limits are handled.
    pub zero_limit_policy: ZeroLimitPolicy,

    /// Overall utilization below which the portfolio is reported healthy.
    pub healthy_utilization_ceiling: Decimal,

    /// Score-potential step table.
    pub score: ScoreHeuristic,

    /// Paydown quest thresholds.
    pub quests: QuestThresholds,

    /// Credit-mix detection settings.
    pub credit_mix: CreditMixConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            zero_limit_policy: ZeroLimitPolicy::default(),
            healthy_utilization_ceiling: HEALTHY_UTILIZATION_CEILING,
            score: ScoreHeuristic::default(),
            quests: QuestThresholds::default(),
            credit_mix: CreditMixConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the zero-limit policy.
    #[must_use]
    pub fn with_zero_limit_policy(mut self, policy: ZeroLimitPolicy) -> Self {
        self.zero_limit_policy = policy;
        self
    }

    /// Sets the score-potential table.
    #[must_use]
    pub fn with_score(mut self, score: ScoreHeuristic) -> Self {
        self.score = score;
        self
    }

    /// Sets the quest thresholds.
    #[must_use]
    pub fn with_quests(mut self, quests: QuestThresholds) -> Self {
        self.quests = quests;
        self
    }

    /// Sets the credit-mix settings.
    #[must_use]
    pub fn with_credit_mix(mut self, credit_mix: CreditMixConfig) -> Self {
        self.credit_mix = credit_mix;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks that the heuristic tables are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`TradelineError::InvalidConfig`] if a threshold is negative,
    /// the score thresholds are out of order, or the quest target exceeds
    /// the trigger (which would allow non-positive payments).
    pub fn validate(&self) -> TradelineResult<()> {
        let score = &self.score;
        if score.moderate_threshold < Decimal::ZERO {
            return Err(TradelineError::invalid_config(
                "score.moderate_threshold cannot be negative",
            ));
        }
        if score.moderate_threshold > score.high_threshold {
            return Err(TradelineError::invalid_config(format!(
                "score.moderate_threshold ({}) exceeds score.high_threshold ({})",
                score.moderate_threshold, score.high_threshold
            )));
        }

        let quests = &self.quests;
        if quests.target_utilization < Decimal::ZERO {
            return Err(TradelineError::invalid_config(
                "quests.target_utilization cannot be negative",
            ));
        }
        if quests.target_utilization > quests.trigger_utilization {
            return Err(TradelineError::invalid_config(format!(
                "quests.target_utilization ({}) exceeds quests.trigger_utilization ({})",
                quests.target_utilization, quests.trigger_utilization
            )));
        }

        if self.credit_mix.installment_limit_threshold < Decimal::ZERO {
            return Err(TradelineError::invalid_config(
                "credit_mix.installment_limit_threshold cannot be negative",
            ));
        }

        Ok(())
    }
}
