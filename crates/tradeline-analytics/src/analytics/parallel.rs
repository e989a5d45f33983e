//! Sequential or rayon-backed iteration over record slices.
//!
//! Large record sets go through rayon when the crate is built with the
//! `parallel` feature and [`AnalyzerConfig::should_parallelize`] agrees.
//! Maps keep input order. Folds must use an associative, commutative
//! reduce; the aggregation fold qualifies because interest is kept at a
//! fixed scale and every sum is checked.

use crate::types::AnalyzerConfig;

/// Applies `f` to every record-like item, returning results in input order.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AnalyzerConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

/// Folds items into an accumulator, then merges per-thread accumulators
/// with `reduce`.
///
/// The sequential path never calls `reduce`, so `fold` and `reduce` must
/// agree: folding a slice in one pass has to equal folding its halves and
/// reducing them. Totals across tradelines look like:
///
/// ```ignore
/// let total_limit = maybe_parallel_fold(
///     &records,
///     &config,
///     Decimal::ZERO,
///     |sum, record| sum + record.limit,
///     |left, right| left + right,
/// );
/// ```
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn maybe_parallel_fold<T, U, F, R>(
    items: &[T],
    config: &AnalyzerConfig,
    identity: U,
    fold: F,
    reduce: R,
) -> U
where
    T: Sync,
    U: Send + Sync + Clone,
    F: Fn(U, &T) -> U + Sync + Send,
    R: Fn(U, U) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items
                .par_iter()
                .fold(|| identity.clone(), &fold)
                .reduce(|| identity.clone(), reduce);
        }
    }

    items.iter().fold(identity, fold)
}
