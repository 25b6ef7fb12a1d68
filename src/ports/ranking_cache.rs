//! Ranking Cache Port - Holds the last successful evaluation for re-display.
//!
//! The cache never triggers recomputation. It is overwritten by each
//! completed run and cleared whenever a run fails fatally.

use async_trait::async_trait;

use crate::domain::evaluation::EvaluationRecord;

/// Port for keeping the most recent evaluation between front-end renders.
///
/// # Contract
///
/// Implementations must:
/// - Return exactly the record most recently stored, until cleared
/// - Return `None` after `clear` until the next `store`
#[async_trait]
pub trait RankingCache: Send + Sync {
    /// Replaces the cached evaluation.
    async fn store(&self, record: EvaluationRecord);

    /// Returns the cached evaluation, if any.
    async fn latest(&self) -> Option<EvaluationRecord>;

    /// Drops the cached evaluation.
    async fn clear(&self);
}
