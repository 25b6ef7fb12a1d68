//! In-Memory Ranking Cache Adapter
//!
//! Keeps the latest evaluation in process memory. Readers never block each
//! other; a store or clear replaces the slot atomically.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::evaluation::EvaluationRecord;
use crate::ports::RankingCache;

/// In-memory slot for the most recent evaluation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRankingCache {
    latest: Arc<RwLock<Option<EvaluationRecord>>>,
}

impl InMemoryRankingCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an evaluation is currently cached
    pub async fn is_populated(&self) -> bool {
        self.latest.read().await.is_some()
    }
}

#[async_trait]
impl RankingCache for InMemoryRankingCache {
    async fn store(&self, record: EvaluationRecord) {
        *self.latest.write().await = Some(record);
    }

    async fn latest(&self) -> Option<EvaluationRecord> {
        self.latest.read().await.clone()
    }

    async fn clear(&self) {
        *self.latest.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{
        Criterion, DecisionMatrix, DecisionProblem, SawEngine, SawOptions,
    };

    fn record(values: Vec<Vec<f64>>) -> EvaluationRecord {
        let problem = DecisionProblem::new(
            vec![Criterion::benefit("K1", 1.0).unwrap()],
            DecisionMatrix::with_default_labels(values).unwrap(),
        )
        .unwrap();
        let report = SawEngine::evaluate(&problem, &SawOptions::default())
            .into_report()
            .unwrap();
        EvaluationRecord::new(problem, SawOptions::default(), report)
    }

    #[tokio::test]
    async fn new_cache_is_empty() {
        let cache = InMemoryRankingCache::new();
        assert!(cache.latest().await.is_none());
        assert!(!cache.is_populated().await);
    }

    #[tokio::test]
    async fn store_then_latest_returns_record() {
        let cache = InMemoryRankingCache::new();
        let rec = record(vec![vec![1.0], vec![2.0]]);
        let id = rec.id();

        cache.store(rec).await;

        assert_eq!(cache.latest().await.map(|r| r.id()), Some(id));
    }

    #[tokio::test]
    async fn store_overwrites_previous_record() {
        let cache = InMemoryRankingCache::new();
        cache.store(record(vec![vec![1.0]])).await;
        let newer = record(vec![vec![5.0], vec![3.0]]);
        let newer_id = newer.id();

        cache.store(newer).await;

        let latest = cache.latest().await.unwrap();
        assert_eq!(latest.id(), newer_id);
        assert_eq!(latest.ranking().len(), 2);
    }

    #[tokio::test]
    async fn clear_empties_cache() {
        let cache = InMemoryRankingCache::new();
        cache.store(record(vec![vec![1.0]])).await;

        cache.clear().await;

        assert!(cache.latest().await.is_none());
    }

    #[tokio::test]
    async fn clones_share_the_same_slot() {
        let cache = InMemoryRankingCache::new();
        let shared = cache.clone();

        cache.store(record(vec![vec![1.0]])).await;

        assert!(shared.is_populated().await);
    }
}
