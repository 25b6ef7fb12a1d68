//! GetLatestEvaluationHandler - Query handler for the cached evaluation.

use std::sync::Arc;

use crate::domain::evaluation::EvaluationRecord;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::RankingCache;

/// Query for the most recent successful evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetLatestEvaluationQuery;

/// Handler for re-displaying the latest evaluation without recomputing it.
pub struct GetLatestEvaluationHandler {
    cache: Arc<dyn RankingCache>,
}

impl GetLatestEvaluationHandler {
    pub fn new(cache: Arc<dyn RankingCache>) -> Self {
        Self { cache }
    }

    pub async fn handle(
        &self,
        _query: GetLatestEvaluationQuery,
    ) -> Result<EvaluationRecord, DomainError> {
        self.cache.latest().await.ok_or_else(|| {
            DomainError::new(ErrorCode::ResultNotFound, "No evaluation has been run yet")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryRankingCache;
    use crate::domain::analysis::{
        Criterion, DecisionMatrix, DecisionProblem, SawEngine, SawOptions,
    };

    fn record() -> EvaluationRecord {
        let problem = DecisionProblem::new(
            vec![Criterion::benefit("Speed", 1.0).unwrap()],
            DecisionMatrix::with_default_labels(vec![vec![3.0], vec![6.0]]).unwrap(),
        )
        .unwrap();
        let options = SawOptions::default();
        let report = SawEngine::evaluate(&problem, &options).into_report().unwrap();
        EvaluationRecord::new(problem, options, report)
    }

    #[tokio::test]
    async fn returns_cached_record() {
        let cache = InMemoryRankingCache::new();
        let stored = record();
        cache.store(stored.clone()).await;

        let handler = GetLatestEvaluationHandler::new(Arc::new(cache));
        let found = handler.handle(GetLatestEvaluationQuery).await.unwrap();

        assert_eq!(found, stored);
        assert_eq!(found.best().unwrap().alternative, "A2");
    }

    #[tokio::test]
    async fn returns_not_found_when_cache_is_empty() {
        let handler = GetLatestEvaluationHandler::new(Arc::new(InMemoryRankingCache::new()));

        let err = handler.handle(GetLatestEvaluationQuery).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResultNotFound);
    }
}
