//! ExportRankingHandler - Query handler producing a downloadable ranking.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, EvaluationId};
use crate::ports::{ExportFormat, RankingCache, RankingExporter};

/// Query to export the cached ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportRankingQuery;

/// An exported ranking, ready to be sent as a file.
#[derive(Debug, Clone)]
pub struct ExportedRanking {
    pub evaluation_id: EvaluationId,
    pub format: ExportFormat,
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Handler for exporting the latest ranking.
pub struct ExportRankingHandler {
    cache: Arc<dyn RankingCache>,
    exporter: Arc<dyn RankingExporter>,
}

impl ExportRankingHandler {
    pub fn new(cache: Arc<dyn RankingCache>, exporter: Arc<dyn RankingExporter>) -> Self {
        Self { cache, exporter }
    }

    pub async fn handle(&self, _query: ExportRankingQuery) -> Result<ExportedRanking, DomainError> {
        let record = self.cache.latest().await.ok_or_else(|| {
            DomainError::new(ErrorCode::ResultNotFound, "No ranking available to export")
        })?;

        let body = self.exporter.export(record.ranking()).map_err(|e| {
            DomainError::new(ErrorCode::ExportFailed, e.to_string())
                .with_detail("evaluation_id", record.id().to_string())
        })?;

        debug!(
            evaluation_id = %record.id(),
            format = ?self.exporter.format(),
            bytes = body.len(),
            "Ranking exported"
        );

        Ok(ExportedRanking {
            evaluation_id: record.id(),
            format: self.exporter.format(),
            file_name: self.exporter.file_name().to_string(),
            content_type: self.exporter.content_type(),
            body,
        })
    }
}
