//! Ranking Exporter Port - Serialization of a ranking for file download.
//!
//! The domain depends on this trait, while adapters (like
//! `CsvRankingExporter`) provide the concrete text format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::{RankedAlternative, RankingResult};

/// Port for turning a ranking into downloadable delimited text, and back.
///
/// # Contract
///
/// Implementations must:
/// - Write one record per ranked alternative, in rank order
/// - Preserve alternative labels and scores without rounding
/// - Parse their own output back into the same `(label, score)` pairs
pub trait RankingExporter: Send + Sync {
    /// Serializes the ranking.
    fn export(&self, ranking: &RankingResult) -> Result<String, ExportError>;

    /// Parses previously exported text. Ranks are re-derived from row order.
    fn parse(&self, text: &str) -> Result<Vec<RankedAlternative>, ExportError>;

    /// MIME type of the exported text.
    fn content_type(&self) -> &'static str;

    /// Suggested download file name.
    fn file_name(&self) -> &str;

    /// The format this exporter writes.
    fn format(&self) -> ExportFormat;
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
}

/// Errors from exporting or re-reading a ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("Ranking is empty; nothing to export")]
    EmptyRanking,

    #[error("Missing or unexpected header: {0}")]
    InvalidHeader(String),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl ExportError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ExportError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
