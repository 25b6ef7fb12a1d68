//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RankingCache` - Last successful evaluation, kept for re-display
//! - `RankingExporter` - Delimited-text export of a ranking

mod ranking_cache;
mod ranking_exporter;

pub use ranking_cache::RankingCache;
pub use ranking_exporter::{ExportError, ExportFormat, RankingExporter};
