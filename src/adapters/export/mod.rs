//! Export Adapters
//!
//! Implementations of the RankingExporter port.
//!
//! ## Available Adapters
//!
//! - **CsvRankingExporter** - `Alternative,Score` comma-separated text

mod csv_ranking_exporter;

pub use csv_ranking_exporter::CsvRankingExporter;
