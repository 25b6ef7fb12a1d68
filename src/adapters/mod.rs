//! Adapters - Implementations of port interfaces.
//!
//! - `cache` - Where the latest evaluation lives between requests
//! - `export` - Text formats for downloading a ranking
//! - `http` - axum routes for collecting input and presenting results

pub mod cache;
pub mod export;
pub mod http;

pub use cache::InMemoryRankingCache;
pub use export::CsvRankingExporter;
