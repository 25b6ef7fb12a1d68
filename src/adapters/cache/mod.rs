//! Cache Adapters
//!
//! Implementations of the RankingCache port.
//!
//! ## Available Adapters
//!
//! - **InMemoryRankingCache** - Process-wide slot behind an async `RwLock`

mod in_memory_ranking_cache;

pub use in_memory_ranking_cache::InMemoryRankingCache;
