//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `analysis` - Pure SAW scoring engine (normalization, weights, ranking)
//! - `evaluation` - A completed, timestamped evaluation as kept for re-display

pub mod analysis;
pub mod evaluation;
pub mod foundation;
