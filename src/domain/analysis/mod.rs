//! Analysis Module - Pure domain services for decision analysis.
//!
//! This module contains the Simple Additive Weighting (SAW) engine: stateless
//! functions that turn criteria and a raw decision matrix into a ranking.
//!
//! # Components
//!
//! - `Criterion` / `CriterionKind` - Weighted benefit or cost attribute
//! - `DecisionMatrix` / `NormalizedMatrix` - Dense alternatives × criteria tables
//! - `WeightValidator` - Zero-total check, auto-normalization, sum warnings
//! - `SawNormalizer` - Benefit (`raw / max`) and cost (`min / raw`) scaling
//! - `SawRanker` - Weighted sums and stable descending ordering
//! - `SawEngine` - The full pipeline, returning a `SawOutcome`
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. Degenerate columns are
//! resolved by explicit substitution with 0, never by floating-point
//! infinity or NaN.

mod criterion;
mod decision_matrix;
mod normalizer;
mod notes;
mod ranker;
mod saw_engine;
mod weight_validator;

// Re-export all public types
pub use criterion::{default_criterion_name, Criterion, CriterionKind};
pub use decision_matrix::{
    default_alternative_label, default_alternative_labels, DecisionMatrix,
    DecisionMatrixBuilder, NormalizedMatrix,
};
pub use normalizer::SawNormalizer;
pub use notes::{AdvisoryNote, NoteKind, NoteSeverity};
pub use ranker::{RankedAlternative, RankingResult, SawRanker};
pub use saw_engine::{
    DecisionProblem, SawEngine, SawOptions, SawOutcome, SawReport, WeightTableRow,
};
pub use weight_validator::{
    ValidatedWeights, WeightValidator, WeightVector, ZeroWeightError,
    WEIGHT_SUM_ABSOLUTE_TOLERANCE, WEIGHT_SUM_RELATIVE_TOLERANCE,
};
