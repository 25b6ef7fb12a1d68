//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod saw;

pub use saw::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult,
    ExportRankingHandler, ExportRankingQuery, ExportedRanking, GetLatestEvaluationHandler,
    GetLatestEvaluationQuery,
};
