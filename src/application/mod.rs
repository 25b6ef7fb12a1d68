//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates the evaluation command (which writes the
//! ranking cache) from the query handlers that only read it.

pub mod handlers;

pub use handlers::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult,
    ExportRankingHandler, ExportRankingQuery, ExportedRanking, GetLatestEvaluationHandler,
    GetLatestEvaluationQuery,
};
