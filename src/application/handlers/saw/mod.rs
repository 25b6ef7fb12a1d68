//! SAW evaluation command and query handlers.

mod evaluate_decision;
mod export_ranking;
mod get_latest_evaluation;

pub use evaluate_decision::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult,
};
pub use export_ranking::{ExportRankingHandler, ExportRankingQuery, ExportedRanking};
pub use get_latest_evaluation::{GetLatestEvaluationHandler, GetLatestEvaluationQuery};
