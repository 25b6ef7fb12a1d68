//! HTTP adapter for SAW evaluation endpoints.
//!
//! Acts as both the data collector (request validation and defaults) and
//! the presenter (ranking, summary, notes, detail tables, CSV download).

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CollectorLimits, CriterionInput, DetailTables, ErrorResponse, EvaluateRequest,
    EvaluationRejectedResponse, EvaluationResponse, MatrixView, OptionsInput, RankingSummary,
};
pub use handlers::{SawApiError, SawAppState};
pub use routes::saw_router;
