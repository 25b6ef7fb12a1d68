//! Route configuration for SAW endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{download_ranking, evaluate, get_latest_evaluation, SawAppState};

/// Creates the SAW router with all endpoints.
///
/// Routes:
/// - `POST /api/saw/evaluate` - Evaluate a decision problem
/// - `GET /api/saw/results/latest` - Latest successful evaluation
/// - `GET /api/saw/results/latest/ranking.csv` - Latest ranking as CSV
pub fn saw_router() -> Router<SawAppState> {
    Router::new()
        .route("/api/saw/evaluate", post(evaluate))
        .route("/api/saw/results/latest", get(get_latest_evaluation))
        .route("/api/saw/results/latest/ranking.csv", get(download_ranking))
}
