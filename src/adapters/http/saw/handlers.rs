//! HTTP handlers for SAW endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::handlers::saw::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult,
    ExportRankingHandler, ExportRankingQuery, GetLatestEvaluationHandler,
    GetLatestEvaluationQuery,
};
use crate::config::EngineConfig;
use crate::domain::analysis::{AdvisoryNote, NoteKind, SawOptions};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{RankingCache, RankingExporter};

use super::dto::{
    CollectorLimits, ErrorResponse, EvaluateRequest, EvaluationRejectedResponse,
    EvaluationResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for SAW routes.
#[derive(Clone)]
pub struct SawAppState {
    pub cache: Arc<dyn RankingCache>,
    pub exporter: Arc<dyn RankingExporter>,
    pub defaults: SawOptions,
    pub limits: CollectorLimits,
}

impl SawAppState {
    pub fn new(
        cache: Arc<dyn RankingCache>,
        exporter: Arc<dyn RankingExporter>,
        engine: &EngineConfig,
    ) -> Self {
        Self {
            cache,
            exporter,
            defaults: engine.default_options(),
            limits: CollectorLimits {
                max_alternatives: engine.max_alternatives,
                max_criteria: engine.max_criteria,
            },
        }
    }

    pub fn evaluate_handler(&self) -> EvaluateDecisionHandler {
        EvaluateDecisionHandler::new(self.cache.clone())
    }

    pub fn latest_handler(&self) -> GetLatestEvaluationHandler {
        GetLatestEvaluationHandler::new(self.cache.clone())
    }

    pub fn export_handler(&self) -> ExportRankingHandler {
        ExportRankingHandler::new(self.cache.clone(), self.exporter.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/saw/evaluate - Run an evaluation and cache the result
pub async fn evaluate(
    State(state): State<SawAppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SawApiError> {
    let Json(request) = payload.map_err(|e| SawApiError::BadRequest(e.body_text()))?;

    let options = request.options.resolve(state.defaults);
    let problem = request.into_problem(state.limits)?;

    let cmd = EvaluateDecisionCommand { problem, options };
    match state.evaluate_handler().handle(cmd).await {
        EvaluateDecisionResult::Ranked(record) => {
            Ok((StatusCode::OK, Json(EvaluationResponse::from(&record))))
        }
        EvaluateDecisionResult::Rejected(note) => Err(SawApiError::Rejected(note)),
    }
}

/// GET /api/saw/results/latest - Re-display the cached evaluation
pub async fn get_latest_evaluation(
    State(state): State<SawAppState>,
) -> Result<impl IntoResponse, SawApiError> {
    let record = state
        .latest_handler()
        .handle(GetLatestEvaluationQuery)
        .await?;

    Ok(Json(EvaluationResponse::from(&record)))
}

/// GET /api/saw/results/latest/ranking.csv - Download the cached ranking
pub async fn download_ranking(
    State(state): State<SawAppState>,
) -> Result<impl IntoResponse, SawApiError> {
    let exported = state.export_handler().handle(ExportRankingQuery).await?;

    let headers = [
        (header::CONTENT_TYPE, exported.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", exported.file_name),
        ),
    ];

    Ok((StatusCode::OK, headers, exported.body))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for SAW endpoints.
#[derive(Debug)]
pub enum SawApiError {
    /// Body could not be read as an evaluation request.
    BadRequest(String),
    /// Collector input failed validation.
    Validation(DomainError),
    /// The engine stopped on a fatal note.
    Rejected(AdvisoryNote),
    NotFound(String),
    Internal(String),
}

impl From<DomainError> for SawApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ResultNotFound => SawApiError::NotFound(err.message),
            ErrorCode::ValidationFailed => SawApiError::Validation(err),
            ErrorCode::ZeroWeight | ErrorCode::ExportFailed | ErrorCode::InternalError => {
                SawApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<ValidationError> for SawApiError {
    fn from(err: ValidationError) -> Self {
        SawApiError::Validation(err.into())
    }
}

impl IntoResponse for SawApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            SawApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(msg))).into_response()
            }
            SawApiError::Validation(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&err))).into_response()
            }
            SawApiError::Rejected(note) => {
                let code = match note.kind {
                    NoteKind::ZeroWeight => ErrorCode::ZeroWeight,
                    _ => ErrorCode::ValidationFailed,
                };
                let body = EvaluationRejectedResponse {
                    code: code.to_string(),
                    message: note.message.clone(),
                    notes: vec![note],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            SawApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found(msg))).into_response()
            }
            SawApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal("An unexpected error occurred")),
                )
                    .into_response()
            }
        }
    }
}
