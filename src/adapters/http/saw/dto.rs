//! HTTP DTOs for SAW endpoints.
//!
//! Request types mirror the collector form: counts first, then criteria and
//! the matrix, with every per-criterion field optional. Response types
//! flatten an `EvaluationRecord` for the presenter.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    default_alternative_labels, default_criterion_name, AdvisoryNote, Criterion, CriterionKind,
    DecisionMatrix, DecisionProblem, RankedAlternative, SawOptions, WeightTableRow,
};
use crate::domain::evaluation::EvaluationRecord;
use crate::domain::foundation::{DomainError, Timestamp, ValidationError};

const DEFAULT_WEIGHT: f64 = 1.0;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One criterion as entered. Missing fields take the form defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriterionInput {
    pub name: Option<String>,
    pub weight: Option<f64>,
    /// "Benefit" or "Cost", any case.
    pub kind: Option<String>,
}

/// Evaluation switches. Missing values fall back to the server defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OptionsInput {
    pub auto_normalize_weight: Option<bool>,
    pub show_detail_tables: Option<bool>,
}

impl OptionsInput {
    pub fn resolve(&self, defaults: SawOptions) -> SawOptions {
        SawOptions {
            auto_normalize_weight: self
                .auto_normalize_weight
                .unwrap_or(defaults.auto_normalize_weight),
            show_detail_tables: self.show_detail_tables.unwrap_or(defaults.show_detail_tables),
        }
    }
}

/// Request to evaluate a decision problem.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub alternative_count: usize,
    pub criterion_count: usize,
    /// Up to `criterion_count` entries; trailing criteria take defaults.
    #[serde(default)]
    pub criteria: Vec<CriterionInput>,
    /// `alternative_count` rows of `criterion_count` raw values.
    pub matrix: Vec<Vec<f64>>,
    /// Defaults to `A1..An`.
    #[serde(default)]
    pub alternative_labels: Option<Vec<String>>,
    #[serde(default)]
    pub options: OptionsInput,
}

/// Upper bounds the collector enforces on problem size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorLimits {
    pub max_alternatives: usize,
    pub max_criteria: usize,
}

impl EvaluateRequest {
    /// Builds a validated problem, filling unset criterion fields with defaults.
    pub fn into_problem(self, limits: CollectorLimits) -> Result<DecisionProblem, DomainError> {
        check_count("alternative_count", self.alternative_count, limits.max_alternatives)?;
        check_count("criterion_count", self.criterion_count, limits.max_criteria)?;

        if self.criteria.len() > self.criterion_count {
            return Err(ValidationError::shape_mismatch(
                "criteria",
                self.criterion_count,
                self.criteria.len(),
            )
            .into());
        }
        if self.matrix.len() != self.alternative_count {
            return Err(ValidationError::shape_mismatch(
                "matrix",
                self.alternative_count,
                self.matrix.len(),
            )
            .into());
        }

        let mut inputs = self.criteria;
        inputs.resize_with(self.criterion_count, CriterionInput::default);

        let criteria = inputs
            .into_iter()
            .enumerate()
            .map(|(i, input)| build_criterion(i, input))
            .collect::<Result<Vec<_>, _>>()?;

        let labels = self
            .alternative_labels
            .unwrap_or_else(|| default_alternative_labels(self.alternative_count));
        let matrix = DecisionMatrix::new(labels, self.matrix, self.criterion_count)?;

        Ok(DecisionProblem::new(criteria, matrix)?)
    }
}

fn check_count(field: &str, value: usize, max: usize) -> Result<(), ValidationError> {
    if value == 0 || value > max {
        return Err(ValidationError::out_of_range(
            field,
            1,
            i64::try_from(max).unwrap_or(i64::MAX),
            i64::try_from(value).unwrap_or(i64::MAX),
        ));
    }
    Ok(())
}

fn build_criterion(index: usize, input: CriterionInput) -> Result<Criterion, DomainError> {
    let kind = match input.kind.as_deref() {
        Some(raw) => raw.parse::<CriterionKind>().map_err(|_| {
            ValidationError::invalid_format(
                format!("criteria[{}].kind", index),
                format!("expected 'Benefit' or 'Cost', got '{}'", raw),
            )
        })?,
        None => CriterionKind::default(),
    };
    let name = input.name.unwrap_or_else(|| default_criterion_name(index));
    let weight = input.weight.unwrap_or(DEFAULT_WEIGHT);

    Criterion::new(name, weight, kind)
        .map_err(|e| DomainError::from(e).with_detail("criterion_index", index.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Best alternative and ranking size, as shown above the result table.
#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    pub best_alternative: String,
    pub top_score: f64,
    pub alternative_count: usize,
}

/// A labelled matrix for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixView {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Intermediate tables, included only when `show_detail_tables` is set.
#[derive(Debug, Clone, Serialize)]
pub struct DetailTables {
    pub raw_matrix: MatrixView,
    pub normalized_matrix: MatrixView,
    pub weight_table: Vec<WeightTableRow>,
}

/// A completed evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    pub evaluation_id: String,
    pub evaluated_at: Timestamp,
    pub options: SawOptions,
    pub notes: Vec<AdvisoryNote>,
    pub summary: Option<RankingSummary>,
    pub ranking: Vec<RankedAlternative>,
    pub effective_weights: Vec<f64>,
    pub original_weight_sum: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailTables>,
}

impl From<&EvaluationRecord> for EvaluationResponse {
    fn from(record: &EvaluationRecord) -> Self {
        let report = record.report();

        let summary = record.best().map(|best| RankingSummary {
            best_alternative: best.alternative.clone(),
            top_score: best.score,
            alternative_count: record.ranking().len(),
        });

        let details = record.options().show_detail_tables.then(|| {
            let criteria: Vec<String> =
                record.criteria().iter().map(|c| c.name().to_string()).collect();
            DetailTables {
                raw_matrix: MatrixView {
                    alternatives: record.matrix().alternatives().to_vec(),
                    criteria: criteria.clone(),
                    rows: record.matrix().rows().to_vec(),
                },
                normalized_matrix: MatrixView {
                    alternatives: report.normalized_matrix.alternatives().to_vec(),
                    criteria,
                    rows: report.normalized_matrix.rows().to_vec(),
                },
                weight_table: report.weight_table.clone(),
            }
        });

        Self {
            evaluation_id: record.id().to_string(),
            evaluated_at: record.evaluated_at(),
            options: *record.options(),
            notes: report.notes.clone(),
            summary,
            ranking: record.ranking().entries().to_vec(),
            effective_weights: report.effective_weights.as_slice().to_vec(),
            original_weight_sum: report.original_weight_sum,
            details,
        }
    }
}

/// A run that stopped on a fatal note. Carries no ranking.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRejectedResponse {
    pub code: String,
    pub message: String,
    pub notes: Vec<AdvisoryNote>,
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = (!error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::SawEngine;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;

    const LIMITS: CollectorLimits = CollectorLimits {
        max_alternatives: 10,
        max_criteria: 5,
    };

    fn request(value: serde_json::Value) -> EvaluateRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_criterion_fields_take_form_defaults() {
        let req = request(json!({
            "alternative_count": 2,
            "criterion_count": 3,
            "criteria": [{ "name": "Price", "kind": "cost", "weight": 2.0 }],
            "matrix": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]
        }));

        let problem = req.into_problem(LIMITS).unwrap();
        let criteria = problem.criteria();

        assert_eq!(criteria[0].name(), "Price");
        assert_eq!(criteria[0].kind(), CriterionKind::Cost);
        assert_eq!(criteria[0].weight(), 2.0);
        assert_eq!(criteria[1].name(), "K2");
        assert_eq!(criteria[2].name(), "K3");
        assert_eq!(criteria[2].weight(), 1.0);
        assert_eq!(criteria[2].kind(), CriterionKind::Benefit);
        assert_eq!(problem.matrix().alternatives(), &["A1", "A2"]);
    }

    #[test]
    fn kind_is_parsed_case_insensitively() {
        let req = request(json!({
            "alternative_count": 1,
            "criterion_count": 2,
            "criteria": [{ "kind": "COST" }, { "kind": "Benefit" }],
            "matrix": [[1.0, 2.0]]
        }));

        let kinds = req.into_problem(LIMITS).unwrap().kinds();
        assert_eq!(kinds, vec![CriterionKind::Cost, CriterionKind::Benefit]);
    }

    #[test]
    fn unknown_kind_is_rejected_with_field() {
        let req = request(json!({
            "alternative_count": 1,
            "criterion_count": 1,
            "criteria": [{ "kind": "neutral" }],
            "matrix": [[1.0]]
        }));

        let err = req.into_problem(LIMITS).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"criteria[0].kind".to_string()));
    }

    #[test]
    fn negative_weight_is_rejected_with_index() {
        let req = request(json!({
            "alternative_count": 1,
            "criterion_count": 2,
            "criteria": [{}, { "weight": -0.5 }],
            "matrix": [[1.0, 2.0]]
        }));

        let err = req.into_problem(LIMITS).unwrap_err();
        assert_eq!(err.details.get("criterion_index"), Some(&"1".to_string()));
    }

    #[test]
    fn row_count_must_match_alternative_count() {
        let req = request(json!({
            "alternative_count": 3,
            "criterion_count": 1,
            "matrix": [[1.0], [2.0]]
        }));

        let err = req.into_problem(LIMITS).unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"matrix".to_string()));
    }

    #[test]
    fn counts_outside_limits_are_rejected() {
        let zero = request(json!({
            "alternative_count": 0,
            "criterion_count": 1,
            "matrix": []
        }));
        assert!(zero.into_problem(LIMITS).is_err());

        let too_many = request(json!({
            "alternative_count": 1,
            "criterion_count": 6,
            "matrix": [[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]]
        }));
        let err = too_many.into_problem(LIMITS).unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"criterion_count".to_string()));
    }

    #[test]
    fn negative_cell_is_rejected() {
        let req = request(json!({
            "alternative_count": 2,
            "criterion_count": 1,
            "matrix": [[1.0], [-2.0]]
        }));

        let err = req.into_problem(LIMITS).unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"matrix[1][0]".to_string()));
    }

    #[test]
    fn options_fall_back_to_defaults() {
        let defaults = SawOptions {
            auto_normalize_weight: false,
            show_detail_tables: true,
        };
        let input = OptionsInput {
            auto_normalize_weight: None,
            show_detail_tables: Some(false),
        };

        let resolved = input.resolve(defaults);
        assert!(!resolved.auto_normalize_weight);
        assert!(!resolved.show_detail_tables);
    }

    #[test]
    fn response_omits_details_when_hidden() {
        let problem = request(json!({
            "alternative_count": 2,
            "criterion_count": 1,
            "matrix": [[1.0], [2.0]]
        }))
        .into_problem(LIMITS)
        .unwrap();
        let options = SawOptions {
            auto_normalize_weight: true,
            show_detail_tables: false,
        };
        let report = SawEngine::evaluate(&problem, &options).into_report().unwrap();
        let record = EvaluationRecord::new(problem, options, report);

        let response = EvaluationResponse::from(&record);
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("details").is_none());
        assert_eq!(value["summary"]["best_alternative"], "A2");
        assert_eq!(value["summary"]["alternative_count"], 2);
        assert_eq!(value["ranking"][0]["rank"], 1);
    }

    #[test]
    fn error_response_carries_domain_details() {
        let err = DomainError::from(ValidationError::empty_field("criteria"));
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "VALIDATION_FAILED");
        assert_eq!(response.details.unwrap()["field"], "criteria");
    }
}
