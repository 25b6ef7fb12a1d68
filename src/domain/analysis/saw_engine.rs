//! SAW Engine - Validate weights, normalize, aggregate, rank.
//!
//! A pure pipeline: every call allocates fresh matrices and keeps no state.

use serde::{Deserialize, Serialize};

use super::{
    AdvisoryNote, Criterion, CriterionKind, DecisionMatrix, NormalizedMatrix, RankingResult,
    SawNormalizer, SawRanker, WeightValidator, WeightVector,
};
use crate::domain::foundation::ValidationError;

/// Caller-selected evaluation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SawOptions {
    /// Rescale weights to sum to 1 instead of using them as entered.
    pub auto_normalize_weight: bool,
    /// Presentation hint only; never changes the computation.
    pub show_detail_tables: bool,
}

impl Default for SawOptions {
    fn default() -> Self {
        Self {
            auto_normalize_weight: true,
            show_detail_tables: true,
        }
    }
}

/// Criteria plus the matrix they describe, with column order aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionProblem {
    criteria: Vec<Criterion>,
    matrix: DecisionMatrix,
}

impl DecisionProblem {
    /// Pairs criteria with a matrix, rejecting a column-count mismatch.
    pub fn new(criteria: Vec<Criterion>, matrix: DecisionMatrix) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if criteria.len() != matrix.criterion_count() {
            return Err(ValidationError::shape_mismatch(
                "criteria",
                matrix.criterion_count(),
                criteria.len(),
            ));
        }
        // Each weight is finite but the total can still overflow.
        if !WeightVector::from_criteria(&criteria).sum().is_finite() {
            return Err(ValidationError::not_finite("criteria.weight"));
        }
        Ok(Self { criteria, matrix })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    pub fn kinds(&self) -> Vec<CriterionKind> {
        self.criteria.iter().map(Criterion::kind).collect()
    }

    pub fn raw_weights(&self) -> WeightVector {
        WeightVector::from_criteria(&self.criteria)
    }
}

/// One row of the "weights used" table shown next to the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTableRow {
    pub criterion: String,
    pub weight: f64,
    pub kind: CriterionKind,
}

/// Everything a successful evaluation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SawReport {
    pub normalized_matrix: NormalizedMatrix,
    /// Weights used for aggregation (after auto-normalization, if any).
    pub effective_weights: WeightVector,
    /// Total of the raw weights as entered.
    pub original_weight_sum: f64,
    pub ranking: RankingResult,
    pub notes: Vec<AdvisoryNote>,
    pub weight_table: Vec<WeightTableRow>,
}

/// Either a fatal note and nothing else, or a report with zero or more notes.
#[derive(Debug, Clone, PartialEq)]
pub enum SawOutcome {
    Fatal(AdvisoryNote),
    Ranked(SawReport),
}

impl SawOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SawOutcome::Fatal(_))
    }

    /// All notes, in the order they were raised.
    pub fn notes(&self) -> &[AdvisoryNote] {
        match self {
            SawOutcome::Fatal(note) => std::slice::from_ref(note),
            SawOutcome::Ranked(report) => &report.notes,
        }
    }

    pub fn report(&self) -> Option<&SawReport> {
        match self {
            SawOutcome::Fatal(_) => None,
            SawOutcome::Ranked(report) => Some(report),
        }
    }

    pub fn into_report(self) -> Option<SawReport> {
        match self {
            SawOutcome::Fatal(_) => None,
            SawOutcome::Ranked(report) => Some(report),
        }
    }
}

/// Simple Additive Weighting evaluation.
pub struct SawEngine;

impl SawEngine {
    /// Runs the full pipeline.
    ///
    /// # Algorithm
    /// 1. Validate the raw weight total (zero total halts with a fatal note)
    /// 2. Normalize each column by its kind
    /// 3. Score each alternative as its normalized row dotted with the effective weights
    /// 4. Sort by score, descending and stable
    pub fn evaluate(problem: &DecisionProblem, options: &SawOptions) -> SawOutcome {
        let validated = match WeightValidator::validate(
            &problem.raw_weights(),
            options.auto_normalize_weight,
        ) {
            Ok(validated) => validated,
            Err(err) => return SawOutcome::Fatal(err.to_note()),
        };

        let normalized_matrix = SawNormalizer::normalize_aligned(problem.matrix(), &problem.kinds());
        let ranking = SawRanker::rank(&normalized_matrix, &validated.effective);

        let weight_table = problem
            .criteria()
            .iter()
            .zip(validated.effective.as_slice())
            .map(|(criterion, &weight)| WeightTableRow {
                criterion: criterion.name().to_string(),
                weight,
                kind: criterion.kind(),
            })
            .collect();

        SawOutcome::Ranked(SawReport {
            normalized_matrix,
            effective_weights: validated.effective,
            original_weight_sum: validated.original_sum,
            ranking,
            notes: validated.note.into_iter().collect(),
            weight_table,
        })
    }
}
