//! SAW Normalizer - Column-wise scaling of raw values into `[0, 1]`.

use super::{CriterionKind, DecisionMatrix, NormalizedMatrix};
use crate::domain::foundation::ValidationError;

/// Benefit/cost normalization for Simple Additive Weighting.
pub struct SawNormalizer;

impl SawNormalizer {
    /// Normalizes every column of `matrix` according to its kind.
    ///
    /// `kinds` must hold one entry per criterion column.
    pub fn normalize(
        matrix: &DecisionMatrix,
        kinds: &[CriterionKind],
    ) -> Result<NormalizedMatrix, ValidationError> {
        if kinds.len() != matrix.criterion_count() {
            return Err(ValidationError::shape_mismatch(
                "criterion_kinds",
                matrix.criterion_count(),
                kinds.len(),
            ));
        }
        Ok(Self::normalize_aligned(matrix, kinds))
    }

    /// Normalizes a matrix whose column count is already known to match `kinds`.
    pub(crate) fn normalize_aligned(
        matrix: &DecisionMatrix,
        kinds: &[CriterionKind],
    ) -> NormalizedMatrix {
        let columns = kinds
            .iter()
            .enumerate()
            .map(|(c, kind)| Self::normalize_column(&matrix.column(c), *kind))
            .collect();

        NormalizedMatrix::from_columns(matrix.alternatives().to_vec(), columns)
    }

    /// Normalizes a single column.
    pub fn normalize_column(column: &[f64], kind: CriterionKind) -> Vec<f64> {
        match kind {
            CriterionKind::Benefit => Self::normalize_benefit(column),
            CriterionKind::Cost => Self::normalize_cost(column),
        }
    }

    /// `raw / max`.
    ///
    /// # Edge Cases
    /// - Column max is 0: every cell is 0 (no alternative can be told apart)
    fn normalize_benefit(column: &[f64]) -> Vec<f64> {
        // Cells are non-negative, so seeding the fold with 0 is exact.
        let max = column.iter().copied().fold(0.0_f64, f64::max);

        if max == 0.0 {
            return vec![0.0; column.len()];
        }

        column.iter().map(|&raw| raw / max).collect()
    }

    /// `min / raw`, where `min` is the smallest non-zero value in the column.
    ///
    /// # Edge Cases
    /// - Cell is 0: that cell is 0, even though zero is nominally the best cost
    /// - Column is entirely 0: every cell is 0
    fn normalize_cost(column: &[f64]) -> Vec<f64> {
        let min_positive = column
            .iter()
            .copied()
            .filter(|&v| v > 0.0)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))));

        column
            .iter()
            .map(|&raw| match min_positive {
                Some(min) if raw > 0.0 => min / raw,
                _ => 0.0,
            })
            .collect()
    }
}
