//! Decision Matrix - Dense alternatives × criteria tables of raw and normalized values.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Default label for the alternative at a zero-based position (`A1`, `A2`, ...).
pub fn default_alternative_label(index: usize) -> String {
    format!("A{}", index + 1)
}

/// Default labels `A1..An` for `count` alternatives.
pub fn default_alternative_labels(count: usize) -> Vec<String> {
    (0..count).map(default_alternative_label).collect()
}

/// Raw measured values: one row per alternative, one column per criterion.
///
/// Every cell is finite and non-negative. Column order is the criterion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    alternatives: Vec<String>,
    rows: Vec<Vec<f64>>,
    criterion_count: usize,
}

impl DecisionMatrix {
    /// Creates a matrix after validating its shape and cell values.
    pub fn new(
        alternatives: Vec<String>,
        rows: Vec<Vec<f64>>,
        criterion_count: usize,
    ) -> Result<Self, ValidationError> {
        if rows.is_empty() {
            return Err(ValidationError::empty_field("matrix"));
        }
        if criterion_count == 0 {
            return Err(ValidationError::empty_field("criteria"));
        }
        if alternatives.len() != rows.len() {
            return Err(ValidationError::shape_mismatch(
                "alternative_labels",
                rows.len(),
                alternatives.len(),
            ));
        }

        for (i, label) in alternatives.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("alternative_labels[{}]", i)));
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != criterion_count {
                return Err(ValidationError::shape_mismatch(
                    format!("matrix[{}]", i),
                    criterion_count,
                    row.len(),
                ));
            }
            for (j, &value) in row.iter().enumerate() {
                ValidationError::check_non_negative(format!("matrix[{}][{}]", i, j), value)?;
            }
        }

        Ok(Self {
            alternatives,
            rows,
            criterion_count,
        })
    }

    /// Creates a matrix labelled `A1..An`, inferring the criterion count from the first row.
    pub fn with_default_labels(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let criterion_count = rows.first().map(Vec::len).unwrap_or(0);
        Self::new(default_alternative_labels(rows.len()), rows, criterion_count)
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the raw values of one alternative.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Collects the raw values of one criterion column, in alternative order.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.get(index).copied()).collect()
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }
}

/// Builder for constructing DecisionMatrix instances row by row.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    alternatives: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alternative with its raw values.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(label.into());
        self.rows.push(values);
        self
    }

    /// Appends an alternative labelled by its position (`A{n}`).
    pub fn row(self, values: Vec<f64>) -> Self {
        let label = default_alternative_label(self.rows.len());
        self.alternative(label, values)
    }

    /// Builds the matrix, taking the criterion count from the first row.
    pub fn build(self) -> Result<DecisionMatrix, ValidationError> {
        let criterion_count = self.rows.first().map(Vec::len).unwrap_or(0);
        DecisionMatrix::new(self.alternatives, self.rows, criterion_count)
    }
}

/// Normalized values, same shape and labels as the matrix they came from.
///
/// Every cell is a finite number in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMatrix {
    alternatives: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    /// Assembles a normalized matrix from per-column values.
    pub(crate) fn from_columns(alternatives: Vec<String>, columns: Vec<Vec<f64>>) -> Self {
        let rows = (0..alternatives.len())
            .map(|i| columns.iter().map(|col| col[i]).collect())
            .collect();
        Self { alternatives, rows }
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the normalized values of one alternative.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns a single normalized cell.
    pub fn value(&self, alternative: usize, criterion: usize) -> Option<f64> {
        self.rows.get(alternative).and_then(|row| row.get(criterion)).copied()
    }

    /// Collects the normalized values of one criterion column.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.get(index).copied()).collect()
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_are_one_based() {
        assert_eq!(default_alternative_labels(3), vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn builder_creates_matrix_with_default_labels() {
        let matrix = DecisionMatrix::builder()
            .row(vec![10.0, 3.0])
            .row(vec![20.0, 1.0])
            .build()
            .unwrap();

        assert_eq!(matrix.alternatives(), &["A1".to_string(), "A2".to_string()]);
        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.column(0), vec![10.0, 20.0]);
        assert_eq!(matrix.row(1), Some(&[20.0, 1.0][..]));
    }

    #[test]
    fn builder_keeps_custom_labels_in_order() {
        let matrix = DecisionMatrix::builder()
            .alternative("Laptop", vec![1.0])
            .alternative("Tablet", vec![2.0])
            .build()
            .unwrap();

        assert_eq!(matrix.alternatives()[0], "Laptop");
        assert_eq!(matrix.alternatives()[1], "Tablet");
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = DecisionMatrix::with_default_labels(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, ValidationError::shape_mismatch("matrix[1]", 2, 1));
    }

    #[test]
    fn new_rejects_negative_cell() {
        let err = DecisionMatrix::with_default_labels(vec![vec![1.0, -2.0]]).unwrap_err();
        assert_eq!(err.field(), "matrix[0][1]");
        assert!(matches!(err, ValidationError::NegativeValue { .. }));
    }

    #[test]
    fn new_rejects_infinite_cell() {
        let err = DecisionMatrix::with_default_labels(vec![vec![f64::INFINITY]]).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { .. }));
    }

    #[test]
    fn new_rejects_empty_matrix() {
        let err = DecisionMatrix::with_default_labels(vec![]).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("matrix"));
    }

    #[test]
    fn new_rejects_rows_without_criteria() {
        let err = DecisionMatrix::with_default_labels(vec![vec![]]).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("criteria"));
    }

    #[test]
    fn new_rejects_label_count_mismatch() {
        let err = DecisionMatrix::new(vec!["A1".to_string()], vec![vec![1.0], vec![2.0]], 1)
            .unwrap_err();
        assert_eq!(err, ValidationError::shape_mismatch("alternative_labels", 2, 1));
    }

    #[test]
    fn normalized_matrix_from_columns_transposes() {
        let normalized = NormalizedMatrix::from_columns(
            vec!["A1".to_string(), "A2".to_string()],
            vec![vec![0.5, 1.0], vec![1.0, 0.25]],
        );

        assert_eq!(normalized.row(0), Some(&[0.5, 1.0][..]));
        assert_eq!(normalized.row(1), Some(&[1.0, 0.25][..]));
        assert_eq!(normalized.value(1, 1), Some(0.25));
        assert_eq!(normalized.column(0), vec![0.5, 1.0]);
        assert_eq!(normalized.criterion_count(), 2);
    }

    #[test]
    fn matrix_serializes_to_json() {
        let matrix = DecisionMatrix::with_default_labels(vec![vec![1.0]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("alternatives"));
        assert!(json.contains("rows"));
    }
}
