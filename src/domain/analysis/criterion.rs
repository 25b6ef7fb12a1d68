//! Criterion - A weighted, directional attribute alternatives are judged on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CriterionKind {
    /// Higher raw values are preferable.
    #[default]
    #[serde(alias = "benefit", alias = "BENEFIT")]
    Benefit,
    /// Lower raw values are preferable.
    #[serde(alias = "cost", alias = "COST")]
    Cost,
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionKind::Benefit => write!(f, "Benefit"),
            CriterionKind::Cost => write!(f, "Cost"),
        }
    }
}

impl FromStr for CriterionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionKind::Benefit),
            "cost" => Ok(CriterionKind::Cost),
            other => Err(ValidationError::invalid_format(
                "kind",
                format!("expected 'Benefit' or 'Cost', got '{}'", other),
            )),
        }
    }
}

/// A named criterion with a non-negative weight and a preference direction.
///
/// The name is a display label only; two criteria may share a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    name: String,
    weight: f64,
    kind: CriterionKind,
}

impl Criterion {
    /// Creates a criterion, rejecting empty names and negative or non-finite weights.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        kind: CriterionKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let weight = ValidationError::check_non_negative("weight", weight)?;

        Ok(Self { name, weight, kind })
    }

    /// Creates a benefit criterion.
    pub fn benefit(name: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        Self::new(name, weight, CriterionKind::Benefit)
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        Self::new(name, weight, CriterionKind::Cost)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw weight as entered, before any normalization.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn kind(&self) -> CriterionKind {
        self.kind
    }
}

/// Default display label for the criterion at a zero-based position (`K1`, `K2`, ...).
pub fn default_criterion_name(index: usize) -> String {
    format!("K{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Benefit".parse::<CriterionKind>().unwrap(), CriterionKind::Benefit);
        assert_eq!("cost".parse::<CriterionKind>().unwrap(), CriterionKind::Cost);
        assert_eq!(" COST ".parse::<CriterionKind>().unwrap(), CriterionKind::Cost);
    }

    #[test]
    fn kind_rejects_unknown_direction() {
        let err = "neutral".parse::<CriterionKind>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn kind_defaults_to_benefit() {
        assert_eq!(CriterionKind::default(), CriterionKind::Benefit);
    }

    #[test]
    fn kind_deserializes_lowercase_alias() {
        let kind: CriterionKind = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(kind, CriterionKind::Cost);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"Cost\"");
    }

    #[test]
    fn criterion_new_accepts_zero_weight() {
        let c = Criterion::benefit("Price", 0.0).unwrap();
        assert_eq!(c.weight(), 0.0);
        assert_eq!(c.kind(), CriterionKind::Benefit);
    }

    #[test]
    fn criterion_new_rejects_blank_name() {
        let err = Criterion::cost("   ", 1.0).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("name"));
    }

    #[test]
    fn criterion_new_rejects_negative_weight() {
        let err = Criterion::cost("Price", -1.0).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeValue { .. }));
    }

    #[test]
    fn criterion_new_rejects_nan_weight() {
        let err = Criterion::benefit("Quality", f64::NAN).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { .. }));
    }

    #[test]
    fn default_names_are_one_based() {
        assert_eq!(default_criterion_name(0), "K1");
        assert_eq!(default_criterion_name(9), "K10");
    }
}
