//! Advisory notes returned alongside (or instead of) a computed ranking.

use serde::{Deserialize, Serialize};

/// How seriously the presenter should treat a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSeverity {
    Info,
    Warning,
    Fatal,
}

/// What a note is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Weights did not sum to 1 and were rescaled.
    WeightAutoNormalized,
    /// Weights did not sum to 1 and were used as entered.
    WeightSumMismatch,
    /// Weights summed to 0; no ranking is possible.
    ZeroWeight,
}

/// A severity-tagged advisory message.
///
/// `weight_sum` carries the raw total the note refers to, for display and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryNote {
    pub severity: NoteSeverity,
    pub kind: NoteKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_sum: Option<f64>,
}

impl AdvisoryNote {
    /// Informational note: weights were rescaled from `original_sum` to 1.0.
    pub fn weight_auto_normalized(original_sum: f64) -> Self {
        Self {
            severity: NoteSeverity::Info,
            kind: NoteKind::WeightAutoNormalized,
            message: format!(
                "Weights auto-normalized (original total {:.4} -> 1.0).",
                original_sum
            ),
            weight_sum: Some(original_sum),
        }
    }

    /// Warning: weights sum to `sum` and are used unmodified.
    pub fn weight_sum_mismatch(sum: f64) -> Self {
        Self {
            severity: NoteSeverity::Warning,
            kind: NoteKind::WeightSumMismatch,
            message: format!("Total weight = {:.4} (1.0 recommended).", sum),
            weight_sum: Some(sum),
        }
    }

    /// Fatal: all weights are zero.
    pub fn zero_weight() -> Self {
        Self {
            severity: NoteSeverity::Fatal,
            kind: NoteKind::ZeroWeight,
            message: "Total weight = 0. At least one weight must be greater than 0.".to_string(),
            weight_sum: Some(0.0),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == NoteSeverity::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_normalized_note_mentions_original_sum() {
        let note = AdvisoryNote::weight_auto_normalized(4.0);
        assert_eq!(note.severity, NoteSeverity::Info);
        assert_eq!(note.weight_sum, Some(4.0));
        assert!(note.message.contains("4.0000"));
        assert!(!note.is_fatal());
    }

    #[test]
    fn mismatch_note_is_a_warning() {
        let note = AdvisoryNote::weight_sum_mismatch(0.75);
        assert_eq!(note.severity, NoteSeverity::Warning);
        assert_eq!(note.kind, NoteKind::WeightSumMismatch);
        assert!(note.message.contains("0.7500"));
    }

    #[test]
    fn zero_weight_note_is_fatal() {
        assert!(AdvisoryNote::zero_weight().is_fatal());
    }

    #[test]
    fn note_serializes_severity_lowercase() {
        let json = serde_json::to_string(&AdvisoryNote::weight_sum_mismatch(2.0)).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"kind\":\"weight_sum_mismatch\""));
    }
}
