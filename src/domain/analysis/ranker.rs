//! SAW Ranker - Weighted aggregation of normalized rows and stable ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{NormalizedMatrix, WeightVector};

/// One alternative's place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub alternative: String,
    pub score: f64,
}

impl RankedAlternative {
    pub fn new(rank: usize, alternative: impl Into<String>, score: f64) -> Self {
        Self {
            rank,
            alternative: alternative.into(),
            score,
        }
    }
}

/// Alternatives sorted by score, best first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingResult(Vec<RankedAlternative>);

impl RankingResult {
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The best-ranked alternative. Ties go to the earliest input row.
    pub fn top(&self) -> Option<&RankedAlternative> {
        self.0.first()
    }

    /// 1-based rank of the first alternative carrying `label`.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.0.iter().find(|r| r.alternative == label).map(|r| r.rank)
    }

    /// `(label, score)` pairs in rank order.
    pub fn pairs(&self) -> Vec<(String, f64)> {
        self.0.iter().map(|r| (r.alternative.clone(), r.score)).collect()
    }
}

impl IntoIterator for RankingResult {
    type Item = RankedAlternative;
    type IntoIter = std::vec::IntoIter<RankedAlternative>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Weighted-sum aggregation and ranking.
pub struct SawRanker;

impl SawRanker {
    /// Computes one score per alternative, in input order.
    ///
    /// score[i] = Σ normalized[i][c] × weight[c]
    ///
    /// A sum that overflows is reported as 0, like any other degenerate cell.
    pub fn scores(normalized: &NormalizedMatrix, weights: &WeightVector) -> Vec<f64> {
        normalized
            .rows()
            .iter()
            .map(|row| {
                let score: f64 = row
                    .iter()
                    .zip(weights.as_slice())
                    .map(|(value, weight)| value * weight)
                    .sum();
                if score.is_finite() {
                    score
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Ranks alternatives by descending score.
    ///
    /// The sort is stable, so equal scores keep their input order.
    pub fn rank(normalized: &NormalizedMatrix, weights: &WeightVector) -> RankingResult {
        let scores = Self::scores(normalized, weights);

        let mut scored: Vec<(&String, f64)> =
            normalized.alternatives().iter().zip(scores).collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        RankingResult(
            scored
                .into_iter()
                .enumerate()
                .map(|(i, (label, score))| RankedAlternative::new(i + 1, label.clone(), score))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(labels: &[&str], columns: Vec<Vec<f64>>) -> NormalizedMatrix {
        NormalizedMatrix::from_columns(labels.iter().map(|s| s.to_string()).collect(), columns)
    }

    #[test]
    fn scores_are_row_dot_weights() {
        let matrix = normalized(&["A1", "A2"], vec![vec![1.0, 0.5], vec![0.25, 1.0]]);
        let weights = WeightVector::new(vec![0.6, 0.4]);

        let scores = SawRanker::scores(&matrix, &weights);
        assert!((scores[0] - 0.7).abs() < 1e-12);
        assert!((scores[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn overflowing_score_is_zeroed() {
        let matrix = normalized(&["A1", "A2"], vec![vec![1.0, 0.5], vec![1.0, 0.5]]);
        let weights = WeightVector::new(vec![1e308, 1e308]);

        let scores = SawRanker::scores(&matrix, &weights);
        assert_eq!(scores, vec![0.0, 1e308]);
        assert!(scores.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn rank_sorts_descending_with_one_based_positions() {
        let matrix = normalized(&["A1", "A2", "A3"], vec![vec![0.5, 1.0, 0.25]]);
        let ranking = SawRanker::rank(&matrix, &WeightVector::new(vec![1.0]));

        assert_eq!(
            ranking.pairs(),
            vec![
                ("A2".to_string(), 1.0),
                ("A1".to_string(), 0.5),
                ("A3".to_string(), 0.25)
            ]
        );
        assert_eq!(ranking.entries()[0].rank, 1);
        assert_eq!(ranking.entries()[2].rank, 3);
    }

    #[test]
    fn ties_keep_input_order() {
        let matrix = normalized(&["A1", "A2", "A3", "A4"], vec![vec![0.5, 1.0, 0.5, 1.0]]);
        let ranking = SawRanker::rank(&matrix, &WeightVector::new(vec![1.0]));

        let labels: Vec<&str> = ranking.iter().map(|r| r.alternative.as_str()).collect();
        assert_eq!(labels, vec!["A2", "A4", "A1", "A3"]);
    }

    #[test]
    fn top_and_position_of() {
        let matrix = normalized(&["A1", "A2"], vec![vec![0.2, 0.9]]);
        let ranking = SawRanker::rank(&matrix, &WeightVector::new(vec![1.0]));

        assert_eq!(ranking.top().map(|r| r.alternative.as_str()), Some("A2"));
        assert_eq!(ranking.position_of("A1"), Some(2));
        assert_eq!(ranking.position_of("A9"), None);
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn unnormalized_weights_scale_scores() {
        let matrix = normalized(&["A1", "A2"], vec![vec![1.0, 0.5], vec![1.0, 0.0]]);
        let ranking = SawRanker::rank(&matrix, &WeightVector::new(vec![2.0, 2.0]));

        assert_eq!(ranking.entries()[0].score, 4.0);
        assert_eq!(ranking.entries()[1].score, 1.0);
    }

    #[test]
    fn ranking_serializes_as_array() {
        let matrix = normalized(&["A1"], vec![vec![1.0]]);
        let ranking = SawRanker::rank(&matrix, &WeightVector::new(vec![1.0]));

        let json = serde_json::to_string(&ranking).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"alternative\":\"A1\""));
    }
}
