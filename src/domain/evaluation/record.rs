//! EvaluationRecord - A successful evaluation with its inputs.

use crate::domain::analysis::{
    Criterion, DecisionMatrix, DecisionProblem, RankedAlternative, RankingResult, SawOptions,
    SawReport,
};
use crate::domain::foundation::{EvaluationId, Timestamp};

/// A completed evaluation: the problem, the options it ran with, and the report.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRecord {
    id: EvaluationId,
    evaluated_at: Timestamp,
    options: SawOptions,
    problem: DecisionProblem,
    report: SawReport,
}

impl EvaluationRecord {
    /// Records a report produced from `problem` with `options`.
    pub fn new(problem: DecisionProblem, options: SawOptions, report: SawReport) -> Self {
        Self {
            id: EvaluationId::new(),
            evaluated_at: Timestamp::now(),
            options,
            problem,
            report,
        }
    }

    pub fn id(&self) -> EvaluationId {
        self.id
    }

    pub fn evaluated_at(&self) -> Timestamp {
        self.evaluated_at
    }

    pub fn options(&self) -> &SawOptions {
        &self.options
    }

    pub fn criteria(&self) -> &[Criterion] {
        self.problem.criteria()
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        self.problem.matrix()
    }

    pub fn report(&self) -> &SawReport {
        &self.report
    }

    pub fn ranking(&self) -> &RankingResult {
        &self.report.ranking
    }

    /// Best-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.report.ranking.top()
    }
}
