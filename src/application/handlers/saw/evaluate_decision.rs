//! EvaluateDecisionHandler - Command handler for running a SAW evaluation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::analysis::{AdvisoryNote, DecisionProblem, SawEngine, SawOptions, SawOutcome};
use crate::domain::evaluation::EvaluationRecord;
use crate::ports::RankingCache;

/// Command to evaluate a decision problem.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionCommand {
    pub problem: DecisionProblem,
    pub options: SawOptions,
}

/// Result of an evaluation run.
#[derive(Debug, Clone)]
pub enum EvaluateDecisionResult {
    /// The run completed and its record is now the cached latest result.
    Ranked(EvaluationRecord),
    /// The run stopped on a fatal note; the cache was cleared.
    Rejected(AdvisoryNote),
}

impl EvaluateDecisionResult {
    pub fn record(&self) -> Option<&EvaluationRecord> {
        match self {
            EvaluateDecisionResult::Ranked(record) => Some(record),
            EvaluateDecisionResult::Rejected(_) => None,
        }
    }
}

/// Handler for evaluating decisions.
pub struct EvaluateDecisionHandler {
    cache: Arc<dyn RankingCache>,
}

impl EvaluateDecisionHandler {
    pub fn new(cache: Arc<dyn RankingCache>) -> Self {
        Self { cache }
    }

    pub async fn handle(&self, cmd: EvaluateDecisionCommand) -> EvaluateDecisionResult {
        debug!(
            alternatives = cmd.problem.matrix().alternative_count(),
            criteria = cmd.problem.criteria().len(),
            auto_normalize_weight = cmd.options.auto_normalize_weight,
            "Evaluating decision problem"
        );

        match SawEngine::evaluate(&cmd.problem, &cmd.options) {
            SawOutcome::Fatal(note) => {
                // A stale ranking must not outlive a failed run
                self.cache.clear().await;
                warn!(reason = %note.message, "Evaluation rejected");
                EvaluateDecisionResult::Rejected(note)
            }
            SawOutcome::Ranked(report) => {
                for note in &report.notes {
                    debug!(kind = ?note.kind, message = %note.message, "Advisory note");
                }

                let record = EvaluationRecord::new(cmd.problem, cmd.options, report);
                if let Some(best) = record.best() {
                    info!(
                        evaluation_id = %record.id(),
                        best = %best.alternative,
                        score = best.score,
                        "Evaluation completed"
                    );
                }

                self.cache.store(record.clone()).await;
                EvaluateDecisionResult::Ranked(record)
            }
        }
    }
}
