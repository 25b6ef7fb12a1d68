//! Evaluation Module - Completed SAW runs as handed to the presenter.
//!
//! An `EvaluationRecord` bundles the inputs of a successful run with its
//! report so that a front end can re-display or export it without
//! recomputing anything.

mod record;

pub use record::EvaluationRecord;
