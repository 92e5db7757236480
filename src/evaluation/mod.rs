//! Objective evaluation: demand-weighted attraction-share gain minus build,
//! compensation, and resource usage cost.

mod objective;

pub use objective::{ObjectiveEvaluator, ProposedOpening};
