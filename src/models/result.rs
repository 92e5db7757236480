//! Solve result record.

use serde::Serialize;

/// Why the optimizer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// An iteration found no candidate that strictly improves the objective.
    NoImprovement,
    /// Every candidate site has been opened.
    AllOpen,
}

/// The final output of a solve, shaped for an external persister.
///
/// `opened_sites`, `allocation_matrix`, and `compensation` are all indexed by
/// site (0-based); the allocation matrix's inner index is the resource type.
/// `elapsed_seconds`, `termination`, and `iterations` are diagnostics, not
/// part of the algorithmic contract.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    /// Identifies the producing method, e.g. `"greedy"`.
    pub method_tag: String,
    /// Final committed objective value (gain minus cost).
    pub objective_value: f64,
    /// Which sites ended up opened.
    pub opened_sites: Vec<bool>,
    /// Units of each resource type allocated to each site.
    pub allocation_matrix: Vec<Vec<u32>>,
    /// Compensation attractiveness purchased per site.
    pub compensation: Vec<f64>,
    /// Wall-clock time spent solving.
    pub elapsed_seconds: f64,
    /// Why the solve stopped.
    pub termination: Termination,
    /// Number of committed site openings.
    pub iterations: usize,
}
