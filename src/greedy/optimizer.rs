//! Greedy construction optimizer.
//!
//! Outer loop of the heuristic: each iteration scores every still-closed
//! candidate site (best feasible fill, compensation to saturation, net
//! objective of the hypothetical configuration) and commits the single best
//! opening, stopping when no candidate strictly improves the committed
//! objective or every site is open.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::allocation::greedy_fill;
use crate::attraction::UTILITY_SATURATION;
use crate::evaluation::{ObjectiveEvaluator, ProposedOpening};
use crate::greedy::OptimizerState;
use crate::models::{Allocation, Instance, InstanceError, SolveResult, Termination};

/// The outcome of one optimizer transition.
#[derive(Debug)]
pub enum Step {
    /// A site was opened and the committed objective improved.
    Committed {
        /// The opened site index.
        site: usize,
        /// The new committed objective.
        objective: f64,
    },
    /// The run is over; no state was changed.
    Finished(Termination),
}

/// Greedy facility-location optimizer.
///
/// Construction validates the instance up front; a constructed optimizer
/// never fails mid-run. `solve` runs the full loop; `step` advances a
/// caller-owned [`OptimizerState`] by one transition, which is how resumed
/// or externally capped runs are expressed (the loop is monotone, so
/// stopping early is always safe).
///
/// Determinism: candidates are scored independently and the winner is chosen
/// by a sequential reduction in candidate index order, strictly-greater
/// objective required to displace the running best. Equal objectives keep
/// the lower site index, with or without the `parallel` feature.
///
/// # Examples
///
/// ```
/// use facloc::greedy::GreedyOptimizer;
/// use facloc::models::Instance;
///
/// let instance = Instance {
///     num_customers: 1,
///     num_sites: 1,
///     num_resources: 1,
///     num_competitors: 0,
///     site_capacity: vec![20],
///     site_resource_cap: vec![vec![20]],
///     resource_supply: vec![20],
///     resource_yield: vec![vec![10.0]],
///     demand: vec![100.0],
///     site_distance: vec![vec![1.0]],
///     competitor_distance: vec![vec![]],
///     competitor_attraction: vec![],
///     build_cost: vec![0.0],
///     compensation_cost: vec![1.0],
///     resource_cost: vec![vec![1.0]],
///     compensation_bound: 1000.0,
/// };
///
/// let optimizer = GreedyOptimizer::new(&instance).unwrap();
/// let result = optimizer.solve();
/// assert_eq!(result.opened_sites, vec![true]);
/// assert!(result.objective_value > 0.0);
/// ```
pub struct GreedyOptimizer<'a> {
    instance: &'a Instance,
}

impl<'a> GreedyOptimizer<'a> {
    /// Creates an optimizer, validating the instance first.
    pub fn new(instance: &'a Instance) -> Result<Self, InstanceError> {
        instance.validate()?;
        Ok(Self { instance })
    }

    /// Runs the full greedy construction from the initial (all closed)
    /// state.
    pub fn solve(&self) -> SolveResult {
        self.solve_from(OptimizerState::new(self.instance))
    }

    /// Runs the greedy construction from a caller-supplied state.
    pub fn solve_from(&self, mut state: OptimizerState) -> SolveResult {
        let start = Instant::now();
        let mut iterations = 0;

        let termination = loop {
            match self.step(&mut state) {
                Step::Committed { site, objective } => {
                    tracing::debug!(site, objective, iterations, "opened site");
                    iterations += 1;
                }
                Step::Finished(termination) => break termination,
            }
        };
        tracing::debug!(
            ?termination,
            objective = state.objective,
            iterations,
            "greedy construction finished"
        );

        SolveResult {
            method_tag: "greedy".to_string(),
            objective_value: state.objective,
            opened_sites: state.sites.iter().map(|s| s.opened()).collect(),
            allocation_matrix: state
                .ledger
                .allocation_matrix(self.instance.num_sites, self.instance.num_resources),
            compensation: state.sites.iter().map(|s| s.compensation()).collect(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
            termination,
            iterations,
        }
    }

    /// Advances the state by one transition.
    ///
    /// Scores every closed candidate against the committed state, then
    /// either commits the strictly best opening or finishes. Committed state
    /// is only written here, after all candidates are scored.
    pub fn step(&self, state: &mut OptimizerState) -> Step {
        let candidates: Vec<usize> = (0..self.instance.num_sites)
            .filter(|&j| !state.sites[j].opened())
            .collect();
        if candidates.is_empty() {
            return Step::Finished(Termination::AllOpen);
        }

        let evaluator = ObjectiveEvaluator::new(self.instance);

        #[cfg(feature = "parallel")]
        let scored: Vec<(ProposedOpening, f64)> = candidates
            .par_iter()
            .map(|&j| self.score_candidate(&evaluator, state, j))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let scored: Vec<(ProposedOpening, f64)> = candidates
            .iter()
            .map(|&j| self.score_candidate(&evaluator, state, j))
            .collect();

        // Deterministic reduction in candidate index order: strictly greater
        // displaces, so ties keep the lowest site index.
        let mut best: Option<&(ProposedOpening, f64)> = None;
        for candidate in &scored {
            if best.map_or(true, |(_, best_objective)| candidate.1 > *best_objective) {
                best = Some(candidate);
            }
        }

        match best {
            Some((opening, objective)) if *objective > state.objective => {
                state.sites[opening.site].open(opening.utility(), opening.compensation);
                for entry in &opening.fill.entries {
                    state.ledger.commit(Allocation {
                        resource: entry.resource,
                        quantity: entry.quantity,
                        site: opening.site,
                    });
                }
                state.objective = *objective;
                Step::Committed {
                    site: opening.site,
                    objective: *objective,
                }
            }
            Some(_) => Step::Finished(Termination::NoImprovement),
            // Unreachable: candidates is non-empty, so scored is too.
            None => Step::Finished(Termination::AllOpen),
        }
    }

    /// Builds and scores the tentative opening of candidate `site`.
    fn score_candidate(
        &self,
        evaluator: &ObjectiveEvaluator<'_>,
        state: &OptimizerState,
        site: usize,
    ) -> (ProposedOpening, f64) {
        let fill = greedy_fill(self.instance, site, state.ledger.remaining());
        // Top the site up to saturation, bounded by the instance's
        // compensation cap.
        let compensation =
            (UTILITY_SATURATION - fill.utility).clamp(0.0, self.instance.compensation_bound);
        let opening = ProposedOpening {
            site,
            fill,
            compensation,
        };
        let objective = evaluator.objective(&state.sites, state.ledger.entries(), Some(&opening));
        tracing::trace!(site, objective, utility = opening.utility(), "scored candidate");
        (opening, objective)
    }
}
