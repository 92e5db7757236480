//! Net objective evaluation.

use crate::allocation::Fill;
use crate::attraction::{capture_probability, site_attraction};
use crate::models::{Allocation, Instance, SiteState};

/// A tentative opening of one additional site, evaluated against committed
/// state without copying it.
///
/// The evaluator overlays this delta on the committed site vector: the
/// proposed site is treated as open with `fill.utility + compensation`
/// utility, every other site keeps its committed state.
#[derive(Debug, Clone)]
pub struct ProposedOpening {
    /// Candidate site index (j).
    pub site: usize,
    /// Tentative resource fill for the candidate.
    pub fill: Fill,
    /// Tentative compensation attractiveness for the candidate.
    pub compensation: f64,
}

impl ProposedOpening {
    /// Total tentative utility: resource yield plus compensation.
    pub fn utility(&self) -> f64 {
        self.fill.utility + self.compensation
    }
}

/// Computes the net objective (gain minus cost) of a configuration.
///
/// Gain sums, over all customers, demand × capture probability × our share
/// of the customer's total attraction; attraction decays with squared
/// distance and competitor facilities contribute fixed attraction values.
/// Cost sums build costs, compensation costs, and resource usage costs.
///
/// All methods are read-only; a tentative candidate is passed as an optional
/// [`ProposedOpening`] overlay instead of a mutated copy of the state.
pub struct ObjectiveEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> ObjectiveEvaluator<'a> {
    /// Creates an evaluator for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Net objective: [`Self::total_gain`] minus [`Self::total_cost`].
    pub fn objective(
        &self,
        sites: &[SiteState],
        committed: &[Allocation],
        proposed: Option<&ProposedOpening>,
    ) -> f64 {
        self.total_gain(sites, proposed) - self.total_cost(sites, committed, proposed)
    }

    /// Demand-weighted revenue captured from all customers.
    pub fn total_gain(&self, sites: &[SiteState], proposed: Option<&ProposedOpening>) -> f64 {
        let mut total_gain = 0.0;
        for customer in 0..self.instance.num_customers {
            let (total_attraction, our_share) = self.customer_attraction(customer, sites, proposed);
            let gain =
                self.instance.demand[customer] * capture_probability(total_attraction) * our_share;
            tracing::trace!(
                customer,
                total_attraction,
                our_share,
                gain,
                "customer gain"
            );
            total_gain += gain;
        }
        total_gain
    }

    /// Build, compensation, and resource usage cost of the configuration.
    pub fn total_cost(
        &self,
        sites: &[SiteState],
        committed: &[Allocation],
        proposed: Option<&ProposedOpening>,
    ) -> f64 {
        let mut build_cost = 0.0;
        let mut compensation_cost = 0.0;
        for (j, site) in sites.iter().enumerate() {
            if site.opened() {
                build_cost += self.instance.build_cost[j];
                compensation_cost += self.instance.compensation_cost[j] * site.compensation();
            }
        }

        let mut usage_cost = 0.0;
        for entry in committed {
            usage_cost +=
                self.instance.resource_cost[entry.site][entry.resource] * f64::from(entry.quantity);
        }

        if let Some(opening) = proposed {
            build_cost += self.instance.build_cost[opening.site];
            compensation_cost +=
                self.instance.compensation_cost[opening.site] * opening.compensation;
            for entry in &opening.fill.entries {
                usage_cost += self.instance.resource_cost[opening.site][entry.resource]
                    * f64::from(entry.quantity);
            }
        }

        build_cost + compensation_cost + usage_cost
    }

    /// Total attraction perceived by one customer and our share of it.
    ///
    /// The share is 0 when the total is 0 (no open site anywhere and no
    /// competitors) rather than the 0/0 the raw ratio would produce.
    pub fn customer_attraction(
        &self,
        customer: usize,
        sites: &[SiteState],
        proposed: Option<&ProposedOpening>,
    ) -> (f64, f64) {
        let mut ours = 0.0;
        for (j, site) in sites.iter().enumerate() {
            let utility = match proposed {
                Some(opening) if opening.site == j => opening.utility(),
                _ if site.opened() => site.utility(),
                _ => continue,
            };
            let distance = self.instance.site_distance[customer][j];
            ours += site_attraction(utility) / (distance * distance);
        }

        let mut total = ours;
        for l in 0..self.instance.num_competitors {
            let distance = self.instance.competitor_distance[customer][l];
            total += self.instance.competitor_attraction[l] / (distance * distance);
        }

        let share = if total > 0.0 { ours / total } else { 0.0 };
        (total, share)
    }
}
