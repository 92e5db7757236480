//! Canonical optimizer state.

use crate::models::{Instance, ResourceLedger, SiteState};

/// The committed state of a greedy construction run.
///
/// One canonical value owned by the caller and advanced only by the
/// optimizer's commit step; candidate scoring reads it and never writes.
///
/// # Examples
///
/// ```
/// use facloc::greedy::OptimizerState;
/// use facloc::models::Instance;
///
/// # let instance = Instance {
/// #     num_customers: 1, num_sites: 2, num_resources: 1, num_competitors: 0,
/// #     site_capacity: vec![10, 10], site_resource_cap: vec![vec![10], vec![10]],
/// #     resource_supply: vec![10], resource_yield: vec![vec![10.0], vec![10.0]],
/// #     demand: vec![100.0], site_distance: vec![vec![1.0, 1.0]],
/// #     competitor_distance: vec![vec![]], competitor_attraction: vec![],
/// #     build_cost: vec![0.0, 0.0], compensation_cost: vec![1.0, 1.0],
/// #     resource_cost: vec![vec![1.0], vec![1.0]], compensation_bound: 1000.0,
/// # };
/// let state = OptimizerState::new(&instance);
/// assert!(!state.all_open());
/// assert_eq!(state.objective(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct OptimizerState {
    pub(crate) sites: Vec<SiteState>,
    pub(crate) ledger: ResourceLedger,
    pub(crate) objective: f64,
}

impl OptimizerState {
    /// Initial state: every site closed, full supply, objective 0.
    ///
    /// The zero baseline means a first opening is only ever committed when
    /// it beats building nothing.
    pub fn new(instance: &Instance) -> Self {
        Self {
            sites: vec![SiteState::closed(); instance.num_sites],
            ledger: ResourceLedger::new(&instance.resource_supply),
            objective: 0.0,
        }
    }

    /// Per-site committed state.
    pub fn sites(&self) -> &[SiteState] {
        &self.sites
    }

    /// The committed resource ledger.
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// The committed objective value.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Returns `true` if every candidate site is open.
    pub fn all_open(&self) -> bool {
        self.sites.iter().all(SiteState::opened)
    }

    /// Marks a site as already open with zero fill and compensation, without
    /// touching the ledger or the objective.
    ///
    /// Supports starting a run from a partially (or fully) built
    /// configuration.
    ///
    /// # Panics
    ///
    /// Panics if the site is already open.
    pub fn preopen(&mut self, site: usize) {
        self.sites[site].open(0.0, 0.0);
    }
}
