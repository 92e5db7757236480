//! Greedy per-site resource fill.
//!
//! Fills one candidate site with the highest-yield resource types first,
//! bounded simultaneously by the site's total capacity, the site's per-type
//! sub-cap, the remaining global quota per type, and the utility saturation
//! point (there is no value in overshooting utility 100, so the last bound
//! caps each take at `ceil((100 − utility) / yield)` units).

use crate::attraction::UTILITY_SATURATION;
use crate::models::Instance;

/// One entry of a tentative fill: `quantity` units of `resource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillEntry {
    /// Resource type index (k).
    pub resource: usize,
    /// Units to allocate.
    pub quantity: u32,
}

/// The result of greedily filling one candidate site.
///
/// `entries` preserves allocation order (highest yield first); `utility` is
/// the accumulated attraction yield, which may overshoot the saturation
/// point by at most one take and may be 0 when nothing fits.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    /// Ordered allocations for this site.
    pub entries: Vec<FillEntry>,
    /// Accumulated resource-derived utility.
    pub utility: f64,
}

impl Fill {
    /// A fill that allocates nothing.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            utility: 0.0,
        }
    }
}

/// Greedily fills candidate site `site` against the given remaining global
/// quotas.
///
/// Resource types are taken in descending yield order (ties broken by lower
/// type index); each take is the minimum of the four bounds above. Filling
/// stops when the site capacity is exhausted, every type's quota is spent,
/// or utility reaches saturation. Types with zero yield are skipped — they
/// add cost but no utility.
///
/// Pure with respect to committed state: the caller's ledger is read through
/// `remaining_supply` and never mutated here.
///
/// # Examples
///
/// ```
/// use facloc::allocation::greedy_fill;
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
/// // Ten units of yield 10 reach saturation; the other ten stay unused.
/// let fill = greedy_fill(&instance, 0, &[20]);
/// assert_eq!(fill.entries[0].quantity, 10);
/// assert_eq!(fill.utility, 100.0);
/// ```
pub fn greedy_fill(instance: &Instance, site: usize, remaining_supply: &[u32]) -> Fill {
    let yields = &instance.resource_yield[site];
    let sub_caps = &instance.site_resource_cap[site];

    // Descending yield, ties by lower type index.
    let mut order: Vec<usize> = (0..instance.num_resources).collect();
    order.sort_by(|&a, &b| {
        yields[b]
            .partial_cmp(&yields[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut fill = Fill::empty();
    let mut site_capacity = instance.site_capacity[site];

    for resource in order {
        if site_capacity == 0 || fill.utility >= UTILITY_SATURATION {
            break;
        }
        let yield_per_unit = yields[resource];
        if yield_per_unit <= 0.0 {
            continue;
        }

        let units_to_saturation =
            clamp_to_u32(((UTILITY_SATURATION - fill.utility) / yield_per_unit).ceil());
        let quantity = site_capacity
            .min(sub_caps[resource])
            .min(remaining_supply[resource])
            .min(units_to_saturation);
        if quantity == 0 {
            continue;
        }

        site_capacity -= quantity;
        fill.utility += f64::from(quantity) * yield_per_unit;
        fill.entries.push(FillEntry { resource, quantity });
    }

    fill
}

fn clamp_to_u32(value: f64) -> u32 {
    if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(
        site_capacity: u32,
        sub_caps: Vec<u32>,
        supply: Vec<u32>,
        yields: Vec<f64>,
    ) -> Instance {
        let k = yields.len();
        Instance {
            num_customers: 1,
            num_sites: 1,
            num_resources: k,
            num_competitors: 0,
            site_capacity: vec![site_capacity],
            site_resource_cap: vec![sub_caps],
            resource_supply: supply,
            resource_yield: vec![yields],
            demand: vec![100.0],
            site_distance: vec![vec![1.0]],
            competitor_distance: vec![vec![]],
            competitor_attraction: vec![],
            build_cost: vec![0.0],
            compensation_cost: vec![1.0],
            resource_cost: vec![vec![1.0; k]],
            compensation_bound: 1000.0,
        }
    }

    #[test]
    fn test_saturation_caps_take() {
        let inst = instance(20, vec![20], vec![20], vec![10.0]);
        let fill = greedy_fill(&inst, 0, &[20]);
        assert_eq!(
            fill.entries,
            vec![FillEntry {
                resource: 0,
                quantity: 10,
            }]
        );
        assert_eq!(fill.utility, 100.0);
    }

    #[test]
    fn test_site_capacity_binds() {
        let inst = instance(5, vec![20], vec![20], vec![10.0]);
        let fill = greedy_fill(&inst, 0, &[20]);
        assert_eq!(fill.entries[0].quantity, 5);
        assert_eq!(fill.utility, 50.0);
    }

    #[test]
    fn test_sub_cap_binds() {
        let inst = instance(20, vec![3], vec![20], vec![10.0]);
        let fill = greedy_fill(&inst, 0, &[20]);
        assert_eq!(fill.entries[0].quantity, 3);
        assert_eq!(fill.utility, 30.0);
    }

    #[test]
    fn test_global_quota_binds() {
        let inst = instance(20, vec![20], vec![20], vec![10.0]);
        let fill = greedy_fill(&inst, 0, &[4]);
        assert_eq!(fill.entries[0].quantity, 4);
        assert_eq!(fill.utility, 40.0);
    }

    #[test]
    fn test_highest_yield_first() {
        let inst = instance(6, vec![4, 4], vec![10, 10], vec![2.0, 9.0]);
        let fill = greedy_fill(&inst, 0, &[10, 10]);
        // Type 1 (yield 9) is taken first: 4 units (sub-cap), then type 0
        // fills the remaining 2 units of site capacity.
        assert_eq!(
            fill.entries,
            vec![
                FillEntry {
                    resource: 1,
                    quantity: 4,
                },
                FillEntry {
                    resource: 0,
                    quantity: 2,
                },
            ]
        );
        assert_eq!(fill.utility, 4.0 * 9.0 + 2.0 * 2.0);
    }

    #[test]
    fn test_yield_tie_prefers_lower_index() {
        let inst = instance(3, vec![10, 10], vec![10, 10], vec![5.0, 5.0]);
        let fill = greedy_fill(&inst, 0, &[10, 10]);
        assert_eq!(fill.entries[0].resource, 0);
        assert_eq!(fill.entries[0].quantity, 3);
    }

    #[test]
    fn test_overshoot_by_at_most_one_take() {
        // Yield 30: ceil(100 / 30) = 4 units, utility 120 > 100.
        let inst = instance(20, vec![20], vec![20], vec![30.0]);
        let fill = greedy_fill(&inst, 0, &[20]);
        assert_eq!(fill.entries[0].quantity, 4);
        assert_eq!(fill.utility, 120.0);
    }

    #[test]
    fn test_stops_at_saturation_across_types() {
        let inst = instance(50, vec![50, 50], vec![50, 50], vec![10.0, 8.0]);
        let fill = greedy_fill(&inst, 0, &[50, 50]);
        // Type 0 alone reaches saturation; type 1 is never touched.
        assert_eq!(fill.entries.len(), 1);
        assert_eq!(fill.utility, 100.0);
    }

    #[test]
    fn test_zero_yield_skipped() {
        let inst = instance(10, vec![10, 10], vec![10, 10], vec![0.0, 2.0]);
        let fill = greedy_fill(&inst, 0, &[10, 10]);
        assert_eq!(fill.entries.len(), 1);
        assert_eq!(fill.entries[0].resource, 1);
    }

    #[test]
    fn test_exhausted_quota_gives_empty_fill() {
        let inst = instance(10, vec![10], vec![10], vec![10.0]);
        let fill = greedy_fill(&inst, 0, &[0]);
        assert!(fill.entries.is_empty());
        assert_eq!(fill.utility, 0.0);
    }

    #[test]
    fn test_all_zero_yields_give_empty_fill() {
        let inst = instance(10, vec![10, 10], vec![10, 10], vec![0.0, 0.0]);
        let fill = greedy_fill(&inst, 0, &[10, 10]);
        assert!(fill.entries.is_empty());
        assert_eq!(fill.utility, 0.0);
    }

    #[test]
    fn test_no_zero_quantity_entries() {
        // Type 1 has the higher yield but no quota left; it must not appear
        // as a zero-quantity entry.
        let inst = instance(10, vec![10, 10], vec![10, 10], vec![2.0, 9.0]);
        let fill = greedy_fill(&inst, 0, &[10, 0]);
        assert!(fill.entries.iter().all(|e| e.quantity > 0));
        assert_eq!(fill.entries[0].resource, 0);
    }

    #[test]
    fn test_quantities_within_all_bounds() {
        let inst = instance(7, vec![4, 6], vec![3, 20], vec![6.0, 5.0]);
        let remaining = [3, 20];
        let fill = greedy_fill(&inst, 0, &remaining);
        let total: u32 = fill.entries.iter().map(|e| e.quantity).sum();
        assert!(total <= inst.site_capacity[0]);
        for entry in &fill.entries {
            assert!(entry.quantity <= inst.site_resource_cap[0][entry.resource]);
            assert!(entry.quantity <= remaining[entry.resource]);
        }
    }
}
