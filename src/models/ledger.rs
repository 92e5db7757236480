//! Global resource quota tracking.

/// One committed resource allocation: `quantity` units of `resource` at
/// `site`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// Resource type index (k).
    pub resource: usize,
    /// Units allocated.
    pub quantity: u32,
    /// Site index (j) the units were allocated to.
    pub site: usize,
}

/// Tracks the remaining global supply per resource type and the ordered list
/// of committed allocations.
///
/// The ledger is owned by the optimizer and mutated only when a site opening
/// is committed; tentative candidate fills never touch it. Commits are never
/// rolled back.
///
/// # Examples
///
/// ```
/// use facloc::models::{Allocation, ResourceLedger};
///
/// let mut ledger = ResourceLedger::new(&[5, 10]);
/// ledger.commit(Allocation { resource: 1, quantity: 4, site: 0 });
/// assert_eq!(ledger.remaining(), &[5, 6]);
/// assert_eq!(ledger.entries().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    remaining: Vec<u32>,
    entries: Vec<Allocation>,
}

impl ResourceLedger {
    /// Creates a ledger with the given global supply per resource type.
    pub fn new(supply: &[u32]) -> Self {
        Self {
            remaining: supply.to_vec(),
            entries: Vec::new(),
        }
    }

    /// Remaining global quota per resource type.
    pub fn remaining(&self) -> &[u32] {
        &self.remaining
    }

    /// Committed allocations, in commit order.
    pub fn entries(&self) -> &[Allocation] {
        &self.entries
    }

    /// Commits an allocation, decrementing the remaining quota.
    ///
    /// # Panics
    ///
    /// Panics if the allocation would drive the quota negative. The greedy
    /// fill bounds every quantity by the remaining quota, so this is an
    /// internal-consistency failure, not a recoverable condition.
    pub fn commit(&mut self, allocation: Allocation) {
        let remaining = &mut self.remaining[allocation.resource];
        assert!(
            allocation.quantity <= *remaining,
            "resource {} overdrawn: allocating {} with {} remaining",
            allocation.resource,
            allocation.quantity,
            remaining,
        );
        *remaining -= allocation.quantity;
        self.entries.push(allocation);
    }

    /// Aggregates the committed entries into a dense (site × resource)
    /// allocation matrix.
    pub fn allocation_matrix(&self, num_sites: usize, num_resources: usize) -> Vec<Vec<u32>> {
        let mut matrix = vec![vec![0u32; num_resources]; num_sites];
        for entry in &self.entries {
            matrix[entry.site][entry.resource] += entry.quantity;
        }
        matrix
    }
}
