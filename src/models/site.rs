//! Per-site mutable state.

/// The committed state of one candidate site.
///
/// Every site starts closed with zero utility. A site is opened at most once,
/// when the optimizer commits it as an iteration's winner; its utility and
/// compensation are fixed at that moment and never revisited.
///
/// # Examples
///
/// ```
/// use facloc::models::SiteState;
///
/// let mut site = SiteState::closed();
/// assert!(!site.opened());
/// site.open(100.0, 0.0);
/// assert!(site.opened());
/// assert_eq!(site.utility(), 100.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteState {
    opened: bool,
    compensation: f64,
    utility: f64,
}

impl SiteState {
    /// Creates a closed site with zero utility and compensation.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Returns `true` if this site has been opened.
    pub fn opened(&self) -> bool {
        self.opened
    }

    /// Compensation attractiveness purchased at this site.
    pub fn compensation(&self) -> f64 {
        self.compensation
    }

    /// Total utility: resource-derived attraction yield plus compensation.
    pub fn utility(&self) -> f64 {
        self.utility
    }

    /// Opens this site with the given total utility and compensation.
    ///
    /// # Panics
    ///
    /// Panics if the site is already open; opened sites are never revisited.
    pub fn open(&mut self, utility: f64, compensation: f64) {
        assert!(!self.opened, "site opened twice");
        self.opened = true;
        self.utility = utility;
        self.compensation = compensation;
    }
}
