//! # facloc
//!
//! Competitive facility location library: greedy site opening and resource
//! allocation under a distance-decay, market-share attraction model.
//!
//! Given a set of candidate sites, heterogeneous resource types with per-site
//! attractiveness yields, and customers shared with already-placed competitor
//! facilities, the optimizer repeatedly opens the one candidate site whose
//! best feasible resource fill (plus purchased compensation attractiveness)
//! most improves the net objective: demand-weighted, saturation-adjusted
//! revenue share minus build, resource, and compensation cost.
//!
//! ## Modules
//!
//! - [`models`] — Problem instance, site state, resource ledger, solve result
//! - [`attraction`] — Saturating attraction and capture-probability curves
//! - [`allocation`] — Greedy per-site resource fill
//! - [`evaluation`] — Net objective evaluation (gain minus cost)
//! - [`greedy`] — The greedy construction optimizer and its state machine
//!
//! ## Features
//!
//! - `parallel` — score candidate sites across threads with rayon; the
//!   selection step stays a deterministic reduction (lowest candidate index
//!   wins ties), so results are identical with and without the feature.

pub mod allocation;
pub mod attraction;
pub mod evaluation;
pub mod greedy;
pub mod models;
