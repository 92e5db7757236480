//! Domain model types for the competitive facility-location problem.
//!
//! Provides the immutable problem [`Instance`] with input validation, the
//! per-site committed [`SiteState`], the global [`ResourceLedger`] of
//! committed allocations, and the [`SolveResult`] output record.

mod instance;
mod ledger;
mod result;
mod site;

pub use instance::{Instance, InstanceError};
pub use ledger::{Allocation, ResourceLedger};
pub use result::{SolveResult, Termination};
pub use site::SiteState;
