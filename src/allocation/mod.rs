//! Greedy resource allocation for a single candidate site.
//!
//! - [`greedy_fill`] — highest-yield-first fill under four simultaneous
//!   bounds, O(k log k) per candidate

mod greedy_fill;

pub use greedy_fill::{greedy_fill, Fill, FillEntry};
