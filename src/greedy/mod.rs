//! Greedy construction: open the best-scoring candidate site per iteration
//! until nothing improves the objective or every site is open.
//!
//! - [`GreedyOptimizer`] — the outer loop; [`GreedyOptimizer::solve`] for a
//!   full run, [`GreedyOptimizer::step`] for one transition at a time
//! - [`OptimizerState`] — the single canonical committed state
//! - [`Step`] — the outcome of one transition

mod optimizer;
mod state;

pub use optimizer::{GreedyOptimizer, Step};
pub use state::OptimizerState;
