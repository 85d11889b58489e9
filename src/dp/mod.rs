//! Interval dynamic programming.
//!
//! Exact weighted interval scheduling plus the greedy strategies it is
//! usually compared against.
//!
//! # Submodules
//!
//! - `weighted`: [`IntervalDpScheduler`], the O(n log n) exact solver
//! - `strategies`: [`unweighted_selection`] and [`compare_strategies`]

mod strategies;
mod weighted;

pub use strategies::{compare_strategies, unweighted_selection, SelectionStrategy};
pub use weighted::IntervalDpScheduler;
