//! Conflict-free interval selection.
//!
//! Given activities with start/end times and weights, selects or arranges
//! them so that no two selected activities overlap. Four solvers share one
//! half-open conflict predicate (touching intervals do not conflict).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Activity`, `TimeWindow`, `Schedule`,
//!   `Algorithm`, and the shared `overlaps` predicate
//! - **`validation`**: Input integrity checks (duplicate IDs, empty intervals, bad weights)
//! - **`dispatching`**: Selection rules and the rule engine that orders candidates
//! - **`scheduler`**: Greedy baseline, `Dispatcher`, and selection KPIs
//! - **`coloring`**: Conflict graph coloring serialized onto one timeline
//! - **`dp`**: Exact weighted interval scheduling in O(n log n)
//! - **`backtracking`**: Exact branch-and-bound with mandatory/forbidden/window constraints
//! - **`ga`**: Bitstring genetic algorithm with greedy fallback
//!
//! # Example
//!
//! ```
//! use u_interval::models::{Activity, Algorithm};
//! use u_interval::scheduler::Dispatcher;
//!
//! let activities = vec![
//!     Activity::new(1, 0, 90).with_weight(3.0),
//!     Activity::new(2, 50, 140).with_weight(1.0),
//!     Activity::new(3, 100, 190).with_weight(3.0),
//! ];
//! let schedule = Dispatcher::default()
//!     .solve(Algorithm::Backtracking, &activities)
//!     .unwrap();
//! assert_eq!(schedule.ids(), vec![1, 3]);
//! assert_eq!(schedule.total_weight(), 6.0);
//! ```
//!
//! # Logging
//!
//! Solvers emit `tracing` events (`debug!` summaries, `warn!` for infeasible
//! constraints and capped searches). The crate never installs a subscriber.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design"
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

pub mod backtracking;
pub mod coloring;
pub mod dispatching;
pub mod dp;
pub mod error;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
pub use models::{Activity, ActivityId, Algorithm, Schedule, TimeWindow};
pub use scheduler::{Dispatcher, DispatcherConfig, IntervalSolver};
