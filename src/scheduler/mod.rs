//! Greedy selection, solver dispatch, and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` orders activities with a rule engine and accepts each
//! one that does not conflict with those already accepted. It is not
//! optimal, but provides fast baseline solutions and the GA fallback.
//!
//! # Dispatch
//!
//! `Dispatcher` validates input and runs one of the four solvers through
//! the common `IntervalSolver` trait.
//!
//! # KPI
//!
//! `SelectionKpi` computes selection metrics: weight and count coverage,
//! span, busy time, and utilization.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 and 6.1

mod dispatcher;
mod greedy;
mod kpi;

pub use dispatcher::{Dispatcher, DispatcherConfig, IntervalSolver};
pub use greedy::GreedyScheduler;
pub use kpi::SelectionKpi;
