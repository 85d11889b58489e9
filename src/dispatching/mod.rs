//! Selection-order rules and rule engine.
//!
//! Greedy selection visits activities in a priority order and accepts each
//! one that does not conflict with what was already accepted. The order is
//! produced by composable rules (earliest end, shortest duration, weight
//! density, ...) combined by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use u_interval::dispatching::RuleEngine;
//! use u_interval::dispatching::rules;
//! use u_interval::models::Activity;
//!
//! let activities = vec![
//!     Activity::new(1, 0, 100).with_weight(10.0),
//!     Activity::new(2, 40, 50).with_weight(5.0),
//! ];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::WeightDensity)
//!     .with_tie_breaker(rules::EarliestEnd);
//! assert_eq!(engine.sort_indices(&activities), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Scheduling)
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Activity;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (visited first).
pub type RuleScore = f64;

/// A rule that ranks activities for greedy selection.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that prefer large values
/// (weight, density) return the negated value.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "EEND", "WDENS").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of an activity.
    fn evaluate(&self, activity: &Activity) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
