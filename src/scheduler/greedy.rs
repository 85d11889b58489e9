//! Rule-driven greedy selection.
//!
//! # Algorithm
//!
//! 1. Order activities with a [`RuleEngine`].
//! 2. Visit them in that order, accepting each activity that does not
//!    conflict with any activity accepted so far.
//! 3. Return the accepted set in chronological order.
//!
//! # Complexity
//! O(n log n + n * k) where k = number of accepted activities.
//!
//! The result is always conflict-free but only optimal for special cases
//! (earliest-end order maximizes the count of selected activities).

use tracing::trace;

use crate::dispatching::{rules, RuleEngine};
use crate::models::{overlaps, Activity};

/// Greedy conflict-free selector.
///
/// # Example
///
/// ```
/// use u_interval::scheduler::GreedyScheduler;
/// use u_interval::models::Activity;
///
/// let activities = vec![
///     Activity::new(1, 0, 90).with_weight(3.0),
///     Activity::new(2, 50, 140).with_weight(1.0),
///     Activity::new(3, 100, 190).with_weight(3.0),
/// ];
/// let selected = GreedyScheduler::by_weight_density().select(&activities);
/// let ids: Vec<u32> = selected.iter().map(|a| a.id).collect();
/// assert_eq!(ids, vec![1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    rule_engine: RuleEngine,
}

impl GreedyScheduler {
    /// Creates a selector driven by the given rule engine.
    pub fn new(rule_engine: RuleEngine) -> Self {
        Self { rule_engine }
    }

    /// Weight per unit time, descending. Used as the GA fallback.
    pub fn by_weight_density() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::WeightDensity))
    }

    /// Earliest end first (maximum-cardinality selection).
    pub fn by_earliest_end() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::EarliestEnd))
    }

    /// Shortest duration first.
    pub fn by_shortest_duration() -> Self {
        Self::new(
            RuleEngine::new()
                .with_rule(rules::ShortestDuration)
                .with_tie_breaker(rules::EarliestStart),
        )
    }

    /// The rule engine that orders candidates.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    /// Selects a conflict-free subset, returned in chronological order.
    pub fn select(&self, activities: &[Activity]) -> Vec<Activity> {
        let order = self.rule_engine.sort_indices(activities);
        let mut accepted: Vec<&Activity> = Vec::new();

        for idx in order {
            let candidate = &activities[idx];
            if accepted.iter().all(|a| !overlaps(a, candidate)) {
                accepted.push(candidate);
            } else {
                trace!(id = candidate.id, "greedy: rejected conflicting activity");
            }
        }

        let mut selected: Vec<Activity> = accepted.into_iter().cloned().collect();
        selected.sort_by_key(|a| (a.start, a.end));
        selected
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::by_weight_density()
    }
}
