//! Alternative selection strategies for comparison.
//!
//! Runs the exact weighted DP next to the classic greedy heuristics so a
//! caller can report how much weight each heuristic leaves on the table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::IntervalDpScheduler;
use crate::models::Activity;
use crate::scheduler::GreedyScheduler;

/// A named selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// Exact maximum total weight (DP).
    MaxWeight,
    /// Maximum number of activities (earliest-finish greedy).
    MaxCount,
    /// Visit by earliest end, accept if compatible.
    EarliestDeadline,
    /// Visit by shortest duration, accept if compatible.
    ShortestJob,
}

/// Maximum-cardinality selection, ignoring weights.
///
/// Classic earliest-finish greedy: sort by end and take every activity
/// that starts at or after the last accepted end. Optimal for counts.
pub fn unweighted_selection(activities: &[Activity]) -> Vec<Activity> {
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by_key(|a| a.end);

    let mut selected = Vec::new();
    let mut last_end: Option<i64> = None;
    for act in sorted {
        if last_end.map_or(true, |end| act.start >= end) {
            last_end = Some(act.end);
            selected.push(act.clone());
        }
    }
    selected
}

/// Runs every [`SelectionStrategy`] on the same input.
pub fn compare_strategies(activities: &[Activity]) -> BTreeMap<SelectionStrategy, Vec<Activity>> {
    let mut results = BTreeMap::new();
    results.insert(
        SelectionStrategy::MaxWeight,
        IntervalDpScheduler::new().schedule(activities).into_activities(),
    );
    results.insert(SelectionStrategy::MaxCount, unweighted_selection(activities));
    results.insert(
        SelectionStrategy::EarliestDeadline,
        GreedyScheduler::by_earliest_end().select(activities),
    );
    results.insert(
        SelectionStrategy::ShortestJob,
        GreedyScheduler::by_shortest_duration().select(activities),
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_conflict_free, total_weight};

    fn sample() -> Vec<Activity> {
        vec![
            Activity::new(1, 0, 90).with_weight(3.0),
            Activity::new(2, 100, 190).with_weight(3.0),
            Activity::new(3, 50, 140).with_weight(1.0),
            Activity::new(4, 200, 290).with_weight(3.0),
            Activity::new(5, 0, 300).with_weight(20.0),
        ]
    }

    #[test]
    fn test_unweighted_selection() {
        let selected = unweighted_selection(&sample());
        let ids: Vec<u32> = selected.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_unweighted_negative_times() {
        let acts = vec![Activity::new(1, -50, -10), Activity::new(2, -10, 0)];
        assert_eq!(unweighted_selection(&acts).len(), 2);
    }

    #[test]
    fn test_compare_strategies() {
        let acts = sample();
        let results = compare_strategies(&acts);
        assert_eq!(results.len(), 4);

        for selection in results.values() {
            assert!(is_conflict_free(selection));
        }

        let max_weight = total_weight(&results[&SelectionStrategy::MaxWeight]);
        assert!((max_weight - 20.0).abs() < 1e-10);
        for selection in results.values() {
            assert!(total_weight(selection) <= max_weight + 1e-9);
        }
        assert_eq!(results[&SelectionStrategy::MaxCount].len(), 3);
    }

    #[test]
    fn test_empty() {
        let results = compare_strategies(&[]);
        assert!(results.values().all(Vec::is_empty));
    }
}
