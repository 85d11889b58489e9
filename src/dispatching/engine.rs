//! Rule engine for greedy candidate ordering.
//!
//! A primary rule followed by tie-breaking rules, compared lexicographically.
//! Activities that tie on every rule keep their input order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleScore, SelectionRule};
use crate::models::Activity;

/// Orders activities for greedy selection.
///
/// Scores are compared exactly (`f64::total_cmp`), so small weight
/// densities such as `1e-10` and `5e-10` still rank apart. Sorting is
/// stable.
///
/// # Example
/// ```
/// use u_interval::dispatching::{RuleEngine, rules};
/// use u_interval::models::Activity;
///
/// let activities = vec![
///     Activity::new(1, 0, 100),
///     Activity::new(2, 0, 10),
/// ];
/// let engine = RuleEngine::new().with_rule(rules::ShortestDuration);
/// assert_eq!(engine.sort_indices(&activities), vec![1, 0]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (input order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary rule. Rules added earlier take precedence.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sorts activities by priority (highest priority first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, activities: &[Activity]) -> Vec<usize> {
        // One score vector per activity.
        let keys: Vec<Vec<RuleScore>> = activities
            .iter()
            .map(|a| self.rules.iter().map(|r| r.evaluate(a)).collect())
            .collect();

        let mut indices: Vec<usize> = (0..activities.len()).collect();
        indices.sort_by(|&a, &b| compare_keys(&keys[a], &keys[b]));
        indices
    }
}

fn compare_keys(a: &[RuleScore], b: &[RuleScore]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make(id: u32, start: i64, end: i64, weight: f64) -> Activity {
        Activity::new(id, start, end).with_weight(weight)
    }

    #[test]
    fn test_earliest_end_ordering() {
        let acts = vec![
            make(1, 0, 300, 1.0),
            make(2, 0, 100, 1.0),
            make(3, 0, 200, 1.0),
        ];
        let engine = RuleEngine::new().with_rule(rules::EarliestEnd);

        let indices = engine.sort_indices(&acts);
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let acts = vec![
            make(1, 0, 100, 1.0),
            make(2, 50, 100, 1.0), // same end, shorter
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::EarliestEnd)
            .with_tie_breaker(rules::ShortestDuration);

        let indices = engine.sort_indices(&acts);
        // EEND ties → SDUR breaks it → activity 2 first
        assert_eq!(acts[indices[0]].id, 2);
    }

    #[test]
    fn test_tiny_scores_are_not_merged() {
        let acts = vec![make(1, 0, 10, 1e-9), make(2, 5, 15, 5e-9)];
        let engine = RuleEngine::new()
            .with_rule(rules::WeightDensity)
            .with_tie_breaker(rules::EarliestEnd);
        assert_eq!(engine.sort_indices(&acts), vec![1, 0]);
    }

    #[test]
    fn test_input_order_is_stable() {
        let acts = vec![make(9, 0, 10, 1.0), make(4, 20, 30, 1.0)];
        let engine = RuleEngine::new().with_rule(rules::ShortestDuration);
        assert_eq!(engine.sort_indices(&acts), vec![0, 1]);
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        let acts = vec![make(3, 50, 60, 1.0), make(1, 0, 10, 1.0)];
        assert_eq!(RuleEngine::new().sort_indices(&acts), vec![0, 1]);
    }

    #[test]
    fn test_empty_activities() {
        let engine = RuleEngine::new().with_rule(rules::EarliestEnd);
        assert!(engine.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_debug_lists_rule_names() {
        let engine = RuleEngine::new()
            .with_rule(rules::WeightDensity)
            .with_tie_breaker(rules::EarliestEnd);
        let text = format!("{engine:?}");
        assert!(text.contains("WDENS"));
        assert!(text.contains("EEND"));
    }
}
