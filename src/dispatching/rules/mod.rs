//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Time-based**: EEND, ESTART, SDUR
//! - **Value-based**: WDENS
//!
//! # Score Convention
//! All rules return lower scores for higher priority activities.
//!
//! # References
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Smith (1956), weighted shortest processing time

use super::{RuleScore, SelectionRule};
use crate::models::Activity;

// ======================== Time-based rules ========================

/// Earliest End.
///
/// Prioritizes activities that finish first. Visiting in this order and
/// accepting every compatible activity yields a maximum-cardinality
/// selection.
///
/// # Reference
/// Kleinberg & Tardos (2005), Theorem 4.3.
#[derive(Debug, Clone, Copy)]
pub struct EarliestEnd;

impl SelectionRule for EarliestEnd {
    fn name(&self) -> &'static str {
        "EEND"
    }

    fn evaluate(&self, activity: &Activity) -> RuleScore {
        activity.end as f64
    }

    fn description(&self) -> &'static str {
        "Earliest End"
    }
}

/// Earliest Start.
///
/// Prioritizes activities that begin first (chronological order).
#[derive(Debug, Clone, Copy)]
pub struct EarliestStart;

impl SelectionRule for EarliestStart {
    fn name(&self) -> &'static str {
        "ESTART"
    }

    fn evaluate(&self, activity: &Activity) -> RuleScore {
        activity.start as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Start"
    }
}

/// Shortest Duration.
///
/// Prioritizes short activities, which block the fewest others.
#[derive(Debug, Clone, Copy)]
pub struct ShortestDuration;

impl SelectionRule for ShortestDuration {
    fn name(&self) -> &'static str {
        "SDUR"
    }

    fn evaluate(&self, activity: &Activity) -> RuleScore {
        activity.duration() as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Duration"
    }
}

// ======================== Value-based rules ========================

/// Weight Density.
///
/// Prioritizes by weight per unit of time: `weight / max(duration, 1)`.
/// This is the ordering used by the genetic solver's greedy fallback.
#[derive(Debug, Clone, Copy)]
pub struct WeightDensity;

impl SelectionRule for WeightDensity {
    fn name(&self) -> &'static str {
        "WDENS"
    }

    fn evaluate(&self, activity: &Activity) -> RuleScore {
        let duration = activity.duration().max(1) as f64;
        -(activity.weight / duration) // Higher ratio = higher priority → negate
    }

    fn description(&self) -> &'static str {
        "Weight Density"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(start: i64, end: i64, weight: f64) -> Activity {
        Activity::new(1, start, end).with_weight(weight)
    }

    #[test]
    fn test_time_rules() {
        let a = act(10, 40, 1.0);
        assert_eq!(EarliestEnd.evaluate(&a), 40.0);
        assert_eq!(EarliestStart.evaluate(&a), 10.0);
        assert_eq!(ShortestDuration.evaluate(&a), 30.0);
    }

    #[test]
    fn test_weight_density() {
        let dense = act(0, 10, 5.0); // 0.5 per unit
        let sparse = act(0, 100, 10.0); // 0.1 per unit
        assert!(WeightDensity.evaluate(&dense) < WeightDensity.evaluate(&sparse));
        assert!((WeightDensity.evaluate(&dense) + 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_names_and_descriptions() {
        assert_eq!(EarliestEnd.name(), "EEND");
        assert_eq!(WeightDensity.description(), "Weight Density");
        assert_eq!(ShortestDuration.description(), "Shortest Duration");
    }
}
