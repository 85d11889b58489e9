//! Selection quality metrics (KPIs).
//!
//! Computes summary indicators from a schedule and the activities that
//! were offered to the solver.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Selected | Number of activities in the schedule |
//! | Total Weight | Sum of selected weights |
//! | Weight Coverage | Selected weight / offered weight |
//! | Count Coverage | Selected count / offered count |
//! | Span | Latest end - earliest start |
//! | Busy Time | Sum of selected durations |
//! | Utilization | Busy time / span |

use crate::models::{total_weight, Activity, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionKpi {
    /// Number of selected activities.
    pub selected: usize,
    /// Number of offered activities.
    pub offered: usize,
    /// Sum of selected weights.
    pub total_weight: f64,
    /// Selected weight / offered weight (0.0..1.0; 1.0 when nothing offered).
    pub weight_coverage: f64,
    /// Selected count / offered count (0.0..1.0; 1.0 when nothing offered).
    pub count_coverage: f64,
    /// Latest end minus earliest start of the selection.
    pub span: i64,
    /// Sum of selected durations.
    pub busy_time: i64,
    /// Busy time / span (0.0 for an empty selection).
    pub utilization: f64,
}

impl SelectionKpi {
    /// Computes KPIs from a schedule and its input activities.
    ///
    /// # Arguments
    /// * `schedule` - The solver output.
    /// * `offered` - The activities given to the solver.
    pub fn calculate(schedule: &Schedule, offered: &[Activity]) -> Self {
        let selected = schedule.len();
        let total = schedule.total_weight();
        let offered_weight = total_weight(offered);

        let weight_coverage = if offered_weight > 0.0 {
            total / offered_weight
        } else {
            1.0
        };

        let count_coverage = if offered.is_empty() {
            1.0
        } else {
            selected as f64 / offered.len() as f64
        };

        let earliest = schedule.activities.iter().map(|a| a.start).min();
        let latest = schedule.activities.iter().map(|a| a.end).max();
        let span = match (earliest, latest) {
            (Some(s), Some(e)) => e.saturating_sub(s),
            _ => 0,
        };

        let busy_time = schedule
            .activities
            .iter()
            .fold(0i64, |acc, a| acc.saturating_add(a.duration()));
        let utilization = if span > 0 {
            busy_time as f64 / span as f64
        } else {
            0.0
        };

        Self {
            selected,
            offered: offered.len(),
            total_weight: total,
            weight_coverage,
            count_coverage,
            span,
            busy_time,
            utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;

    fn offered() -> Vec<Activity> {
        vec![
            Activity::new(1, 0, 90).with_weight(3.0),
            Activity::new(2, 50, 140).with_weight(1.0),
            Activity::new(3, 100, 190).with_weight(3.0),
        ]
    }

    #[test]
    fn test_kpi_basic() {
        let acts = offered();
        let schedule = Schedule::new(
            Algorithm::DynamicProgramming,
            vec![acts[0].clone(), acts[2].clone()],
        );

        let kpi = SelectionKpi::calculate(&schedule, &acts);
        assert_eq!(kpi.selected, 2);
        assert_eq!(kpi.offered, 3);
        assert!((kpi.total_weight - 6.0).abs() < 1e-10);
        assert!((kpi.weight_coverage - 6.0 / 7.0).abs() < 1e-10);
        assert!((kpi.count_coverage - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.span, 190);
        assert_eq!(kpi.busy_time, 180);
        assert!((kpi.utilization - 180.0 / 190.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SelectionKpi::calculate(&Schedule::empty(Algorithm::Genetic), &[]);
        assert_eq!(kpi.selected, 0);
        assert_eq!(kpi.span, 0);
        assert!((kpi.weight_coverage - 1.0).abs() < 1e-10);
        assert!((kpi.utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_zero_weight_offered() {
        let acts = vec![Activity::new(1, 0, 10).with_weight(0.0)];
        let schedule = Schedule::new(Algorithm::Backtracking, Vec::new());
        let kpi = SelectionKpi::calculate(&schedule, &acts);
        assert!((kpi.weight_coverage - 1.0).abs() < 1e-10);
        assert!((kpi.count_coverage - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_single_selection() {
        let acts = offered();
        let schedule = Schedule::new(Algorithm::DynamicProgramming, vec![acts[0].clone()]);
        let kpi = SelectionKpi::calculate(&schedule, &acts);
        assert!((kpi.weight_coverage - 3.0 / 7.0).abs() < 1e-10);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
    }
}
