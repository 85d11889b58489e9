//! Weighted interval scheduling by dynamic programming.
//!
//! # Algorithm
//!
//! 1. Sort activities by end time (stable).
//! 2. For each `i`, find `p(i)`: the last `j < i` with `end_j <= start_i`,
//!    by binary search over the sorted end times.
//! 3. Fill `best[i + 1] = max(best[i], w_i + best[p(i) + 1])` bottom-up,
//!    with `best[0] = 0`.
//! 4. Walk back from the last index. When "with" and "without" are equal
//!    the activity is **included**; this fixes which of several optimal
//!    subsets is returned.
//!
//! # Complexity
//! O(n log n) time, O(n) space.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use tracing::debug;

use crate::models::{Activity, Algorithm, Schedule};

/// Exact maximum-weight conflict-free selection.
///
/// # Example
/// ```
/// use u_interval::dp::IntervalDpScheduler;
/// use u_interval::models::Activity;
///
/// let activities = vec![
///     Activity::new(1, 0, 90).with_weight(3.0),
///     Activity::new(2, 50, 140).with_weight(1.0),
///     Activity::new(3, 100, 190).with_weight(3.0),
/// ];
/// let schedule = IntervalDpScheduler::new().schedule(&activities);
/// assert_eq!(schedule.ids(), vec![1, 3]);
/// assert_eq!(schedule.total_weight(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalDpScheduler;

impl IntervalDpScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Returns the optimal subset in chronological order.
    pub fn schedule(&self, activities: &[Activity]) -> Schedule {
        let table = DpTable::build(activities);
        let selected = table.reconstruct();
        debug!(
            n = activities.len(),
            selected = selected.len(),
            optimum = table.optimum(),
            "dp: weighted interval scheduling solved"
        );
        Schedule::new(Algorithm::DynamicProgramming, selected)
    }

    /// Optimal total weight without reconstructing the subset.
    pub fn max_weight(&self, activities: &[Activity]) -> f64 {
        DpTable::build(activities).optimum()
    }
}

/// Sorted activities with predecessor indices and the filled value table.
struct DpTable<'a> {
    sorted: Vec<&'a Activity>,
    /// `pred[i]` = number of activities compatible before `i`, i.e. `p(i) + 1`.
    pred: Vec<usize>,
    /// `best[k]` = optimum over the first `k` sorted activities.
    best: Vec<f64>,
}

impl<'a> DpTable<'a> {
    fn build(activities: &'a [Activity]) -> Self {
        let mut sorted: Vec<&Activity> = activities.iter().collect();
        sorted.sort_by_key(|a| a.end);

        let pred: Vec<usize> = (0..sorted.len())
            .map(|i| {
                let start = sorted[i].start;
                sorted[..i].partition_point(|a| a.end <= start)
            })
            .collect();

        let mut best = vec![0.0; sorted.len() + 1];
        for i in 0..sorted.len() {
            let with = sorted[i].weight + best[pred[i]];
            best[i + 1] = best[i].max(with);
        }

        Self { sorted, pred, best }
    }

    fn optimum(&self) -> f64 {
        self.best.last().copied().unwrap_or(0.0)
    }

    fn reconstruct(&self) -> Vec<Activity> {
        let mut selected = Vec::new();
        let mut k = self.sorted.len();

        while k > 0 {
            let i = k - 1;
            let with = self.sorted[i].weight + self.best[self.pred[i]];
            let without = self.best[i];
            if with >= without {
                selected.push(self.sorted[i].clone());
                k = self.pred[i];
            } else {
                k = i;
            }
        }

        selected.reverse();
        selected
    }
}
