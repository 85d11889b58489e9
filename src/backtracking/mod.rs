//! Exact constrained selection by branch-and-bound.
//!
//! Finds the maximum-weight conflict-free subset subject to
//! [`Constraints`]: mandatory IDs, forbidden IDs, and time windows.
//!
//! # Algorithm
//!
//! 1. Filter: drop forbidden activities and those outside every window.
//! 2. Check that the mandatory set is present and pairwise compatible.
//!    If not, the result is empty.
//! 3. Depth-first search over activities sorted by start. Each activity is
//!    either taken (if it starts at or after the last taken end) or skipped
//!    (unless mandatory). "Take" is explored first.
//! 4. Prune a branch when its weight plus all remaining weight cannot
//!    strictly beat the incumbent.
//!
//! # Complexity
//! Exponential in the worst case. Suitable for tens of activities; for
//! larger unconstrained inputs use [`crate::dp::IntervalDpScheduler`].
//! [`BacktrackingConfig::node_limit`] and [`BacktrackingConfig::time_limit`]
//! cap the work; a capped search returns its best-so-far with
//! `complete == false`.

mod constraints;
mod search;

pub use constraints::{Constraints, Infeasibility};

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{Activity, Algorithm, Schedule, TimeWindow};
use search::{SearchContext, SearchLimits};

/// Default cap on visited search nodes.
pub const DEFAULT_NODE_LIMIT: u64 = 5_000_000;

/// Search limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktrackingConfig {
    /// Maximum visited nodes (`None` = unbounded).
    pub node_limit: Option<u64>,
    /// Wall-clock budget (`None` = unbounded).
    pub time_limit: Option<Duration>,
}

impl Default for BacktrackingConfig {
    fn default() -> Self {
        Self {
            node_limit: Some(DEFAULT_NODE_LIMIT),
            time_limit: None,
        }
    }
}

impl BacktrackingConfig {
    /// Sets the node cap.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Removes the node cap.
    pub fn unbounded(mut self) -> Self {
        self.node_limit = None;
        self.time_limit = None;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Rejects zero limits.
    pub fn validate(&self) -> Result<()> {
        if self.node_limit == Some(0) {
            return Err(ScheduleError::InvalidConfig(
                "backtracking node_limit must be > 0".into(),
            ));
        }
        if self.time_limit == Some(Duration::ZERO) {
            return Err(ScheduleError::InvalidConfig(
                "backtracking time_limit must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Branch-and-bound solver.
///
/// # Example
/// ```
/// use u_interval::backtracking::{BacktrackingScheduler, Constraints};
/// use u_interval::models::Activity;
///
/// let activities = vec![
///     Activity::new(1, 0, 90).with_weight(3.0),
///     Activity::new(2, 50, 140).with_weight(1.0),
///     Activity::new(3, 100, 190).with_weight(3.0),
/// ];
/// let scheduler = BacktrackingScheduler::default();
///
/// assert_eq!(scheduler.schedule(&activities).ids(), vec![1, 3]);
///
/// let forced = Constraints::new().with_mandatory([2]);
/// assert_eq!(scheduler.schedule_with_constraints(&activities, &forced).ids(), vec![2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingScheduler {
    config: BacktrackingConfig,
}

impl BacktrackingScheduler {
    /// Creates a scheduler with the given limits.
    pub fn new(config: BacktrackingConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &BacktrackingConfig {
        &self.config
    }

    /// Unconstrained optimum.
    pub fn schedule(&self, activities: &[Activity]) -> Schedule {
        self.schedule_with_constraints(activities, &Constraints::default())
    }

    /// Optimum over activities that fit inside at least one window.
    pub fn schedule_with_time_windows(
        &self,
        activities: &[Activity],
        windows: &[TimeWindow],
    ) -> Schedule {
        let constraints = Constraints::new().with_windows(windows.iter().copied());
        self.schedule_with_constraints(activities, &constraints)
    }

    /// Optimum subject to `constraints`; empty when they cannot be met.
    pub fn schedule_with_constraints(
        &self,
        activities: &[Activity],
        constraints: &Constraints,
    ) -> Schedule {
        let candidates = constraints.candidates(activities);

        if let Err(reason) = constraints.check_mandatory(&candidates) {
            warn!(?reason, "backtracking: constraints infeasible, returning empty selection");
            return Schedule::empty(Algorithm::Backtracking);
        }

        let limits = SearchLimits {
            node_limit: self.config.node_limit,
            deadline: self.config.time_limit.map(|limit| Instant::now() + limit),
        };
        let candidate_count = candidates.len();
        let outcome =
            SearchContext::new(candidates, |a| constraints.mandatory.contains(&a.id), limits).run();

        if outcome.complete {
            debug!(
                candidates = candidate_count,
                nodes = outcome.nodes,
                best = outcome.best_weight,
                "backtracking: search finished"
            );
        } else {
            warn!(
                candidates = candidate_count,
                nodes = outcome.nodes,
                best = outcome.best_weight,
                "backtracking: search limit reached, returning best found so far"
            );
        }

        let selected = outcome.best.unwrap_or_default();
        Schedule::new(Algorithm::Backtracking, selected).with_complete(outcome.complete)
    }

    /// Every conflict-free subset (the empty one included), up to `limit`.
    ///
    /// Subsets come out in depth-first order, richest branches first.
    pub fn enumerate_schedules(&self, activities: &[Activity], limit: usize) -> Vec<Vec<Activity>> {
        search::enumerate(activities.iter().collect(), limit)
    }
}
