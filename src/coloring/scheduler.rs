//! Graph-coloring scheduler.
//!
//! # Algorithm
//!
//! 1. Build the conflict graph (O(n²)).
//! 2. Greedily color it; each color class is an independent set.
//! 3. Serialize: visit color classes in increasing color order, sort each
//!    class by original start, and place activities back-to-back on one
//!    synthetic timeline with a one-unit gap between placements.
//!
//! Every activity is kept; only its timing changes. The number of colors
//! is an upper bound on the chromatic number (greedy, order-dependent).
//! Placement fails with [`ScheduleError::TimelineOverflow`] if the
//! serialized timeline would run past `i64::MAX`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::graph::{ColoringOrder, ConflictGraph};
use crate::error::{Result, ScheduleError};
use crate::models::{Activity, ActivityId, Algorithm, Schedule};

/// Gap inserted after each placement on the synthetic timeline.
pub const PLACEMENT_GAP: i64 = 1;

/// Graph-coloring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoringConfig {
    /// Vertex order for greedy coloring.
    pub order: ColoringOrder,
    /// Start of the synthetic timeline.
    pub origin: i64,
}

impl ColoringConfig {
    /// Sets the vertex order.
    pub fn with_order(mut self, order: ColoringOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the timeline origin.
    pub fn with_origin(mut self, origin: i64) -> Self {
        self.origin = origin;
        self
    }
}

/// Conflict-graph coloring scheduler.
///
/// # Example
/// ```
/// use u_interval::coloring::GraphColoringScheduler;
/// use u_interval::models::Activity;
///
/// let activities = vec![
///     Activity::new(1, 0, 90),
///     Activity::new(2, 50, 140),
///     Activity::new(3, 100, 190),
/// ];
/// let schedule = GraphColoringScheduler::default().schedule(&activities).unwrap();
/// assert_eq!(schedule.len(), 3);
/// assert_eq!(schedule.color_count, Some(2));
/// assert!(schedule.is_conflict_free());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphColoringScheduler {
    config: ColoringConfig,
}

impl GraphColoringScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: ColoringConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ColoringConfig {
        &self.config
    }

    /// Colors and serializes `activities`.
    pub fn schedule(&self, activities: &[Activity]) -> Result<Schedule> {
        if activities.is_empty() {
            return Ok(Schedule::empty(Algorithm::GraphColoring).with_color_count(0));
        }

        let graph = ConflictGraph::build(activities);
        let coloring = graph.color(self.config.order);
        let color_count = coloring.color_count();
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            colors = color_count,
            "coloring: conflict graph colored"
        );

        let by_id: HashMap<ActivityId, &Activity> = activities.iter().map(|a| (a.id, a)).collect();
        let mut placed = Vec::with_capacity(activities.len());
        let mut cursor = self.config.origin;

        for ids in coloring.groups().into_values() {
            let mut group: Vec<&Activity> = ids.iter().filter_map(|id| by_id.get(id).copied()).collect();
            group.sort_by_key(|a| a.start);

            for act in group {
                let moved = act
                    .retimed(cursor)
                    .ok_or(ScheduleError::TimelineOverflow(act.id))?;
                cursor = moved
                    .end
                    .checked_add(PLACEMENT_GAP)
                    .ok_or(ScheduleError::TimelineOverflow(act.id))?;
                placed.push(moved);
            }
        }

        Ok(Schedule::new(Algorithm::GraphColoring, placed).with_color_count(color_count))
    }
}

/// Chromatic number estimate from degree-descending greedy coloring.
pub fn welsh_powell_color_count(activities: &[Activity]) -> usize {
    ConflictGraph::build(activities)
        .color(ColoringOrder::WelshPowell)
        .color_count()
}
