//! Schedule (solution) model.
//!
//! A schedule is the ordered, conflict-free selection returned by a
//! solver. Graph-coloring schedules contain retimed copies of the input;
//! every other solver returns a subset with original timings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::activity::{self, Activity, ActivityId};
use crate::error::ScheduleError;

/// Solving strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Conflict-graph coloring serialized onto one timeline.
    GraphColoring,
    /// Exact weighted interval scheduling.
    #[serde(rename = "dynamic-prog")]
    DynamicProgramming,
    /// Exact branch-and-bound search with optional constraints.
    Backtracking,
    /// Bitstring genetic algorithm with greedy fallback.
    Genetic,
}

impl Algorithm {
    /// All strategies, in dispatcher order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::GraphColoring,
        Algorithm::DynamicProgramming,
        Algorithm::Backtracking,
        Algorithm::Genetic,
    ];

    /// Canonical dispatcher token.
    pub fn token(&self) -> &'static str {
        match self {
            Algorithm::GraphColoring => "graph-coloring",
            Algorithm::DynamicProgramming => "dynamic-prog",
            Algorithm::Backtracking => "backtracking",
            Algorithm::Genetic => "genetic",
        }
    }

    /// Whether the strategy returns a maximum-weight subset.
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Algorithm::DynamicProgramming | Algorithm::Backtracking
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graph-coloring" | "graph_coloring" | "coloring" => Ok(Algorithm::GraphColoring),
            "dynamic-prog" | "dynamic_prog" | "dp" => Ok(Algorithm::DynamicProgramming),
            "backtracking" | "bt" => Ok(Algorithm::Backtracking),
            "genetic" | "ga" => Ok(Algorithm::Genetic),
            _ => Err(ScheduleError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A solver result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Strategy that produced this schedule.
    pub algorithm: Algorithm,
    /// Selected (or retimed) activities, in output order.
    pub activities: Vec<Activity>,
    /// `false` when a search stopped at its node or time limit.
    pub complete: bool,
    /// Colors used (graph coloring only).
    pub color_count: Option<usize>,
}

impl Schedule {
    /// Creates a complete schedule.
    pub fn new(algorithm: Algorithm, activities: Vec<Activity>) -> Self {
        Self {
            algorithm,
            activities,
            complete: true,
            color_count: None,
        }
    }

    /// Creates an empty schedule.
    pub fn empty(algorithm: Algorithm) -> Self {
        Self::new(algorithm, Vec::new())
    }

    /// Marks whether the search ran to completion.
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    /// Records the number of colors used.
    pub fn with_color_count(mut self, colors: usize) -> Self {
        self.color_count = Some(colors);
        self
    }

    /// Sum of selected weights.
    pub fn total_weight(&self) -> f64 {
        activity::total_weight(&self.activities)
    }

    /// Selected IDs in output order.
    pub fn ids(&self) -> Vec<ActivityId> {
        self.activities.iter().map(|a| a.id).collect()
    }

    /// Whether `id` is part of the schedule.
    pub fn contains(&self, id: ActivityId) -> bool {
        self.activities.iter().any(|a| a.id == id)
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Whether no two activities conflict.
    pub fn is_conflict_free(&self) -> bool {
        activity::is_conflict_free(&self.activities)
    }

    /// Latest end time, or `None` when empty.
    pub fn makespan(&self) -> Option<i64> {
        self.activities.iter().map(|a| a.end).max()
    }

    /// Consumes the schedule, returning its activities.
    pub fn into_activities(self) -> Vec<Activity> {
        self.activities
    }
}
