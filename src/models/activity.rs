//! Activity (interval) model and the shared conflict predicate.
//!
//! An activity is the smallest selectable unit: a half-open time interval
//! `[start, end)` carrying a non-negative weight. Display metadata (`name`,
//! `room`) travels with the record but never influences any algorithm.
//!
//! # Conflict Semantics
//!
//! Two activities conflict iff their intervals intersect with positive
//! length. Touching intervals (`a.end == b.start`) do **not** conflict.
//! Every solver in this crate goes through [`overlaps`], so a result that
//! one solver calls conflict-free is conflict-free for all of them.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// Caller-assigned activity identifier.
pub type ActivityId = u32;

/// A weighted activity to be selected.
///
/// Owned by the caller. Solvers read activities and return copies; they
/// never mutate the input slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: ActivityId,
    /// Interval start (inclusive).
    pub start: i64,
    /// Interval end (exclusive). Must be greater than `start`.
    pub end: i64,
    /// Selection value (>= 0).
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Room or location label.
    #[serde(default)]
    pub room: String,
}

fn default_weight() -> f64 {
    1.0
}

impl Activity {
    /// Creates an activity with weight 1.0 and empty metadata.
    pub fn new(id: ActivityId, start: i64, end: i64) -> Self {
        Self {
            id,
            start,
            end,
            weight: default_weight(),
            name: String::new(),
            room: String::new(),
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the room label.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Interval length (`end - start`), saturating at `i64::MAX`.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether this activity conflicts with `other`.
    #[inline]
    pub fn overlaps(&self, other: &Activity) -> bool {
        overlaps(self, other)
    }

    /// Whether the whole interval lies inside `window`.
    pub fn fits_within(&self, window: &TimeWindow) -> bool {
        window.contains_interval(self.start, self.end)
    }

    /// Returns a copy with the same duration placed at `start`, or `None`
    /// if the new end does not fit in an `i64`.
    pub fn retimed(&self, start: i64) -> Option<Self> {
        let end = start.checked_add(self.end.checked_sub(self.start)?)?;
        Some(Self {
            start,
            end,
            ..self.clone()
        })
    }
}

/// The conflict predicate shared by every solver.
///
/// `true` iff NOT(`a.end <= b.start` OR `b.end <= a.start`).
#[inline]
pub fn overlaps(a: &Activity, b: &Activity) -> bool {
    !(a.end <= b.start || b.end <= a.start)
}

/// Number of conflicting pairs in `activities`.
pub fn count_conflicts(activities: &[Activity]) -> usize {
    let mut conflicts = 0;
    for (i, a) in activities.iter().enumerate() {
        for b in &activities[i + 1..] {
            if overlaps(a, b) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Whether no two activities in the slice conflict.
///
/// Sorts a view by start time and checks neighbours, O(n log n).
pub fn is_conflict_free(activities: &[Activity]) -> bool {
    if activities.len() < 2 {
        return true;
    }
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by_key(|a| (a.start, a.end));
    sorted.windows(2).all(|pair| !overlaps(pair[0], pair[1]))
}

/// Sum of weights.
pub fn total_weight(activities: &[Activity]) -> f64 {
    activities.iter().map(|a| a.weight).sum()
}
