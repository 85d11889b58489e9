//! Time window model.
//!
//! Windows restrict which activities the constrained backtracking search
//! may consider. An activity qualifies when it lies entirely inside at
//! least one window.

use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: i64,
    /// Interval end (exclusive).
    pub end: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of this window.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether the interval `[start, end)` lies entirely inside this window.
    #[inline]
    pub fn contains_interval(&self, start: i64, end: i64) -> bool {
        start >= self.start && end <= self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<(i64, i64)> for TimeWindow {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window() {
        let w = TimeWindow::new(100, 200);
        assert_eq!(w.duration(), 100);
        assert!(w.contains(100));
        assert!(w.contains(199));
        assert!(!w.contains(200)); // exclusive end
        assert!(!w.contains(50));
    }

    #[test]
    fn test_time_window_overlap() {
        let a = TimeWindow::new(0, 100);
        let b = TimeWindow::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(100, 200); // touching but not overlapping
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_contains_interval() {
        let w = TimeWindow::new(0, 100);
        assert!(w.contains_interval(0, 100));
        assert!(w.contains_interval(10, 90));
        assert!(!w.contains_interval(90, 110));
        assert!(!w.contains_interval(-5, 10));
    }

    #[test]
    fn test_from_tuple() {
        let w: TimeWindow = (5, 10).into();
        assert_eq!(w, TimeWindow::new(5, 10));
    }
}
