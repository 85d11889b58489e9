//! Selection constraints for the backtracking search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{is_conflict_free, Activity, ActivityId, TimeWindow};

/// Mandatory/forbidden IDs and optional time windows.
///
/// - `mandatory`: every listed ID must be in the result.
/// - `forbidden`: no listed ID may be in the result.
/// - `windows`: when set, only activities lying entirely inside at least
///   one window are candidates. An empty list admits nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// IDs that must be selected.
    pub mandatory: BTreeSet<ActivityId>,
    /// IDs that must not be selected.
    pub forbidden: BTreeSet<ActivityId>,
    /// Admissible time windows (`None` = unrestricted).
    pub windows: Option<Vec<TimeWindow>>,
}

/// Why a constraint set cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Infeasibility {
    /// A mandatory ID is also forbidden.
    MandatoryForbidden(ActivityId),
    /// A mandatory ID is absent or falls outside every window.
    MandatoryUnavailable(ActivityId),
    /// Two or more mandatory activities overlap.
    MandatoryConflict,
}

impl Constraints {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds mandatory IDs.
    pub fn with_mandatory(mut self, ids: impl IntoIterator<Item = ActivityId>) -> Self {
        self.mandatory.extend(ids);
        self
    }

    /// Adds forbidden IDs.
    pub fn with_forbidden(mut self, ids: impl IntoIterator<Item = ActivityId>) -> Self {
        self.forbidden.extend(ids);
        self
    }

    /// Restricts candidates to the given windows.
    pub fn with_windows(mut self, windows: impl IntoIterator<Item = TimeWindow>) -> Self {
        self.windows
            .get_or_insert_with(Vec::new)
            .extend(windows);
        self
    }

    /// Whether nothing is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.mandatory.is_empty() && self.forbidden.is_empty() && self.windows.is_none()
    }

    /// Whether `activity` survives the window and forbidden filters.
    pub fn admits(&self, activity: &Activity) -> bool {
        if self.forbidden.contains(&activity.id) {
            return false;
        }
        match &self.windows {
            Some(windows) => windows.iter().any(|w| activity.fits_within(w)),
            None => true,
        }
    }

    /// Candidate activities after filtering.
    pub fn candidates<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        activities.iter().filter(|a| self.admits(a)).collect()
    }

    /// Checks that the mandatory set can be selected on its own.
    pub fn check_mandatory(&self, candidates: &[&Activity]) -> Result<(), Infeasibility> {
        if let Some(&id) = self.mandatory.intersection(&self.forbidden).next() {
            return Err(Infeasibility::MandatoryForbidden(id));
        }

        let mut required = Vec::with_capacity(self.mandatory.len());
        for &id in &self.mandatory {
            match candidates.iter().find(|a| a.id == id) {
                Some(act) => required.push((*act).clone()),
                None => return Err(Infeasibility::MandatoryUnavailable(id)),
            }
        }

        if is_conflict_free(&required) {
            Ok(())
        } else {
            Err(Infeasibility::MandatoryConflict)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example() -> Vec<Activity> {
        vec![
            Activity::new(1, 0, 90).with_weight(3.0),
            Activity::new(2, 50, 140).with_weight(1.0),
            Activity::new(3, 100, 190).with_weight(3.0),
        ]
    }

    #[test]
    fn test_unconstrained() {
        let c = Constraints::new();
        assert!(c.is_unconstrained());
        assert_eq!(c.candidates(&worked_example()).len(), 3);
    }

    #[test]
    fn test_forbidden_filter() {
        let acts = worked_example();
        let c = Constraints::new().with_forbidden([2]);
        let ids: Vec<u32> = c.candidates(&acts).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_window_filter() {
        let acts = worked_example();
        let c = Constraints::new().with_windows([TimeWindow::new(0, 100)]);
        let ids: Vec<u32> = c.candidates(&acts).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_empty_window_list_admits_nothing() {
        let acts = worked_example();
        let c = Constraints::new().with_windows(Vec::new());
        assert!(c.candidates(&acts).is_empty());
    }

    #[test]
    fn test_mandatory_conflict() {
        let acts = worked_example();
        let c = Constraints::new().with_mandatory([1, 2]);
        let candidates = c.candidates(&acts);
        assert_eq!(
            c.check_mandatory(&candidates),
            Err(Infeasibility::MandatoryConflict)
        );
    }

    #[test]
    fn test_mandatory_single_ok() {
        let acts = worked_example();
        let c = Constraints::new().with_mandatory([2]);
        assert!(c.check_mandatory(&c.candidates(&acts)).is_ok());
    }

    #[test]
    fn test_mandatory_forbidden() {
        let acts = worked_example();
        let c = Constraints::new().with_mandatory([3]).with_forbidden([3]);
        assert_eq!(
            c.check_mandatory(&c.candidates(&acts)),
            Err(Infeasibility::MandatoryForbidden(3))
        );
    }

    #[test]
    fn test_mandatory_missing() {
        let acts = worked_example();
        let c = Constraints::new().with_mandatory([42]);
        assert_eq!(
            c.check_mandatory(&c.candidates(&acts)),
            Err(Infeasibility::MandatoryUnavailable(42))
        );
    }
}
