//! Input validation for interval selection.
//!
//! Checks the activity invariants before any solver runs. Detects:
//! - Duplicate IDs
//! - Empty or inverted intervals (`end <= start`)
//! - Intervals whose length does not fit in an `i64`
//! - Negative or non-finite weights
//!
//! All problems are collected; validation does not stop at the first one.

use std::collections::HashSet;
use std::fmt;

use crate::models::Activity;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two activities share the same ID.
    DuplicateId,
    /// `end <= start`, or `end - start` overflows.
    InvalidInterval,
    /// Weight is negative, NaN, or infinite.
    InvalidWeight,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a list of activities.
///
/// Checks:
/// 1. No duplicate activity IDs
/// 2. Every interval satisfies `end > start` and `end - start` fits in an `i64`
/// 3. Every weight is finite and `>= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_activities(activities: &[Activity]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for act in activities {
        if !ids.insert(act.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity ID: {}", act.id),
            ));
        }

        if act.end <= act.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Activity {}: end {} <= start {}",
                    act.id, act.end, act.start
                ),
            ));
        } else if act.end.checked_sub(act.start).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Activity {}: duration {}..{} overflows i64",
                    act.id, act.start, act.end
                ),
            ));
        }

        if !act.weight.is_finite() || act.weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("Activity {}: weight {} is not a finite value >= 0", act.id, act.weight),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_activities() -> Vec<Activity> {
        vec![
            Activity::new(1, 0, 90).with_weight(3.0),
            Activity::new(2, 50, 140),
            Activity::new(3, 100, 190).with_weight(0.0),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_activities(&sample_activities()).is_ok());
        assert!(validate_activities(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let acts = vec![Activity::new(1, 0, 10), Activity::new(1, 20, 30)];
        let errors = validate_activities(&acts).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_length_interval() {
        let acts = vec![Activity::new(1, 10, 10)];
        let errors = validate_activities(&acts).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInterval);
    }

    #[test]
    fn test_inverted_interval() {
        let acts = vec![Activity::new(1, 10, 5)];
        let errors = validate_activities(&acts).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInterval);
    }

    #[test]
    fn test_overflowing_duration() {
        let acts = vec![Activity::new(1, i64::MIN + 1, i64::MAX)];
        let errors = validate_activities(&acts).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInterval);

        // Widest interval whose length still fits.
        assert!(validate_activities(&[Activity::new(1, -1, i64::MAX)]).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let acts = vec![Activity::new(1, 0, 5).with_weight(-1.0)];
        let errors = validate_activities(&acts).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidWeight);
    }

    #[test]
    fn test_nan_weight() {
        let acts = vec![Activity::new(1, 0, 5).with_weight(f64::NAN)];
        let errors = validate_activities(&acts).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidWeight);
    }

    #[test]
    fn test_multiple_errors() {
        let acts = vec![
            Activity::new(1, 5, 0),
            Activity::new(1, 0, 5).with_weight(-2.0),
        ];
        let errors = validate_activities(&acts).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
