//! Error types.
//!
//! Empty input, infeasible mandatory sets, and GA runs that never see a
//! feasible individual are not errors: they produce (possibly empty)
//! schedules. Errors are reserved for malformed input and configuration,
//! and for a serialized timeline that runs past `i64::MAX`.

use crate::models::ActivityId;
use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors surfaced by solvers and the dispatcher.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// One or more activities violate the model invariants.
    #[error("invalid activity input: {}", summarize(.0))]
    InvalidActivity(Vec<ValidationError>),

    /// The dispatcher token does not name a solver.
    #[error("unknown algorithm: '{0}' (expected graph-coloring, dynamic-prog, backtracking or genetic)")]
    UnknownAlgorithm(String),

    /// A solver configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Graph-coloring serialization could not place this activity within `i64`.
    #[error("timeline overflow while placing activity {0}")]
    TimelineOverflow(ActivityId),
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (+{} more)", first.message, rest.len()),
    }
}
