//! Interval selection domain models.
//!
//! Provides the activity record, the shared conflict predicate, time
//! windows, and the schedule result type.
//!
//! # Domain Mappings
//!
//! | u-interval | Timetabling | Conference | Broadcast |
//! |------------|-------------|------------|-----------|
//! | Activity | Class session | Talk | Programme slot |
//! | weight | Credit hours | Expected audience | Ad revenue |
//! | Schedule | Room timetable | Track plan | Channel lineup |

mod activity;
mod schedule;
mod window;

pub use activity::{
    count_conflicts, is_conflict_free, overlaps, total_weight, Activity, ActivityId,
};
pub use schedule::{Algorithm, Schedule};
pub use window::TimeWindow;
