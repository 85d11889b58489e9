//! Algorithm dispatch.
//!
//! Every solver implements [`IntervalSolver`]; the [`Dispatcher`] validates
//! input, picks one solver by [`Algorithm`], and runs it.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backtracking::{BacktrackingConfig, BacktrackingScheduler};
use crate::coloring::{ColoringConfig, GraphColoringScheduler};
use crate::dp::IntervalDpScheduler;
use crate::error::{Result, ScheduleError};
use crate::ga::{GaConfig, GeneticScheduler};
use crate::models::{Activity, Algorithm, Schedule};
use crate::validation::validate_activities;

/// A conflict-free selection strategy.
pub trait IntervalSolver: Send + Sync + Debug {
    /// Solver name (the dispatcher token).
    fn name(&self) -> &'static str;

    /// Solves for `activities`.
    fn solve(&self, activities: &[Activity]) -> Result<Schedule>;
}

impl IntervalSolver for GraphColoringScheduler {
    fn name(&self) -> &'static str {
        Algorithm::GraphColoring.token()
    }

    fn solve(&self, activities: &[Activity]) -> Result<Schedule> {
        self.schedule(activities)
    }
}

impl IntervalSolver for IntervalDpScheduler {
    fn name(&self) -> &'static str {
        Algorithm::DynamicProgramming.token()
    }

    fn solve(&self, activities: &[Activity]) -> Result<Schedule> {
        Ok(self.schedule(activities))
    }
}

impl IntervalSolver for BacktrackingScheduler {
    fn name(&self) -> &'static str {
        Algorithm::Backtracking.token()
    }

    fn solve(&self, activities: &[Activity]) -> Result<Schedule> {
        self.config().validate()?;
        Ok(self.schedule(activities))
    }
}

impl IntervalSolver for GeneticScheduler {
    fn name(&self) -> &'static str {
        Algorithm::Genetic.token()
    }

    fn solve(&self, activities: &[Activity]) -> Result<Schedule> {
        Ok(self.evolve(activities).schedule)
    }
}

/// Per-solver settings used by the [`Dispatcher`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    pub coloring: ColoringConfig,
    pub backtracking: BacktrackingConfig,
    pub genetic: GaConfig,
}

impl DispatcherConfig {
    /// Validates every sub-configuration.
    pub fn validate(&self) -> Result<()> {
        self.backtracking.validate()?;
        self.genetic.validate()
    }
}

/// Validates input and runs one solver.
///
/// # Example
/// ```
/// use u_interval::scheduler::Dispatcher;
/// use u_interval::models::{Activity, Algorithm};
///
/// let activities = vec![
///     Activity::new(1, 0, 90).with_weight(3.0),
///     Activity::new(2, 50, 140).with_weight(1.0),
///     Activity::new(3, 100, 190).with_weight(3.0),
/// ];
/// let dispatcher = Dispatcher::default();
///
/// let schedule = dispatcher.solve(Algorithm::DynamicProgramming, &activities).unwrap();
/// assert_eq!(schedule.ids(), vec![1, 3]);
///
/// assert!(dispatcher.solve_token("tabu", &activities).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatcherConfig,
}

impl Dispatcher {
    /// Creates a dispatcher after validating `config`.
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Builds the solver for `algorithm`.
    pub fn solver(&self, algorithm: Algorithm) -> Result<Box<dyn IntervalSolver>> {
        let solver: Box<dyn IntervalSolver> = match algorithm {
            Algorithm::GraphColoring => {
                Box::new(GraphColoringScheduler::new(self.config.coloring.clone()))
            }
            Algorithm::DynamicProgramming => Box::new(IntervalDpScheduler::new()),
            Algorithm::Backtracking => {
                Box::new(BacktrackingScheduler::new(self.config.backtracking.clone()))
            }
            Algorithm::Genetic => Box::new(GeneticScheduler::new(self.config.genetic.clone())?),
        };
        Ok(solver)
    }

    /// Validates `activities` and solves with `algorithm`.
    pub fn solve(&self, algorithm: Algorithm, activities: &[Activity]) -> Result<Schedule> {
        validate_activities(activities).map_err(ScheduleError::InvalidActivity)?;

        let solver = self.solver(algorithm)?;
        let schedule = solver.solve(activities)?;

        info!(
            algorithm = solver.name(),
            input = activities.len(),
            selected = schedule.len(),
            weight = schedule.total_weight(),
            complete = schedule.complete,
            "dispatcher: solved"
        );
        Ok(schedule)
    }

    /// Parses `token` (e.g. `"dynamic-prog"`, `"ga"`) and solves.
    pub fn solve_token(&self, token: &str, activities: &[Activity]) -> Result<Schedule> {
        let algorithm: Algorithm = token.parse()?;
        self.solve(algorithm, activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn worked_example() -> Vec<Activity> {
        vec![
            Activity::new(1, 0, 90).with_weight(3.0),
            Activity::new(2, 50, 140).with_weight(1.0),
            Activity::new(3, 100, 190).with_weight(3.0),
        ]
    }

    fn seeded() -> Dispatcher {
        let config = DispatcherConfig {
            genetic: GaConfig::default().with_seed(42),
            ..DispatcherConfig::default()
        };
        Dispatcher::new(config).unwrap()
    }

    #[test]
    fn test_every_algorithm_conflict_free() {
        let dispatcher = seeded();
        let acts = worked_example();
        for algorithm in Algorithm::ALL {
            let schedule = dispatcher.solve(algorithm, &acts).unwrap();
            assert_eq!(schedule.algorithm, algorithm);
            assert!(schedule.is_conflict_free(), "{algorithm} produced a conflict");
        }
    }

    #[test]
    fn test_exact_solvers_agree() {
        let dispatcher = seeded();
        let acts = worked_example();
        let dp = dispatcher.solve(Algorithm::DynamicProgramming, &acts).unwrap();
        let bt = dispatcher.solve(Algorithm::Backtracking, &acts).unwrap();
        assert_eq!(dp.ids(), bt.ids());
    }

    #[test]
    fn test_coloring_keeps_everything() {
        let schedule = seeded().solve(Algorithm::GraphColoring, &worked_example()).unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.color_count, Some(2));
    }

    #[test]
    fn test_solve_token() {
        let dispatcher = seeded();
        let acts = worked_example();
        assert_eq!(dispatcher.solve_token("dp", &acts).unwrap().ids(), vec![1, 3]);
        assert_eq!(
            dispatcher.solve_token("genetic", &acts).unwrap().algorithm,
            Algorithm::Genetic
        );
        assert_eq!(
            dispatcher.solve_token("simulated-annealing", &acts),
            Err(ScheduleError::UnknownAlgorithm("simulated-annealing".into()))
        );
    }

    #[test]
    fn test_invalid_activity_rejected() {
        let acts = vec![Activity::new(1, 10, 10)];
        match seeded().solve(Algorithm::DynamicProgramming, &acts) {
            Err(ScheduleError::InvalidActivity(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInterval);
            }
            other => panic!("expected InvalidActivity, got {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_duration_rejected() {
        let acts = vec![Activity::new(1, i64::MIN + 1, i64::MAX)];
        for algorithm in [Algorithm::GraphColoring, Algorithm::Genetic] {
            match seeded().solve(algorithm, &acts) {
                Err(ScheduleError::InvalidActivity(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInterval);
                }
                other => panic!("expected InvalidActivity, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_coloring_timeline_overflow() {
        let acts = vec![
            Activity::new(1, 0, i64::MAX),
            Activity::new(2, 1, i64::MAX),
        ];
        assert_eq!(
            seeded().solve(Algorithm::GraphColoring, &acts),
            Err(ScheduleError::TimelineOverflow(1))
        );
        // The other solvers never move activities.
        let schedule = seeded().solve(Algorithm::Genetic, &acts).unwrap();
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DispatcherConfig {
            genetic: GaConfig::default().with_generations(0),
            ..DispatcherConfig::default()
        };
        assert!(matches!(
            Dispatcher::new(config),
            Err(ScheduleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_input_all_algorithms() {
        let dispatcher = seeded();
        for algorithm in Algorithm::ALL {
            assert!(dispatcher.solve(algorithm, &[]).unwrap().is_empty());
        }
    }

    #[test]
    fn test_solver_names() {
        let dispatcher = seeded();
        for algorithm in Algorithm::ALL {
            assert_eq!(dispatcher.solver(algorithm).unwrap().name(), algorithm.token());
        }
    }

    #[test]
    fn test_config_json() {
        let json = r#"{"genetic": {"population_size": 12, "seed": 5}, "backtracking": {"node_limit": 1000}}"#;
        let config: DispatcherConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.genetic.population_size, 12);
        assert_eq!(config.genetic.seed, Some(5));
        assert_eq!(config.backtracking.node_limit, Some(1000));
        assert!(Dispatcher::new(config).is_ok());
    }
}
