//! GA configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::operators::{CrossoverType, MutationType};
use crate::error::{Result, ScheduleError};

/// How elite individuals are ranked before being carried over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElitismPolicy {
    /// Rank by penalized fitness only. An infeasible individual with a
    /// large raw weight can outrank a feasible one.
    #[default]
    RawFitness,
    /// Rank feasible individuals ahead of infeasible ones, then by fitness.
    FeasibleFirst,
}

/// Genetic solver parameters.
///
/// # Example
/// ```
/// use u_interval::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(40)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tournament_size, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation (> 0).
    pub population_size: usize,
    /// Generations to run (> 0).
    pub generations: usize,
    /// Probability that two parents are recombined.
    pub crossover_rate: f64,
    /// Probability that a child is mutated (per gene for
    /// [`MutationType::PerGene`]).
    pub mutation_rate: f64,
    /// Individuals copied unchanged into the next generation.
    pub elite_size: usize,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
    /// Fitness deducted per pairwise conflict.
    pub conflict_penalty: f64,
    /// Elite ranking.
    pub elitism: ElitismPolicy,
    /// Recombination operator.
    pub crossover: CrossoverType,
    /// Mutation operator.
    pub mutation: MutationType,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Wall-clock budget for the generation loop.
    pub time_limit: Option<Duration>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            elite_size: 5,
            tournament_size: 3,
            conflict_penalty: 10.0,
            elitism: ElitismPolicy::RawFitness,
            crossover: CrossoverType::SinglePoint,
            mutation: MutationType::BitFlip,
            seed: None,
            time_limit: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of individuals per generation.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the probability of recombining two parents.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets how many individuals survive unchanged.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Sets the tournament sample size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the fitness penalty per pairwise conflict.
    pub fn with_conflict_penalty(mut self, penalty: f64) -> Self {
        self.conflict_penalty = penalty;
        self
    }

    /// Sets how elites are ranked.
    pub fn with_elitism(mut self, policy: ElitismPolicy) -> Self {
        self.elitism = policy;
        self
    }

    /// Sets the recombination operator.
    pub fn with_crossover(mut self, crossover: CrossoverType) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: MutationType) -> Self {
        self.mutation = mutation;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the wall-clock time of the generation loop.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Checks every parameter range.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(ScheduleError::InvalidConfig(msg));

        if self.population_size == 0 {
            return fail("population_size must be > 0".into());
        }
        if self.generations == 0 {
            return fail("generations must be > 0".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return fail(format!("crossover_rate {} not in [0, 1]", self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return fail(format!("mutation_rate {} not in [0, 1]", self.mutation_rate));
        }
        if self.elite_size > self.population_size {
            return fail(format!(
                "elite_size {} exceeds population_size {}",
                self.elite_size, self.population_size
            ));
        }
        if self.tournament_size == 0 {
            return fail("tournament_size must be > 0".into());
        }
        if !self.conflict_penalty.is_finite() || self.conflict_penalty < 0.0 {
            return fail(format!(
                "conflict_penalty {} must be finite and >= 0",
                self.conflict_penalty
            ));
        }
        if self.time_limit == Some(Duration::ZERO) {
            return fail("time_limit must be > 0".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 50);
        assert_eq!(c.generations, 100);
        assert!((c.crossover_rate - 0.8).abs() < 1e-12);
        assert!((c.mutation_rate - 0.1).abs() < 1e-12);
        assert_eq!(c.elite_size, 5);
        assert_eq!(c.tournament_size, 3);
        assert!((c.conflict_penalty - 10.0).abs() < 1e-12);
        assert_eq!(c.elitism, ElitismPolicy::RawFitness);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
        assert!(GaConfig::default().with_generations(0).validate().is_err());
        assert!(GaConfig::default().with_crossover_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(f64::NAN).validate().is_err());
        assert!(GaConfig::default()
            .with_population_size(4)
            .with_elite_size(5)
            .validate()
            .is_err());
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        assert!(GaConfig::default().with_conflict_penalty(-1.0).validate().is_err());
        assert!(GaConfig::default()
            .with_time_limit(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_elite_equal_to_population_is_valid() {
        let c = GaConfig::default().with_population_size(5).with_elite_size(5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = GaConfig::default()
            .with_seed(7)
            .with_elitism(ElitismPolicy::FeasibleFirst);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("feasible-first"));
        let back: GaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: GaConfig = serde_json::from_str(r#"{"population_size": 10}"#).unwrap();
        assert_eq!(c.population_size, 10);
        assert_eq!(c.generations, 100);
    }
}
