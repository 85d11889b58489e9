//! Generational GA loop with greedy fallback.
//!
//! # Algorithm
//!
//! Per generation:
//! 1. Record the best feasible individual seen so far.
//! 2. Copy the top `elite_size` individuals (ranked per [`ElitismPolicy`]).
//! 3. Fill the rest with offspring: two tournament winners, recombined with
//!    probability `crossover_rate`, each child mutated per the configured
//!    operator, then re-evaluated.
//!
//! After the last generation the final population is scanned as well.
//! If no feasible individual was ever seen, or the best one weighs less than
//! the weight-density greedy selection, the greedy selection is returned.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::chromosome::SelectionChromosome;
use super::config::{ElitismPolicy, GaConfig};
use super::operators::GeneticOperators;
use super::problem::SelectionProblem;
use crate::error::Result;
use crate::models::{total_weight, Activity, Algorithm, Schedule};
use crate::scheduler::GreedyScheduler;

/// Result of one GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaOutcome {
    /// Selected activities.
    pub schedule: Schedule,
    /// The greedy selection was returned instead of an evolved one.
    pub used_fallback: bool,
    /// Fitness of the best feasible individual, if any was found.
    pub best_fitness: Option<f64>,
    /// Generations actually run.
    pub generations: usize,
}

/// Genetic subset-selection solver.
///
/// # Example
/// ```
/// use u_interval::ga::{GaConfig, GeneticScheduler};
/// use u_interval::models::Activity;
///
/// let activities = vec![
///     Activity::new(1, 0, 90).with_weight(3.0),
///     Activity::new(2, 50, 140).with_weight(1.0),
///     Activity::new(3, 100, 190).with_weight(3.0),
/// ];
/// let ga = GeneticScheduler::new(GaConfig::default().with_seed(42)).unwrap();
/// let outcome = ga.evolve(&activities);
///
/// assert!(outcome.schedule.is_conflict_free());
/// assert_eq!(outcome.schedule.total_weight(), 6.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticScheduler {
    config: GaConfig,
}

impl GeneticScheduler {
    /// Creates a solver after validating `config`.
    pub fn new(config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA with an RNG seeded from the config (or OS entropy).
    pub fn evolve(&self, activities: &[Activity]) -> GaOutcome {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.evolve_with_rng(activities, &mut rng)
    }

    /// Runs the GA with a caller-supplied RNG.
    pub fn evolve_with_rng<R: Rng>(&self, activities: &[Activity], rng: &mut R) -> GaOutcome {
        if activities.is_empty() {
            return GaOutcome {
                schedule: Schedule::empty(Algorithm::Genetic),
                used_fallback: false,
                best_fitness: None,
                generations: 0,
            };
        }

        let config = &self.config;
        let problem = SelectionProblem::new(activities, config.conflict_penalty);
        let operators = GeneticOperators::new(config.crossover, config.mutation);
        let deadline = config.time_limit.map(|limit| Instant::now() + limit);

        let mut population: Vec<SelectionChromosome> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        let mut best: Option<SelectionChromosome> = None;
        let mut generations = 0;
        let mut complete = true;

        for generation in 0..config.generations {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                complete = false;
                break;
            }

            track_best(&population, &mut best);
            rank(&mut population, config.elitism);

            let mut next: Vec<SelectionChromosome> = population
                .iter()
                .take(config.elite_size)
                .cloned()
                .collect();

            while next.len() < config.population_size {
                let (Some(p1), Some(p2)) = (
                    tournament(&population, config.tournament_size, rng),
                    tournament(&population, config.tournament_size, rng),
                ) else {
                    break;
                };

                let (mut c1, mut c2) = if rng.random_bool(config.crossover_rate) {
                    let (mut c1, mut c2) = operators.crossover(p1, p2, rng);
                    problem.evaluate(&mut c1);
                    problem.evaluate(&mut c2);
                    (c1, c2)
                } else {
                    (p1.clone(), p2.clone())
                };

                for child in [&mut c1, &mut c2] {
                    if operators.mutate(child, config.mutation_rate, rng) {
                        problem.evaluate(child);
                    }
                }

                next.push(c1);
                next.push(c2);
            }

            next.truncate(config.population_size);
            population = next;
            generations += 1;

            trace!(
                generation,
                best = best.as_ref().map(|b| b.fitness),
                "ga: generation complete"
            );
        }

        track_best(&population, &mut best);

        let greedy = GreedyScheduler::by_weight_density().select(activities);
        let greedy_weight = total_weight(&greedy);
        let best_fitness = best.as_ref().map(|b| b.fitness);

        let (selected, used_fallback) = match best {
            Some(b) if b.fitness >= greedy_weight => (problem.decode(&b), false),
            _ => (greedy, true),
        };

        debug!(
            n = activities.len(),
            generations,
            best_fitness,
            greedy_weight,
            used_fallback,
            "ga: evolution finished"
        );

        GaOutcome {
            schedule: Schedule::new(Algorithm::Genetic, selected).with_complete(complete),
            used_fallback,
            best_fitness,
            generations,
        }
    }

    /// Runs `runs` independent GAs and keeps the heaviest result.
    ///
    /// With a fixed seed `s`, run `k` uses seed `s + k`.
    pub fn evolve_multi_run(&self, activities: &[Activity], runs: usize) -> GaOutcome {
        let mut best: Option<GaOutcome> = None;

        for run in 0..runs.max(1) {
            let mut rng = match self.config.seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(run as u64)),
                None => SmallRng::from_os_rng(),
            };
            let outcome = self.evolve_with_rng(activities, &mut rng);
            let better = best
                .as_ref()
                .map_or(true, |b| outcome.schedule.total_weight() > b.schedule.total_weight());
            if better {
                best = Some(outcome);
            }
        }

        best.unwrap_or_else(|| GaOutcome {
            schedule: Schedule::empty(Algorithm::Genetic),
            used_fallback: false,
            best_fitness: None,
            generations: 0,
        })
    }
}

/// Updates `best` with the fittest feasible individual if it strictly improves.
fn track_best(population: &[SelectionChromosome], best: &mut Option<SelectionChromosome>) {
    let candidate = population
        .iter()
        .filter(|c| c.feasible)
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness));

    if let Some(c) = candidate {
        if best.as_ref().map_or(true, |b| c.fitness > b.fitness) {
            *best = Some(c.clone());
        }
    }
}

/// Sorts best-first under the given policy (stable).
fn rank(population: &mut [SelectionChromosome], policy: ElitismPolicy) {
    match policy {
        ElitismPolicy::RawFitness => {
            population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
        }
        ElitismPolicy::FeasibleFirst => {
            population.sort_by(|a, b| {
                b.feasible
                    .cmp(&a.feasible)
                    .then_with(|| b.fitness.total_cmp(&a.fitness))
            });
        }
    }
}

/// Samples `size` distinct individuals and returns the fittest.
fn tournament<'p, R: Rng>(
    population: &'p [SelectionChromosome],
    size: usize,
    rng: &mut R,
) -> Option<&'p SelectionChromosome> {
    population
        .choose_multiple(rng, size.min(population.len()))
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
}
