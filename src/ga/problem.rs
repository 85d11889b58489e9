//! Selection GA problem definition.
//!
//! Bridges the activity list to the bitstring encoding: creates random
//! individuals, evaluates penalized fitness, and decodes a chromosome back
//! into activities.

use rand::Rng;

use super::chromosome::SelectionChromosome;
use crate::models::{overlaps, Activity};

/// Fitness evaluation for conflict-free subset selection.
///
/// - feasible: total selected weight
/// - infeasible: total selected weight − `conflict_penalty` × pairwise conflicts
///
/// # Example
/// ```
/// use u_interval::ga::{SelectionChromosome, SelectionProblem};
/// use u_interval::models::Activity;
///
/// let activities = vec![
///     Activity::new(1, 0, 90).with_weight(3.0),
///     Activity::new(2, 50, 140).with_weight(1.0),
/// ];
/// let problem = SelectionProblem::new(&activities, 10.0);
///
/// let mut both = SelectionChromosome::from_genes(vec![true, true]);
/// problem.evaluate(&mut both);
/// assert!(!both.feasible);
/// assert_eq!(both.fitness, 4.0 - 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionProblem<'a> {
    activities: &'a [Activity],
    conflict_penalty: f64,
}

impl<'a> SelectionProblem<'a> {
    pub fn new(activities: &'a [Activity], conflict_penalty: f64) -> Self {
        Self {
            activities,
            conflict_penalty,
        }
    }

    /// Activities the genes refer to.
    pub fn activities(&self) -> &'a [Activity] {
        self.activities
    }

    /// Random, evaluated individual.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> SelectionChromosome {
        let mut individual = SelectionChromosome::random(self.activities.len(), rng);
        self.evaluate(&mut individual);
        individual
    }

    /// Refreshes the cached fitness and feasibility.
    pub fn evaluate(&self, individual: &mut SelectionChromosome) {
        let selected: Vec<&Activity> = individual.selected(self.activities).collect();
        let weight: f64 = selected.iter().map(|a| a.weight).sum();

        let mut conflicts = 0usize;
        for (i, a) in selected.iter().enumerate() {
            conflicts += selected[i + 1..].iter().filter(|b| overlaps(a, b)).count();
        }

        individual.feasible = conflicts == 0;
        individual.fitness = weight - self.conflict_penalty * conflicts as f64;
    }

    /// Selected activities, chronological.
    pub fn decode(&self, individual: &SelectionChromosome) -> Vec<Activity> {
        let mut selected: Vec<Activity> = individual.selected(self.activities).cloned().collect();
        selected.sort_by_key(|a| (a.start, a.end));
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn worked_example() -> Vec<Activity> {
        vec![
            Activity::new(1, 0, 90).with_weight(3.0),
            Activity::new(2, 50, 140).with_weight(1.0),
            Activity::new(3, 100, 190).with_weight(3.0),
        ]
    }

    #[test]
    fn test_feasible_fitness_is_weight() {
        let acts = worked_example();
        let problem = SelectionProblem::new(&acts, 10.0);
        let mut ch = SelectionChromosome::from_genes(vec![true, false, true]);
        problem.evaluate(&mut ch);
        assert!(ch.feasible);
        assert!((ch.fitness - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_penalty_per_conflict() {
        let acts = worked_example();
        let problem = SelectionProblem::new(&acts, 10.0);
        let mut ch = SelectionChromosome::from_genes(vec![true, true, true]);
        problem.evaluate(&mut ch);
        // Conflicts: (1,2), (2,3).
        assert!(!ch.feasible);
        assert!((ch.fitness - (7.0 - 20.0)).abs() < 1e-10);
    }

    #[test]
    fn test_empty_selection_feasible() {
        let acts = worked_example();
        let problem = SelectionProblem::new(&acts, 10.0);
        let mut ch = SelectionChromosome::from_genes(vec![false; 3]);
        problem.evaluate(&mut ch);
        assert!(ch.feasible);
        assert_eq!(ch.fitness, 0.0);
    }

    #[test]
    fn test_decode_chronological() {
        let acts = vec![
            Activity::new(1, 100, 110),
            Activity::new(2, 0, 10),
        ];
        let problem = SelectionProblem::new(&acts, 10.0);
        let ch = SelectionChromosome::from_genes(vec![true, true]);
        let ids: Vec<u32> = problem.decode(&ch).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_create_individual_is_evaluated() {
        let acts = worked_example();
        let problem = SelectionProblem::new(&acts, 10.0);
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = problem.create_individual(&mut rng);
        assert_eq!(ch.len(), 3);
        assert!(ch.fitness.is_finite());
    }
}
