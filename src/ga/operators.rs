//! Configurable genetic operators for selection chromosomes.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`].
//!
//! # Usage
//!
//! ```
//! use u_interval::ga::operators::{GeneticOperators, CrossoverType, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::SinglePoint);
//! assert_eq!(ops.mutation_type, MutationType::BitFlip);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::{
    bit_flip_mutation, per_gene_mutation, single_point_crossover, uniform_crossover,
    SelectionChromosome,
};

/// Crossover strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossoverType {
    /// One cut point, tails exchanged.
    #[default]
    SinglePoint,
    /// Every position exchanged with probability 1/2.
    Uniform,
}

/// Mutation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationType {
    /// With probability `mutation_rate`, flip one random gene.
    #[default]
    BitFlip,
    /// Flip each gene independently with probability `mutation_rate`.
    PerGene,
}

/// Runtime-selectable genetic operators.
///
/// # Example
///
/// ```
/// use u_interval::ga::operators::{GeneticOperators, CrossoverType, MutationType};
///
/// let ops = GeneticOperators {
///     crossover_type: CrossoverType::Uniform,
///     mutation_type: MutationType::PerGene,
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneticOperators {
    /// Crossover strategy.
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    pub mutation_type: MutationType,
}

impl GeneticOperators {
    pub fn new(crossover_type: CrossoverType, mutation_type: MutationType) -> Self {
        Self {
            crossover_type,
            mutation_type,
        }
    }

    /// Performs crossover using the configured strategy.
    pub fn crossover<R: Rng>(
        &self,
        p1: &SelectionChromosome,
        p2: &SelectionChromosome,
        rng: &mut R,
    ) -> (SelectionChromosome, SelectionChromosome) {
        match self.crossover_type {
            CrossoverType::SinglePoint => single_point_crossover(p1, p2, rng),
            CrossoverType::Uniform => uniform_crossover(p1, p2, rng),
        }
    }

    /// Performs mutation using the configured strategy.
    ///
    /// Returns whether the genes changed; the caller re-evaluates if so.
    pub fn mutate<R: Rng>(
        &self,
        chromosome: &mut SelectionChromosome,
        rate: f64,
        rng: &mut R,
    ) -> bool {
        match self.mutation_type {
            MutationType::BitFlip => rng.random_bool(rate) && bit_flip_mutation(chromosome, rng),
            MutationType::PerGene => per_gene_mutation(chromosome, rate, rng),
        }
    }
}
