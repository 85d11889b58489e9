//! GA-based subset selection.
//!
//! Evolves bitstring chromosomes (one gene per activity) toward the
//! heaviest conflict-free subset. Conflicts are penalized rather than
//! repaired, so intermediate generations may contain infeasible
//! individuals; only feasible ones are ever returned.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

mod chromosome;
mod config;
pub mod operators;
mod problem;
mod runner;

pub use chromosome::{
    bit_flip_mutation, per_gene_mutation, single_point_crossover, uniform_crossover,
    SelectionChromosome,
};
pub use config::{ElitismPolicy, GaConfig};
pub use operators::{CrossoverType, MutationType};
pub use problem::SelectionProblem;
pub use runner::{GaOutcome, GeneticScheduler};
