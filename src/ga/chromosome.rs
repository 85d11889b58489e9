//! Bitstring chromosome for subset selection.
//!
//! # Encoding
//!
//! One gene per input activity, in input order: `true` = selected.
//! Fitness and feasibility are cached and must be refreshed through
//! [`SelectionProblem::evaluate`](super::SelectionProblem::evaluate) after
//! any change to the genes.

use rand::Rng;

use crate::models::Activity;

/// Subset-selection chromosome.
///
/// Higher fitness = better selection (maximization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChromosome {
    /// Selection flags, parallel to the activity list.
    pub genes: Vec<bool>,
    /// Cached fitness (`NEG_INFINITY` until evaluated).
    pub fitness: f64,
    /// Cached feasibility: the selected activities are conflict-free.
    pub feasible: bool,
}

impl SelectionChromosome {
    /// Wraps genes without evaluating them.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
            feasible: false,
        }
    }

    /// Each gene set with probability 1/2.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::from_genes((0..len).map(|_| rng.random_bool(0.5)).collect())
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Indices of selected genes.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }

    /// Selected activities in input order.
    pub fn selected<'a>(&'a self, activities: &'a [Activity]) -> impl Iterator<Item = &'a Activity> + 'a {
        self.selected_indices().map(move |i| &activities[i])
    }
}

/// Single-point crossover.
///
/// Cut point in `1..len`; children swap tails. Chromosomes shorter than
/// two genes are copied unchanged.
pub fn single_point_crossover<R: Rng>(
    p1: &SelectionChromosome,
    p2: &SelectionChromosome,
    rng: &mut R,
) -> (SelectionChromosome, SelectionChromosome) {
    let len = p1.len().min(p2.len());
    if len < 2 {
        return (p1.clone(), p2.clone());
    }
    let cut = rng.random_range(1..len);

    let mut g1 = p1.genes[..cut].to_vec();
    g1.extend_from_slice(&p2.genes[cut..]);
    let mut g2 = p2.genes[..cut].to_vec();
    g2.extend_from_slice(&p1.genes[cut..]);

    (
        SelectionChromosome::from_genes(g1),
        SelectionChromosome::from_genes(g2),
    )
}

/// Uniform crossover: each gene position swapped with probability 1/2.
pub fn uniform_crossover<R: Rng>(
    p1: &SelectionChromosome,
    p2: &SelectionChromosome,
    rng: &mut R,
) -> (SelectionChromosome, SelectionChromosome) {
    let (g1, g2): (Vec<bool>, Vec<bool>) = p1
        .genes
        .iter()
        .zip(&p2.genes)
        .map(|(&a, &b)| if rng.random_bool(0.5) { (b, a) } else { (a, b) })
        .unzip();
    (
        SelectionChromosome::from_genes(g1),
        SelectionChromosome::from_genes(g2),
    )
}

/// Flips one random gene. Returns `false` for an empty chromosome.
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut SelectionChromosome, rng: &mut R) -> bool {
    if chromosome.is_empty() {
        return false;
    }
    let i = rng.random_range(0..chromosome.len());
    chromosome.genes[i] = !chromosome.genes[i];
    true
}

/// Flips each gene independently with probability `rate`.
/// Returns whether any gene changed.
pub fn per_gene_mutation<R: Rng>(
    chromosome: &mut SelectionChromosome,
    rate: f64,
    rng: &mut R,
) -> bool {
    let mut changed = false;
    for gene in &mut chromosome.genes {
        if rng.random_bool(rate) {
            *gene = !*gene;
            changed = true;
        }
    }
    changed
}
