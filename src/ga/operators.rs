//! Generic locus-vector genetic operators.
//!
//! These operate on fixed-length gene slices where position `i` always
//! means the same thing (one gene per locus), and are independent of what
//! a gene holds.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: cut at a random point, swap the tails
//!
//! # Mutation Operators
//!
//! - [`per_locus_mutation`]: independent Bernoulli trial per locus
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut point `p` uniformly from `[1, n]`. Loci before `p` come from
/// the child's own parent, loci from `p` on come from the other parent.
/// `p == n` reproduces both parents unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = rng.random_range(1..=n);
    crossover_at(parent1, parent2, point)
}

/// Single-point crossover at a fixed cut `point`.
///
/// `point` is clamped to the parent length.
pub fn crossover_at<T: Clone>(parent1: &[T], parent2: &[T], point: usize) -> (Vec<T>, Vec<T>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    let point = point.min(parent1.len());

    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Per-locus mutation.
///
/// Each locus independently mutates with probability `rate`; `resample`
/// rewrites the selected gene. Returns the number of mutated loci.
///
/// The trial is `u < rate` for `u` uniform in `[0, 1)`, so `rate == 0.0`
/// never mutates and `rate == 1.0` always does.
pub fn per_locus_mutation<T, R, F>(genes: &mut [T], rate: f64, rng: &mut R, mut resample: F) -> usize
where
    R: Rng,
    F: FnMut(&mut T, &mut R),
{
    let mut mutated = 0;
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            resample(gene, rng);
            mutated += 1;
        }
    }
    mutated
}
