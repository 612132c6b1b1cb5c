//! Truncation selection.
//!
//! The population is ranked by fitness and the top `count` individuals
//! become the breeding stock; the rest are discarded. Ranking is a stable
//! ascending sort, so the stock comes out in non-decreasing fitness order
//! and equal scores keep their population order.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"

/// Indices of the `count` highest-scoring entries of `fitness`, ordered by
/// ascending fitness.
///
/// `count` larger than `fitness.len()` returns every index.
pub fn breeding_indices(fitness: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));
    let skip = order.len().saturating_sub(count);
    order.split_off(skip)
}

/// Copies the `count` fittest individuals out of `population`.
///
/// # Panics
/// Panics if `population` and `fitness` differ in length.
pub fn select_breeding_stock<I: Clone>(population: &[I], fitness: &[f64], count: usize) -> Vec<I> {
    assert_eq!(
        population.len(),
        fitness.len(),
        "every individual needs exactly one fitness score"
    );
    breeding_indices(fitness, count)
        .into_iter()
        .map(|i| population[i].clone())
        .collect()
}
