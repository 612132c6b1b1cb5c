//! Core trait definitions for the GA engine.
//!
//! [`GaProblem`] is the contract between the generational loop in
//! [`GaRunner`](super::GaRunner) and a concrete encoding such as the
//! course timetable.

use rand::Rng;

use crate::error::ConfigError;

/// Summary of one completed generation, passed to
/// [`GaProblem::on_generation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Best fitness seen so far in the run.
    pub best_fitness: f64,
    /// Best fitness within this generation's population.
    pub generation_best: f64,
    /// Mean fitness of this generation's population.
    pub mean_fitness: f64,
    /// Number of individuals evaluated this generation.
    pub population_size: usize,
}

/// Defines a GA optimization problem.
///
/// Implementors supply:
///
/// 1. **Initialization**: how to create a random individual
/// 2. **Evaluation**: how to score one (higher is better, may be negative)
/// 3. **Crossover**: how to recombine two parents into two children
/// 4. **Mutation**: how to derive a perturbed copy of an individual
///
/// Individuals are values. Operators take parents by reference and return
/// fresh children, so no individual is ever aliased by another. Fitness is
/// never stored on an individual; the runner recomputes it each generation.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate the
/// population in parallel with rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Clone + Send + Sync;

    /// Checks problem data before a run starts.
    ///
    /// The default accepts everything.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual. Higher is better.
    ///
    /// Must depend only on `self` and `individual`; the runner may call it
    /// from several threads at once.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Recombines two parents into two children.
    ///
    /// The default returns copies of the parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (parent1.clone(), parent2.clone())
    }

    /// Returns a mutated copy of `individual`, leaving the input untouched.
    ///
    /// `mutation_rate` is the per-locus mutation probability. The default
    /// returns an unchanged copy.
    fn mutate<R: Rng>(
        &self,
        individual: &Self::Individual,
        _mutation_rate: f64,
        _rng: &mut R,
    ) -> Self::Individual {
        individual.clone()
    }

    /// Called at the end of each generation's evaluation.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
