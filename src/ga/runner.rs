//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat,
//! for a fixed number of generations.

use log::{debug, info};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::GaConfig;
use super::selection::select_breeding_stock;
use super::types::{GaProblem, GenerationStats};
use crate::error::ConfigError;
use crate::random::create_rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Independent copy of the best individual found during the run.
    ///
    /// `None` only when no generation was executed.
    pub best: Option<I>,

    /// Fitness of `best`; negative infinity when `best` is `None`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness so far, recorded once per generation.
    ///
    /// Index `g` holds the best fitness seen up to and including
    /// generation `g + 1`, so the series never decreases.
    pub fitness_history: Vec<f64>,

    /// The population produced by the last generation's reproduction
    /// (the initial population when no generation ran). Never evaluated.
    pub population: Vec<I>,

    /// Seed the run's generator was created from.
    pub seed: u64,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Configuration and problem data are validated before the first random
    /// draw; once the loop starts it always runs to completion.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;
        problem.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        info!(
            "GA start: population={}, generations={}, mutation_rate={}, policy={:?}, seed={}",
            config.population_size,
            config.max_generations,
            config.mutation_rate,
            config.population_policy,
            seed
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        let mut best: Option<P::Individual> = None;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut fitness_history = Vec::with_capacity(config.max_generations);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            // Evaluate
            let scores = evaluate_population(problem, &population, config.parallel);

            // Track best (strict improvement only)
            let (best_idx, generation_best) = find_best(&scores);
            if generation_best > best_fitness {
                best_fitness = generation_best;
                best = Some(population[best_idx].clone());
            }
            fitness_history.push(best_fitness);

            let stats = GenerationStats {
                generation: gen + 1,
                best_fitness,
                generation_best,
                mean_fitness: scores.iter().sum::<f64>() / scores.len() as f64,
                population_size: population.len(),
            };
            debug!(
                "Generation {} - Best Fitness: {} (generation best {}, mean {:.4}, size {})",
                stats.generation,
                stats.best_fitness,
                stats.generation_best,
                stats.mean_fitness,
                stats.population_size
            );
            problem.on_generation(&stats);

            // Select
            let stock_size = config.stock_size(population.len());
            let stock = select_breeding_stock(&population, &scores, stock_size);

            // Reproduce
            let offspring_count = config
                .population_policy
                .offspring_count(config.population_size, stock.len());
            population = reproduce(
                problem,
                &stock,
                offspring_count,
                config.mutation_rate,
                &mut rng,
            );
        }

        info!(
            "GA finished after {} generations: best fitness {}",
            config.max_generations, best_fitness
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.max_generations,
            fitness_history,
            population,
            seed,
        })
    }
}

/// Score every individual, preserving population order.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population
                .par_iter()
                .map(|ind| problem.evaluate(ind))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|ind| problem.evaluate(ind)).collect()
}

/// Index and value of the highest score; the first one wins ties.
fn find_best(scores: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, &score) in scores.iter().enumerate() {
        if score > best.1 {
            best = (i, score);
        }
    }
    best
}

/// Pair the stock consecutively, cross each pair into two children and
/// mutate every child, repeating passes over the stock until `count`
/// children exist.
fn reproduce<P: GaProblem, R: Rng>(
    problem: &P,
    stock: &[P::Individual],
    count: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<P::Individual> {
    assert!(
        stock.len() >= 2 && stock.len() % 2 == 0,
        "breeding stock must hold complete pairs"
    );

    let mut children = Vec::with_capacity(count);
    'passes: loop {
        for pair in stock.chunks_exact(2) {
            if children.len() >= count {
                break 'passes;
            }
            let (c1, c2) = problem.crossover(&pair[0], &pair[1], rng);
            children.push(c1);
            children.push(c2);
        }
        if children.len() >= count {
            break;
        }
    }
    children.truncate(count);

    children
        .iter()
        .map(|child| problem.mutate(child, mutation_rate, rng))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
