//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// How the next population is sized after reproduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopulationPolicy {
    /// Offspring count equals the breeding stock size.
    ///
    /// The first generation halves the population. Selection is capped at
    /// `population_size / 2`, so from then on the whole population is the
    /// breeding stock and the size stays at half.
    Shrink,

    /// The breeding stock is paired again (fresh crossover points and
    /// mutations) until the next population has `population_size` members.
    #[default]
    Refill,
}

impl PopulationPolicy {
    /// Size of the population reproduced from a breeding stock.
    pub fn offspring_count(self, population_size: usize, stock_size: usize) -> usize {
        match self {
            PopulationPolicy::Shrink => stock_size,
            PopulationPolicy::Refill => population_size,
        }
    }
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::{GaConfig, PopulationPolicy};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_population_policy(PopulationPolicy::Shrink)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the initial population.
    ///
    /// Must be a positive multiple of 4 so the breeding stock (half the
    /// population) pairs exactly.
    pub population_size: usize,

    /// Number of generations to run. There is no early stopping.
    pub max_generations: usize,

    /// Per-task probability of mutating one field of an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Sizing of the next population.
    pub population_policy: PopulationPolicy,

    /// Whether to evaluate individuals in parallel.
    ///
    /// Only effective with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            max_generations: 100,
            mutation_rate: 0.01,
            population_policy: PopulationPolicy::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the population sizing policy.
    pub fn with_population_policy(mut self, policy: PopulationPolicy) -> Self {
        self.population_policy = policy;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Breeding stock size for a population of `population_len` members.
    pub fn stock_size(&self, population_len: usize) -> usize {
        (self.population_size / 2).min(population_len)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        if self.population_size % 4 != 0 {
            return Err(ConfigError::UnpairedBreedingStock(self.population_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 500);
        assert_eq!(config.max_generations, 100);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert_eq!(config.population_policy, PopulationPolicy::Refill);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(12)
            .with_mutation_rate(0.2)
            .with_population_policy(PopulationPolicy::Shrink)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.max_generations, 12);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert_eq!(config.population_policy, PopulationPolicy::Shrink);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(GaConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate, 0.0);
    }

    #[test]
    fn test_zero_generations_is_valid() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_odd_population() {
        let config = GaConfig::default().with_population_size(7);
        assert_eq!(config.validate(), Err(ConfigError::OddPopulation(7)));
    }

    #[test]
    fn test_validate_odd_breeding_stock() {
        let config = GaConfig::default().with_population_size(6);
        assert_eq!(config.validate(), Err(ConfigError::UnpairedBreedingStock(6)));
    }

    #[test]
    fn test_stock_size_caps_at_population() {
        let config = GaConfig::default().with_population_size(8);
        assert_eq!(config.stock_size(8), 4);
        assert_eq!(config.stock_size(4), 4);
        assert_eq!(config.stock_size(2), 2);
    }

    #[test]
    fn test_offspring_count() {
        assert_eq!(PopulationPolicy::Shrink.offspring_count(8, 4), 4);
        assert_eq!(PopulationPolicy::Refill.offspring_count(8, 4), 8);
    }

    #[test]
    fn test_error_messages() {
        let msg = ConfigError::UnpairedBreedingStock(10).to_string();
        assert!(msg.contains("divisible by 4"), "{msg}");
        assert!(msg.contains("10"), "{msg}");
    }
}
