//! Error types.
//!
//! Only configuration can fail. Every check runs before the first random
//! draw, so a run that starts always completes.

use thiserror::Error;

/// An invalid run configuration or catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("population_size must be positive")]
    EmptyPopulation,

    #[error("population_size must be even so parents pair exactly, got {0}")]
    OddPopulation(usize),

    #[error("population_size must be divisible by 4 so the breeding stock pairs exactly, got {0}")]
    UnpairedBreedingStock(usize),

    #[error("catalog has no {0}")]
    EmptyCatalog(&'static str),
}
