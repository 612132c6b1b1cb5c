//! Genetic Algorithm engine.
//!
//! A generational GA built on a trait-based problem seam. Problems
//! implement [`GaProblem`], which specifies how to create, evaluate,
//! crossover, and mutate individuals; [`GaRunner`] drives the loop.
//!
//! Each generation evaluates the whole population, records the best
//! individual seen so far, keeps the fitter half as breeding stock
//! (truncation selection), pairs the stock consecutively for single-point
//! crossover and mutates every child. The run stops after a fixed number
//! of generations.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, mutation rate, seed)
//! - [`PopulationPolicy`]: Whether the population halves or is refilled
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual and the best-fitness trajectory
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and per-locus mutation
//! - [`selection`]: Truncation selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{GaConfig, PopulationPolicy};
pub use runner::{GaResult, GaRunner};
pub use types::{GaProblem, GenerationStats};
