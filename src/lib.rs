//! Course timetabling by genetic algorithm.
//!
//! Searches for a good assignment of course sections to (room, time slot,
//! instructor) triples. All preferences are soft: room-size fit,
//! instructor suitability, instructor load and paired-section timing are
//! fitness bonuses and penalties, never rejection rules, so the result is
//! near-optimal rather than guaranteed feasible.
//!
//! - [`catalog`]: static reference data (tasks, rooms, slots, instructors,
//!   enrollment and instructor preferences)
//! - [`ga`]: generic GA engine with truncation selection, single-point
//!   crossover and per-locus mutation
//! - [`timetable`]: schedule encoding and fitness, plugged into [`ga`]
//! - [`report`]: CSV trajectory and schedule listing
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::ga::{GaConfig, GaRunner};
//! use u_timetable::timetable::TimetableProblem;
//!
//! let problem = TimetableProblem::new(Catalog::standard());
//! let config = GaConfig::default()
//!     .with_population_size(40)
//!     .with_max_generations(10)
//!     .with_seed(7);
//! let result = GaRunner::run(&problem, &config).unwrap();
//!
//! let mut csv = Vec::new();
//! u_timetable::report::write_fitness_csv(&mut csv, &result.fitness_history).unwrap();
//! ```

pub mod catalog;
pub mod error;
pub mod ga;
pub mod random;
pub mod report;
pub mod timetable;

pub use error::ConfigError;
