//! Course timetabling on top of the GA engine.
//!
//! - [`Schedule`] / [`Assignment`]: the individual, one (room, slot,
//!   instructor) triple per catalog task
//! - [`fitness`]: the soft-preference scoring function
//! - [`TimetableProblem`]: binds a [`Catalog`](crate::catalog::Catalog) to
//!   [`GaProblem`](crate::ga::GaProblem)

pub mod fitness;
mod problem;
mod schedule;

pub use fitness::evaluate;
pub use problem::TimetableProblem;
pub use schedule::{Assignment, Schedule};
