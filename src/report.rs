//! Run reports.
//!
//! Renders the outcome of a run for people and spreadsheets. Writers take
//! any [`Write`], so the same code serves files, stdout and tests.

use std::io::{self, Write};

use crate::catalog::Catalog;
use crate::timetable::Schedule;

/// Writes the best-fitness trajectory as CSV.
///
/// Header `Generation,Best Fitness Score`, then one row per generation with
/// 1-based generation numbers.
pub fn write_fitness_csv<W: Write>(mut w: W, trajectory: &[f64]) -> io::Result<()> {
    writeln!(w, "Generation,Best Fitness Score")?;
    for (gen, fitness) in trajectory.iter().enumerate() {
        writeln!(w, "{},{:?}", gen + 1, fitness)?;
    }
    w.flush()
}

/// Writes a human-readable listing of `schedule`, one task per line in
/// catalog order.
pub fn write_schedule<W: Write>(mut w: W, catalog: &Catalog, schedule: &Schedule) -> io::Result<()> {
    writeln!(w, "Best Schedule:")?;
    for (task, a) in schedule.iter(catalog) {
        let room = catalog.rooms.get(a.room).map_or("?", |r| r.name.as_str());
        let instructor = catalog
            .instructors
            .get(a.instructor)
            .map_or("?", String::as_str);
        writeln!(
            w,
            "{task} - Location: {room}, Hour: {}, Instructor: {instructor}",
            a.slot
        )?;
    }
    w.flush()
}
