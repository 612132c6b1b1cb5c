//! Timetable fitness.
//!
//! A schedule is scanned task by task in catalog order. Each task earns or
//! loses points for how well its room fits the expected enrollment, how
//! suitable its instructor is, and how loaded that instructor already is.
//! The pairing adjustment over the whole schedule is added once per
//! scanned task, so its weight grows with the task count.
//!
//! | Rule | Condition | Score |
//! |------|-----------|-------|
//! | Room fit | `exp <= cap <= 3*exp` | +0.3 |
//! | Room fit | `cap > 3*exp` | -0.2 |
//! | Instructor | preferred | +0.6 |
//! | Instructor | alternate | +0.3 |
//! | Instructor | other | -0.1 |
//! | Load | running count == 1 | +0.3 |
//! | Load | running count > 1 | -0.2 |
//! | Load | running count > 4 | -0.6 |
//! | Load | running count is 1 or 2 (non-exempt) | -0.5 |
//! | Pairing | split sections in different slots | +1.0 each |
//!
//! Load uses the count *so far in the scan*, so the first task an
//! instructor appears on is scored differently from the later ones.

use std::collections::HashMap;

use crate::catalog::{Catalog, TimeSlot};

use super::schedule::Schedule;

/// Instructor spared the light-load penalty.
///
/// No catalog instructor carries this exact name (the standard catalog has
/// "Tyler"), so the exemption never applies.
pub const LOAD_EXEMPT_INSTRUCTOR: &str = "Dr. Tyler";

/// Split sections that should meet in different slots.
pub const SPLIT_SECTIONS: [[&str; 2]; 2] = [["SLA100A", "SLA100B"], ["SLA191A", "SLA191B"]];

/// Rooms that excuse the far-apart penalty of the SLA101 rule.
const NEARBY_ROOMS: [&str; 2] = ["Roman 201", "Beach 201"];

/// Score of a room with `capacity` seats for `expected` students.
///
/// Undersized rooms score 0.
pub fn room_fit(capacity: u32, expected: u32) -> f64 {
    let (cap, exp) = (u64::from(capacity), u64::from(expected));
    if exp <= cap && cap <= 3 * exp {
        0.3
    } else if cap > 3 * exp {
        -0.2
    } else if cap > 6 * exp {
        // Unreachable: anything above 6x already took the 3x branch.
        -0.4
    } else {
        0.0
    }
}

/// Score of `instructor` teaching `task`.
pub fn instructor_suitability(catalog: &Catalog, task: &str, instructor: &str) -> f64 {
    if catalog.is_preferred(task, instructor) {
        0.6
    } else if catalog.is_alternate(task, instructor) {
        0.3
    } else {
        -0.1
    }
}

/// Score for an instructor reaching `running_count` tasks in the scan.
pub fn instructor_load(running_count: u32, instructor: &str) -> f64 {
    let mut score = 0.0;
    if running_count == 1 {
        score += 0.3;
    } else if running_count > 1 {
        score -= 0.2;
    }
    if running_count > 4 {
        score -= 0.6;
    }
    if matches!(running_count, 1 | 2) && instructor != LOAD_EXEMPT_INSTRUCTOR {
        score -= 0.5;
    }
    score
}

/// Pairing and timing adjustment over the whole schedule.
///
/// Every task of a [`SPLIT_SECTIONS`] pair earns +1.0 when the pair sits in
/// different slots, so a well-split pair contributes +2.0. A pair with a
/// section missing from the catalog never counts as split.
///
/// Tasks named exactly `SLA101` or `SLA191` trigger slot-distance rules
/// against `SLA101A`, `SLA101B` and `SLA191A`. The standard catalog has
/// none of those names, so these rules are inert there. A task missing from
/// the schedule has slot rank 0 and no room.
pub fn pairing_adjustment(catalog: &Catalog, schedule: &Schedule) -> f64 {
    let slot_of =
        |name: &str| -> Option<TimeSlot> { schedule.get_by_name(catalog, name).map(|a| a.slot) };
    let rank_of = |name: &str| -> i64 { slot_of(name).map_or(0, |s| i64::from(s.rank())) };

    let mut adjustment = 0.0;
    for task in &catalog.tasks {
        let task = task.as_str();

        for [first, second] in SPLIT_SECTIONS {
            let apart = matches!((slot_of(first), slot_of(second)), (Some(a), Some(b)) if a != b);
            if (task == first || task == second) && apart {
                adjustment += 1.0;
            }
        }

        // Inert with the standard catalog: no task is named SLA101.
        if task == "SLA101" {
            if (rank_of("SLA101A") - rank_of("SLA101B")).abs() > 4 {
                adjustment += 0.5;
            }
            if slot_of("SLA101A") == slot_of("SLA101B") {
                adjustment -= 0.5;
            }
            if (rank_of("SLA101A") - rank_of("SLA191A")).abs() > 4 {
                adjustment += 0.5;
                let room = room_of(catalog, schedule, "SLA101A");
                if !room.is_some_and(|r| NEARBY_ROOMS.contains(&r)) {
                    adjustment -= 0.4;
                }
            }
        }

        // Likewise inert: no task is named SLA191.
        if task == "SLA191" {
            if (rank_of("SLA101A") - rank_of("SLA191A")).abs() == 1 {
                adjustment += 0.25;
            }
            if slot_of("SLA101A") == slot_of("SLA191A") {
                adjustment -= 0.25;
            }
        }
    }
    adjustment
}

fn room_of<'a>(catalog: &'a Catalog, schedule: &Schedule, task: &str) -> Option<&'a str> {
    schedule
        .get_by_name(catalog, task)
        .and_then(|a| catalog.rooms.get(a.room))
        .map(|r| r.name.as_str())
}

/// Fitness of `schedule`. Higher is better; may be negative.
///
/// Deterministic: depends only on the catalog and the schedule. Room and
/// instructor indices outside the catalog are treated as a zero-capacity
/// room and an unnamed instructor.
pub fn evaluate(catalog: &Catalog, schedule: &Schedule) -> f64 {
    let mut fitness = 0.0;

    let mut instructor_count: HashMap<usize, u32> = HashMap::new();
    // Tallied but not scored.
    let mut room_count: HashMap<usize, u32> = HashMap::new();
    let mut slot_count: HashMap<TimeSlot, u32> = HashMap::new();

    for (task, assignment) in schedule.iter(catalog) {
        let capacity = catalog.rooms.get(assignment.room).map_or(0, |r| r.capacity);
        fitness += room_fit(capacity, catalog.expected_enrollment(task));

        let instructor = catalog
            .instructors
            .get(assignment.instructor)
            .map_or("", String::as_str);
        fitness += instructor_suitability(catalog, task, instructor);

        let count = instructor_count.entry(assignment.instructor).or_insert(0);
        *count += 1;
        fitness += instructor_load(*count, instructor);

        *room_count.entry(assignment.room).or_insert(0) += 1;
        *slot_count.entry(assignment.slot).or_insert(0) += 1;

        fitness += pairing_adjustment(catalog, schedule);
    }

    fitness
}
