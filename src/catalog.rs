//! Domain catalog: the fixed reference data a timetable is built from.
//!
//! A [`Catalog`] lists the course sections (tasks) to place, the rooms,
//! time slots and instructors they can be placed with, and the preference
//! tables the fitness function reads. It has no behavior beyond lookup.
//!
//! Lookups by task name never fail: an unknown task has zero expected
//! enrollment and empty preferred/alternate instructor sets.

use std::collections::HashMap;
use std::fmt;

use crate::error::ConfigError;

/// One of the six daily teaching slots, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeSlot {
    TenAm,
    ElevenAm,
    TwelvePm,
    OnePm,
    TwoPm,
    ThreePm,
}

impl TimeSlot {
    /// All slots in chronological order.
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::TwelvePm,
        TimeSlot::OnePm,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
    ];

    /// 1-based position of the slot in the day (10 AM = 1 … 3 PM = 6).
    ///
    /// Used for slot-distance comparisons between paired sections.
    pub fn rank(self) -> u32 {
        match self {
            TimeSlot::TenAm => 1,
            TimeSlot::ElevenAm => 2,
            TimeSlot::TwelvePm => 3,
            TimeSlot::OnePm => 4,
            TimeSlot::TwoPm => 5,
            TimeSlot::ThreePm => 6,
        }
    }

    /// Display label, e.g. `"10 AM"`.
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::TenAm => "10 AM",
            TimeSlot::ElevenAm => "11 AM",
            TimeSlot::TwelvePm => "12 PM",
            TimeSlot::OnePm => "1 PM",
            TimeSlot::TwoPm => "2 PM",
            TimeSlot::ThreePm => "3 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A teaching room and its seat count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name: String,
    pub capacity: u32,
}

impl Room {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// Static reference data for one timetabling problem.
///
/// The order of `tasks` is the canonical locus order: schedules store one
/// assignment per task at the task's index, and crossover cuts along it.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::{Catalog, Room, TimeSlot};
///
/// let catalog = Catalog::new(
///     vec!["CS101".into()],
///     vec![Room::new("Hall A", 40)],
///     TimeSlot::ALL.to_vec(),
///     vec!["Ada".into()],
/// )
/// .with_enrollment("CS101", 35)
/// .with_preferred("CS101", &["Ada"]);
///
/// assert_eq!(catalog.expected_enrollment("CS101"), 35);
/// assert_eq!(catalog.expected_enrollment("CS999"), 0);
/// assert!(catalog.is_preferred("CS101", "Ada"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Course sections to schedule, in locus order.
    pub tasks: Vec<String>,
    /// Candidate rooms.
    pub rooms: Vec<Room>,
    /// Candidate time slots.
    pub slots: Vec<TimeSlot>,
    /// Candidate instructors.
    pub instructors: Vec<String>,
    /// Expected enrollment per task name.
    pub enrollment: HashMap<String, u32>,
    /// Preferred instructors per task name.
    pub preferred: HashMap<String, Vec<String>>,
    /// Acceptable fallback instructors per task name.
    pub alternate: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Creates a catalog with empty preference tables.
    pub fn new(
        tasks: Vec<String>,
        rooms: Vec<Room>,
        slots: Vec<TimeSlot>,
        instructors: Vec<String>,
    ) -> Self {
        Self {
            tasks,
            rooms,
            slots,
            instructors,
            enrollment: HashMap::new(),
            preferred: HashMap::new(),
            alternate: HashMap::new(),
        }
    }

    /// Sets the expected enrollment of `task`.
    pub fn with_enrollment(mut self, task: &str, students: u32) -> Self {
        self.enrollment.insert(task.to_string(), students);
        self
    }

    /// Sets the preferred instructors of `task`.
    pub fn with_preferred(mut self, task: &str, instructors: &[&str]) -> Self {
        self.preferred
            .insert(task.to_string(), to_owned_names(instructors));
        self
    }

    /// Sets the alternate instructors of `task`.
    pub fn with_alternate(mut self, task: &str, instructors: &[&str]) -> Self {
        self.alternate
            .insert(task.to_string(), to_owned_names(instructors));
        self
    }

    /// The SLA department catalog: 11 sections, 7 rooms, 6 slots and
    /// 10 instructors.
    pub fn standard() -> Self {
        let tasks = [
            "SLA100A", "SLA100B", "SLA191A", "SLA191B", "SLA201", "SLA291", "SLA303", "SLA304",
            "SLA394", "SLA449", "SLA451",
        ];
        let rooms = vec![
            Room::new("Slater 003", 45),
            Room::new("Roman 216", 30),
            Room::new("Loft 206", 75),
            Room::new("Roman 201", 50),
            Room::new("Loft 310", 108),
            Room::new("Beach 201", 60),
            Room::new("Beach 301", 75),
        ];
        let instructors = [
            "Lock", "Glen", "Banks", "Richards", "Shaw", "Singer", "Uther", "Tyler", "Numen",
            "Zeldin",
        ];

        let mut catalog = Self::new(
            to_owned_names(&tasks),
            rooms,
            TimeSlot::ALL.to_vec(),
            to_owned_names(&instructors),
        );

        let intro = ["SLA100A", "SLA100B", "SLA191A", "SLA191B"];
        for task in intro {
            catalog = catalog
                .with_enrollment(task, 50)
                .with_preferred(task, &["Glen", "Lock", "Banks", "Zeldin"])
                .with_alternate(task, &["Numen", "Richards"]);
        }

        catalog
            .with_enrollment("SLA201", 50)
            .with_preferred("SLA201", &["Glen", "Banks", "Zeldin", "Shaw"])
            .with_alternate("SLA201", &["Numen", "Richards", "Singer"])
            .with_enrollment("SLA291", 50)
            .with_preferred("SLA291", &["Lock", "Banks", "Zeldin", "Singer"])
            .with_alternate("SLA291", &["Numen", "Richards", "Shaw", "Tyler"])
            .with_enrollment("SLA303", 60)
            .with_preferred("SLA303", &["Glen", "Zeldin", "Banks"])
            .with_alternate("SLA303", &["Numen", "Singer", "Shaw"])
            .with_enrollment("SLA304", 25)
            .with_preferred("SLA304", &["Glen", "Banks", "Tyler"])
            .with_alternate(
                "SLA304",
                &["Numen", "Singer", "Shaw", "Richards", "Uther", "Zeldin"],
            )
            .with_enrollment("SLA394", 20)
            .with_preferred("SLA394", &["Tyler", "Singer"])
            .with_alternate("SLA394", &["Richards", "Zeldin"])
            .with_enrollment("SLA449", 60)
            .with_preferred("SLA449", &["Tyler", "Singer", "Shaw"])
            .with_alternate("SLA449", &["Zeldin", "Uther"])
            .with_enrollment("SLA451", 100)
            .with_preferred("SLA451", &["Tyler", "Singer", "Shaw"])
            .with_alternate("SLA451", &["Zeldin", "Uther", "Richards", "Banks"])
    }

    /// Number of tasks, i.e. the length of every schedule.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Index of the task named `name`, if the catalog has one.
    pub fn task_index(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t == name)
    }

    /// Expected enrollment of `task`; 0 for unknown tasks.
    pub fn expected_enrollment(&self, task: &str) -> u32 {
        self.enrollment.get(task).copied().unwrap_or(0)
    }

    /// Whether `instructor` is preferred for `task`.
    pub fn is_preferred(&self, task: &str, instructor: &str) -> bool {
        contains_name(self.preferred.get(task), instructor)
    }

    /// Whether `instructor` is an acceptable fallback for `task`.
    pub fn is_alternate(&self, task: &str, instructor: &str) -> bool {
        contains_name(self.alternate.get(task), instructor)
    }

    /// Checks that every list random draws are made from is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks.is_empty() {
            return Err(ConfigError::EmptyCatalog("tasks"));
        }
        if self.rooms.is_empty() {
            return Err(ConfigError::EmptyCatalog("rooms"));
        }
        if self.slots.is_empty() {
            return Err(ConfigError::EmptyCatalog("time slots"));
        }
        if self.instructors.is_empty() {
            return Err(ConfigError::EmptyCatalog("instructors"));
        }
        Ok(())
    }
}

fn to_owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn contains_name(names: Option<&Vec<String>>, name: &str) -> bool {
    names.is_some_and(|list| list.iter().any(|n| n == name))
}
