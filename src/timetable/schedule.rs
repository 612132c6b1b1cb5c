//! Schedule representation: one assignment per catalog task.

use rand::Rng;

use crate::catalog::{Catalog, TimeSlot};

/// The room, time slot and instructor bound to one task.
///
/// `room` and `instructor` index into [`Catalog::rooms`] and
/// [`Catalog::instructors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub room: usize,
    pub slot: TimeSlot,
    pub instructor: usize,
}

impl Assignment {
    /// Draws room, slot and instructor independently and uniformly.
    ///
    /// # Panics
    /// Panics if the catalog has no rooms, slots or instructors; call
    /// [`Catalog::validate`] first.
    pub fn random<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        Self {
            room: random_room(catalog, rng),
            slot: random_slot(catalog, rng),
            instructor: random_instructor(catalog, rng),
        }
    }
}

pub(crate) fn random_room<R: Rng>(catalog: &Catalog, rng: &mut R) -> usize {
    rng.random_range(0..catalog.rooms.len())
}

pub(crate) fn random_slot<R: Rng>(catalog: &Catalog, rng: &mut R) -> TimeSlot {
    catalog.slots[rng.random_range(0..catalog.slots.len())]
}

pub(crate) fn random_instructor<R: Rng>(catalog: &Catalog, rng: &mut R) -> usize {
    rng.random_range(0..catalog.instructors.len())
}

/// A complete timetable: the assignment of every catalog task.
///
/// `assignments[i]` belongs to `catalog.tasks[i]`, so a schedule always
/// covers the full task set exactly once. Schedules are plain values;
/// cloning copies every assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    /// Wraps assignments given in catalog task order.
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// A uniformly random schedule, with no attempt at feasibility.
    pub fn random<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        Self {
            assignments: (0..catalog.task_count())
                .map(|_| Assignment::random(catalog, rng))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignment of the task at `task` index.
    pub fn get(&self, task: usize) -> Option<&Assignment> {
        self.assignments.get(task)
    }

    /// Assignment of the task named `name`.
    pub fn get_by_name(&self, catalog: &Catalog, name: &str) -> Option<&Assignment> {
        catalog.task_index(name).and_then(|i| self.get(i))
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub(crate) fn assignments_mut(&mut self) -> &mut [Assignment] {
        &mut self.assignments
    }

    /// `(task name, assignment)` pairs in catalog order.
    pub fn iter<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a str, &'a Assignment)> + 'a {
        catalog
            .tasks
            .iter()
            .map(String::as_str)
            .zip(self.assignments.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_schedule_covers_every_task() {
        let catalog = Catalog::standard();
        let mut rng = create_rng(5);
        let schedule = Schedule::random(&catalog, &mut rng);
        assert_eq!(schedule.len(), catalog.task_count());
        for a in schedule.assignments() {
            assert!(a.room < catalog.rooms.len());
            assert!(catalog.slots.contains(&a.slot));
            assert!(a.instructor < catalog.instructors.len());
        }
    }

    #[test]
    fn test_random_draws_cover_domains() {
        let catalog = Catalog::standard();
        let mut rng = create_rng(9);
        let mut rooms = vec![false; catalog.rooms.len()];
        let mut instructors = vec![false; catalog.instructors.len()];
        let mut slots = std::collections::HashSet::new();
        for _ in 0..500 {
            let a = Assignment::random(&catalog, &mut rng);
            rooms[a.room] = true;
            instructors[a.instructor] = true;
            slots.insert(a.slot);
        }
        assert!(rooms.iter().all(|&r| r));
        assert!(instructors.iter().all(|&i| i));
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = Catalog::standard();
        let mut rng = create_rng(1);
        let schedule = Schedule::random(&catalog, &mut rng);
        assert_eq!(
            schedule.get_by_name(&catalog, "SLA191A"),
            schedule.get(2)
        );
        assert_eq!(schedule.get_by_name(&catalog, "SLA101A"), None);
    }

    #[test]
    fn test_iter_pairs_names_in_order() {
        let catalog = Catalog::standard();
        let mut rng = create_rng(1);
        let schedule = Schedule::random(&catalog, &mut rng);
        let names: Vec<&str> = schedule.iter(&catalog).map(|(t, _)| t).collect();
        assert_eq!(names, catalog.tasks.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_clone_is_independent() {
        let catalog = Catalog::standard();
        let mut rng = create_rng(2);
        let original = Schedule::random(&catalog, &mut rng);
        let mut copy = original.clone();
        copy.assignments_mut()[0].room = (original.assignments()[0].room + 1) % 7;
        assert_ne!(copy, original);
    }
}
