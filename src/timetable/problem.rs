//! Timetabling GA problem definition.
//!
//! Implements [`GaProblem`] for course timetabling: a [`Schedule`] is the
//! individual, one assignment per catalog task is the locus, and
//! [`evaluate`](super::fitness::evaluate) is the fitness.

use rand::Rng;

use super::fitness;
use super::schedule::{random_instructor, random_room, random_slot, Assignment, Schedule};
use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::ga::operators::{per_locus_mutation, single_point_crossover};
use crate::ga::GaProblem;

/// GA problem over a fixed [`Catalog`].
///
/// # Example
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::timetable::TimetableProblem;
///
/// let problem = TimetableProblem::new(Catalog::standard());
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(5)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.fitness_history.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    catalog: Catalog,
}

impl TimetableProblem {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces one uniformly chosen field of `assignment` (room, slot or
    /// instructor) with a uniform draw from its catalog domain.
    fn resample_field<R: Rng>(&self, assignment: &mut Assignment, rng: &mut R) {
        match rng.random_range(0..3) {
            0 => assignment.room = random_room(&self.catalog, rng),
            1 => assignment.slot = random_slot(&self.catalog, rng),
            _ => assignment.instructor = random_instructor(&self.catalog, rng),
        }
    }
}

impl GaProblem for TimetableProblem {
    type Individual = Schedule;

    fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Schedule {
        Schedule::random(&self.catalog, rng)
    }

    fn evaluate(&self, schedule: &Schedule) -> f64 {
        fitness::evaluate(&self.catalog, schedule)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Schedule,
        parent2: &Schedule,
        rng: &mut R,
    ) -> (Schedule, Schedule) {
        let (c1, c2) = single_point_crossover(parent1.assignments(), parent2.assignments(), rng);
        (Schedule::new(c1), Schedule::new(c2))
    }

    fn mutate<R: Rng>(&self, schedule: &Schedule, mutation_rate: f64, rng: &mut R) -> Schedule {
        let mut child = schedule.clone();
        per_locus_mutation(child.assignments_mut(), mutation_rate, rng, |a, rng| {
            self.resample_field(a, rng)
        });
        child
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TimeSlot;
    use crate::ga::{GaConfig, GaRunner, PopulationPolicy};
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn problem() -> TimetableProblem {
        TimetableProblem::new(Catalog::standard())
    }

    fn covers_catalog(catalog: &Catalog, schedule: &Schedule) -> bool {
        schedule.len() == catalog.task_count()
            && schedule.assignments().iter().all(|a| {
                a.room < catalog.rooms.len()
                    && catalog.slots.contains(&a.slot)
                    && a.instructor < catalog.instructors.len()
            })
    }

    fn changed_fields(before: &Assignment, after: &Assignment) -> usize {
        usize::from(before.room != after.room)
            + usize::from(before.slot != after.slot)
            + usize::from(before.instructor != after.instructor)
    }

    proptest! {
        #[test]
        fn prop_crossover_children_take_whole_assignments(seed in any::<u64>()) {
            let p = problem();
            let mut rng = create_rng(seed);
            let a = p.create_individual(&mut rng);
            let b = p.create_individual(&mut rng);
            let (c1, c2) = p.crossover(&a, &b, &mut rng);

            prop_assert!(covers_catalog(p.catalog(), &c1));
            prop_assert!(covers_catalog(p.catalog(), &c2));
            for i in 0..a.len() {
                let (x, y) = (c1.get(i).unwrap(), c2.get(i).unwrap());
                let from_a = x == a.get(i).unwrap() && y == b.get(i).unwrap();
                let from_b = x == b.get(i).unwrap() && y == a.get(i).unwrap();
                prop_assert!(from_a || from_b, "task {} mixes parents", i);
            }
        }

        #[test]
        fn prop_mutation_changes_at_most_one_field_per_task(
            seed in any::<u64>(),
            rate in 0.0f64..=1.0,
        ) {
            let p = problem();
            let mut rng = create_rng(seed);
            let original = p.create_individual(&mut rng);
            let snapshot = original.clone();
            let mutated = p.mutate(&original, rate, &mut rng);

            prop_assert_eq!(&original, &snapshot);
            prop_assert!(covers_catalog(p.catalog(), &mutated));
            for (before, after) in original.assignments().iter().zip(mutated.assignments()) {
                prop_assert!(changed_fields(before, after) <= 1);
            }
        }

        #[test]
        fn prop_mutation_rate_zero_is_identity(seed in any::<u64>()) {
            let p = problem();
            let mut rng = create_rng(seed);
            let original = p.create_individual(&mut rng);
            prop_assert_eq!(p.mutate(&original, 0.0, &mut rng), original);
        }
    }

    #[test]
    fn test_mutation_rate_one_picks_fields_uniformly() {
        let p = problem();
        let mut rng = create_rng(17);
        let mut room = 0usize;
        let mut slot = 0usize;
        let mut instructor = 0usize;
        let mut tasks = 0usize;
        for _ in 0..300 {
            let original = p.create_individual(&mut rng);
            let mutated = p.mutate(&original, 1.0, &mut rng);
            for (b, a) in original.assignments().iter().zip(mutated.assignments()) {
                tasks += 1;
                room += usize::from(b.room != a.room);
                slot += usize::from(b.slot != a.slot);
                instructor += usize::from(b.instructor != a.instructor);
            }
        }
        // Each field is picked a third of the time; a redraw can repeat the
        // old value (1/7 rooms, 1/6 slots, 1/10 instructors).
        for (name, count) in [("room", room), ("slot", slot), ("instructor", instructor)] {
            let share = count as f64 / tasks as f64;
            assert!(
                (0.22..0.36).contains(&share),
                "{name} changed in {share:.3} of tasks"
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let mut catalog = Catalog::standard();
        catalog.slots.clear();
        let p = TimetableProblem::new(catalog);
        let err = GaRunner::run(&p, &GaConfig::default().with_seed(1)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyCatalog("time slots"));
    }

    #[test]
    fn test_restricted_slot_list_is_respected() {
        let mut catalog = Catalog::standard();
        catalog.slots = vec![TimeSlot::OnePm];
        let p = TimetableProblem::new(catalog);
        let mut rng = create_rng(4);
        let s = p.create_individual(&mut rng);
        assert!(s.assignments().iter().all(|a| a.slot == TimeSlot::OnePm));
    }

    // ---- End-to-end ----

    #[test]
    fn test_one_generation_shrink_halves_population() {
        let p = problem();
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(1)
            .with_population_policy(PopulationPolicy::Shrink)
            .with_seed(42);
        let result = GaRunner::run(&p, &config).unwrap();
        assert_eq!(result.population.len(), 2);
        assert_eq!(result.fitness_history.len(), 1);
        assert!(result
            .population
            .iter()
            .all(|s| covers_catalog(p.catalog(), s)));
    }

    #[test]
    fn test_full_run_improves_and_tracks_best() {
        let p = problem();
        let config = GaConfig::default()
            .with_population_size(100)
            .with_max_generations(40)
            .with_mutation_rate(0.05)
            .with_seed(2024);
        let result = GaRunner::run(&p, &config).unwrap();

        let history = &result.fitness_history;
        assert_eq!(history.len(), 40);
        assert!(history.windows(2).all(|w| w[0] <= w[1]));
        assert!(history[39] > history[0], "no improvement: {history:?}");

        let best = result.best.as_ref().unwrap();
        assert!(covers_catalog(p.catalog(), best));
        assert_eq!(p.evaluate(best), result.best_fitness);
    }
}
