use std::collections::HashSet;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::schedules::models::{NewSchedule, Schedule, SchedulePatch};
use crate::store::{self, SharedStore};

#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    store: SharedStore,
}

impl ScheduleRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Schedules attached to any of the given courses, ordered by weekday then start
    pub fn list_for_courses(&self, course_ids: &HashSet<String>) -> Result<Vec<Schedule>> {
        let mut schedules = self.list_where(&|s| course_ids.contains(&s.course_id))?;
        schedules.sort_by_key(|s| (s.day_of_week, s.start_time));
        Ok(schedules)
    }
}

impl Repository<Schedule> for ScheduleRepository {
    type Create = NewSchedule;
    type Patch = SchedulePatch;

    fn create(&self, input: NewSchedule) -> Result<Schedule> {
        let now = store::now();
        let schedule = Schedule {
            id: store::new_id(),
            course_id: input.course_id,
            day_of_week: input.day_of_week,
            start_time: input.start_time,
            end_time: input.end_time,
            created_at: now,
            updated_at: now,
        };

        self.store.write()?.schedules.push(schedule.clone());
        Ok(schedule)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Schedule>> {
        Ok(store::find_by_id(&self.store.read()?.schedules, id).cloned())
    }

    fn update(&self, id: &str, patch: SchedulePatch) -> Result<Schedule> {
        let mut db = self.store.write()?;
        let schedule = store::find_by_id_mut(&mut db.schedules, id)
            .ok_or_else(|| AppError::not_found("Schedule"))?;
        patch.validate_against(schedule)?;
        patch.apply_to(schedule);
        schedule.updated_at = store::now();

        Ok(schedule.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.schedules, id) {
            Ok(())
        } else {
            Err(AppError::not_found("Schedule"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&Schedule) -> bool) -> Result<Vec<Schedule>> {
        Ok(self
            .store
            .read()?
            .schedules
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect())
    }
}
