use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, Result, Scope};
use crate::modules::courses::services::CourseService;
use crate::modules::schedules::models::{NewSchedule, Schedule, SchedulePatch};
use crate::modules::schedules::repositories::ScheduleRepository;

#[derive(Debug, Clone)]
pub struct ScheduleService {
    schedules: ScheduleRepository,
    courses: CourseService,
}

impl ScheduleService {
    pub fn new(schedules: ScheduleRepository, courses: CourseService) -> Self {
        Self { schedules, courses }
    }

    /// Weekly slots of the courses in `scope`, optionally only one teacher's
    pub fn list_schedules(&self, scope: &Scope, teacher_id: Option<&str>) -> Result<Vec<Schedule>> {
        if scope == &Scope::Unrestricted && teacher_id.is_none() {
            let mut schedules = self.schedules.list()?;
            schedules.sort_by_key(|s| (s.day_of_week, s.start_time));
            return Ok(schedules);
        }
        let course_ids = self.courses.course_ids(scope, teacher_id)?;
        self.schedules.list_for_courses(&course_ids)
    }

    pub fn get_schedule(&self, id: &str) -> Result<Schedule> {
        self.schedules
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Schedule"))
    }

    pub fn create_schedule(&self, input: NewSchedule) -> Result<Schedule> {
        input.validate()?;
        self.courses.get_course(&input.course_id)?;
        let schedule = self.schedules.create(input)?;
        info!(
            schedule_id = %schedule.id,
            course_id = %schedule.course_id,
            day_of_week = schedule.day_of_week,
            "Schedule created"
        );
        Ok(schedule)
    }

    pub fn update_schedule(&self, id: &str, patch: SchedulePatch) -> Result<Schedule> {
        if let Some(course_id) = patch.course_id.as_deref() {
            self.courses.get_course(course_id)?;
        }
        self.schedules.update(id, patch)
    }

    pub fn delete_schedule(&self, id: &str) -> Result<()> {
        self.schedules.delete(id)?;
        info!(schedule_id = %id, "Schedule deleted");
        Ok(())
    }
}
