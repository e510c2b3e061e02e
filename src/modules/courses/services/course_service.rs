use std::collections::HashSet;

use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, Result, Role, Scope};
use crate::modules::courses::models::{Course, CoursePatch, NewCourse};
use crate::modules::courses::repositories::CourseRepository;
use crate::modules::users::repositories::UserRepository;

/// Courses and the first hop of every branch-scoped join
#[derive(Debug, Clone)]
pub struct CourseService {
    courses: CourseRepository,
    users: UserRepository,
}

impl CourseService {
    pub fn new(courses: CourseRepository, users: UserRepository) -> Self {
        Self { courses, users }
    }

    pub fn list_courses(&self, scope: &Scope) -> Result<Vec<Course>> {
        self.courses
            .list_where(&|c| scope.admits(Some(c.branch_id.as_str())))
    }

    pub fn get_course(&self, id: &str) -> Result<Course> {
        self.courses
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Course"))
    }

    pub fn list_by_teacher(&self, teacher_id: &str) -> Result<Vec<Course>> {
        self.courses.list_by_teacher(teacher_id)
    }

    /// Ids of courses in `scope`, optionally narrowed to one teacher
    pub fn course_ids(&self, scope: &Scope, teacher_id: Option<&str>) -> Result<HashSet<String>> {
        Ok(self
            .courses
            .list_where(&|c| {
                scope.admits(Some(c.branch_id.as_str()))
                    && teacher_id.is_none_or(|t| c.teacher_id.as_deref() == Some(t))
            })?
            .into_iter()
            .map(|c| c.id)
            .collect())
    }

    pub fn create_course(&self, input: NewCourse) -> Result<Course> {
        input.validate()?;
        if let Some(teacher_id) = input.teacher_id.as_deref() {
            self.ensure_teacher(teacher_id)?;
        }
        let course = self.courses.create(input)?;
        info!(course_id = %course.id, branch_id = %course.branch_id, "Course created");
        Ok(course)
    }

    pub fn update_course(&self, id: &str, patch: CoursePatch) -> Result<Course> {
        patch.validate()?;
        if let Some(teacher_id) = patch.teacher_id.as_deref() {
            self.ensure_teacher(teacher_id)?;
        }
        self.courses.update(id, patch)
    }

    pub fn assign_teacher(&self, course_id: &str, teacher_id: &str) -> Result<Course> {
        self.update_course(
            course_id,
            CoursePatch {
                teacher_id: Some(teacher_id.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn unassign_teacher(&self, course_id: &str) -> Result<Course> {
        self.courses.unassign_teacher(course_id)
    }

    /// Hard delete; enrollments, schedules and revenue referring to the
    /// course are left in place
    pub fn delete_course(&self, id: &str) -> Result<()> {
        self.courses.delete(id)?;
        info!(course_id = %id, "Course deleted");
        Ok(())
    }

    fn ensure_teacher(&self, teacher_id: &str) -> Result<()> {
        match self.users.find_by_id(teacher_id)? {
            Some(user) if user.role == Role::Teacher => Ok(()),
            Some(user) => Err(AppError::validation(format!(
                "User {} is a {}, not a teacher",
                user.id, user.role
            ))),
            None => Err(AppError::not_found("Teacher")),
        }
    }
}
