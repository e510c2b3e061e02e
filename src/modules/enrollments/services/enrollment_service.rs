use std::collections::HashSet;

use tracing::{info, warn};

use crate::core::traits::Repository;
use crate::core::{timezone, AppError, Result, Role, Scope};
use crate::modules::courses::models::Course;
use crate::modules::courses::services::CourseService;
use crate::modules::enrollments::models::{Enrollment, EnrollmentPatch, EnrollmentStatus, NewEnrollment};
use crate::modules::enrollments::repositories::{EnrollmentRepository, EnrollmentRow};
use crate::modules::users::repositories::UserRepository;
use crate::store;

#[derive(Debug, Clone)]
pub struct EnrollmentService {
    enrollments: EnrollmentRepository,
    courses: CourseService,
    users: UserRepository,
}

impl EnrollmentService {
    pub fn new(
        enrollments: EnrollmentRepository,
        courses: CourseService,
        users: UserRepository,
    ) -> Self {
        Self {
            enrollments,
            courses,
            users,
        }
    }

    /// Enrollments whose course belongs to the scoped branch
    pub fn list_enrollments(&self, scope: &Scope) -> Result<Vec<Enrollment>> {
        match scope {
            Scope::Unrestricted => self.enrollments.list(),
            Scope::Branch(_) => {
                let course_ids = self.courses.course_ids(scope, None)?;
                self.enrollments
                    .list_where(&|e| course_ids.contains(&e.course_id))
            }
        }
    }

    /// Ids of the scoped enrollments, for the payment join
    pub fn enrollment_ids(&self, scope: &Scope) -> Result<HashSet<String>> {
        Ok(self
            .list_enrollments(scope)?
            .into_iter()
            .map(|e| e.id)
            .collect())
    }

    pub fn list_by_student(&self, student_id: &str) -> Result<Vec<Enrollment>> {
        self.enrollments.list_by_student(student_id)
    }

    pub fn list_by_course(&self, course_id: &str) -> Result<Vec<Enrollment>> {
        self.enrollments.list_by_course(course_id)
    }

    pub fn get_enrollment(&self, id: &str) -> Result<Enrollment> {
        self.enrollments
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Enrollment"))
    }

    /// Course an enrollment points at; `NotFound` once the course is deleted
    pub fn course_of(&self, enrollment_id: &str) -> Result<Course> {
        let enrollment = self.get_enrollment(enrollment_id)?;
        self.courses.get_course(&enrollment.course_id)
    }

    pub fn active_enrollment(&self, student_id: &str, course_id: &str) -> Result<Option<Enrollment>> {
        self.enrollments.find_active(student_id, course_id)
    }

    /// Enroll a student. A student holds at most one active enrollment per
    /// course; completed or cancelled ones do not block re-enrolling.
    pub fn enroll(&self, input: NewEnrollment) -> Result<Enrollment> {
        match self.users.find_by_id(&input.student_id)? {
            Some(user) if user.role == Role::Student => {}
            Some(_) => {
                return Err(AppError::validation(format!(
                    "User {} is not a student",
                    input.student_id
                )))
            }
            None => return Err(AppError::not_found("Student")),
        }
        self.courses.get_course(&input.course_id)?;

        if input.status == EnrollmentStatus::Active {
            self.ensure_no_active_duplicate(&input.student_id, &input.course_id, None)?;
        }

        let enrollment_date = input
            .enrollment_date
            .unwrap_or_else(|| timezone::school_date(store::now()));
        let enrollment = self.enrollments.create(EnrollmentRow {
            enrollment: input,
            enrollment_date,
        })?;

        info!(
            enrollment_id = %enrollment.id,
            student_id = %enrollment.student_id,
            course_id = %enrollment.course_id,
            "Student enrolled"
        );
        Ok(enrollment)
    }

    pub fn update_enrollment(&self, id: &str, patch: EnrollmentPatch) -> Result<Enrollment> {
        let current = self.get_enrollment(id)?;
        let status = patch.status.unwrap_or(current.status);
        if status == EnrollmentStatus::Active {
            let student_id = patch.student_id.as_deref().unwrap_or(&current.student_id);
            let course_id = patch.course_id.as_deref().unwrap_or(&current.course_id);
            self.ensure_no_active_duplicate(student_id, course_id, Some(id))?;
        }
        self.enrollments.update(id, patch)
    }

    /// Set the attended-session counter; it may never go down
    pub fn set_sessions_attended(&self, id: &str, sessions_attended: u32) -> Result<Enrollment> {
        let current = self.get_enrollment(id)?;
        if sessions_attended < current.sessions_attended {
            return Err(AppError::validation(format!(
                "sessions_attended cannot decrease from {} to {}",
                current.sessions_attended, sessions_attended
            )));
        }
        if let Ok(course) = self.courses.get_course(&current.course_id) {
            if sessions_attended > course.total_sessions {
                warn!(
                    enrollment_id = %id,
                    sessions_attended,
                    total_sessions = course.total_sessions,
                    "Attended sessions exceed the course length"
                );
            }
        }
        self.enrollments.set_sessions_attended(id, sessions_attended)
    }

    /// Count one more attended class for the active enrollment of the pair.
    /// Returns `None` when the student has no active enrollment.
    pub fn record_session(&self, student_id: &str, course_id: &str) -> Result<Option<Enrollment>> {
        match self.enrollments.find_active(student_id, course_id)? {
            Some(enrollment) => Ok(Some(
                self.enrollments.increment_sessions_attended(&enrollment.id)?,
            )),
            None => {
                warn!(
                    student_id = %student_id,
                    course_id = %course_id,
                    "Attendance marked without an active enrollment"
                );
                Ok(None)
            }
        }
    }

    pub fn delete_enrollment(&self, id: &str) -> Result<()> {
        self.enrollments.delete(id)?;
        info!(enrollment_id = %id, "Enrollment deleted");
        Ok(())
    }

    fn ensure_no_active_duplicate(
        &self,
        student_id: &str,
        course_id: &str,
        except_id: Option<&str>,
    ) -> Result<()> {
        let duplicate = self.enrollments.list_where(&|e| {
            e.student_id == student_id
                && e.course_id == course_id
                && e.is_active()
                && Some(e.id.as_str()) != except_id
        })?;
        if duplicate.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Student {} already has an active enrollment in course {}",
                student_id, course_id
            )))
        }
    }
}
