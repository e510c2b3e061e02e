use serde::Serialize;
use tracing::info;

use crate::core::traits::Repository;
use crate::core::{timezone, AppError, Result, Scope};
use crate::modules::attendance::models::{
    Attendance, AttendancePatch, AttendanceStatus, MarkAttendance, NewAttendance,
};
use crate::modules::attendance::repositories::AttendanceRepository;
use crate::modules::courses::services::CourseService;
use crate::modules::enrollments::models::Enrollment;
use crate::modules::enrollments::services::EnrollmentService;
use crate::store;

/// Outcome of marking a student for a class
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceMark {
    pub attendance: Attendance,
    /// Enrollment whose counter moved, if any
    pub enrollment: Option<Enrollment>,
}

#[derive(Debug, Clone)]
pub struct AttendanceService {
    attendance: AttendanceRepository,
    enrollments: EnrollmentService,
    courses: CourseService,
}

impl AttendanceService {
    pub fn new(
        attendance: AttendanceRepository,
        enrollments: EnrollmentService,
        courses: CourseService,
    ) -> Self {
        Self {
            attendance,
            enrollments,
            courses,
        }
    }

    /// Attendance filtered by course and student, restricted to courses in `scope`
    pub fn list_attendance(
        &self,
        course_id: Option<&str>,
        student_id: Option<&str>,
        scope: &Scope,
    ) -> Result<Vec<Attendance>> {
        let rows = self.attendance.list_filtered(course_id, student_id)?;
        match scope {
            Scope::Unrestricted => Ok(rows),
            Scope::Branch(_) => {
                let course_ids = self.courses.course_ids(scope, None)?;
                Ok(rows
                    .into_iter()
                    .filter(|a| course_ids.contains(&a.course_id))
                    .collect())
            }
        }
    }

    /// Record a student's attendance for one class day.
    ///
    /// A same-day mark is replaced. The enrollment counter grows only the
    /// first time the class day is marked as attended, so flipping a mark
    /// back and forth never counts the day twice.
    pub fn mark_attendance(&self, request: MarkAttendance) -> Result<AttendanceMark> {
        let now = store::now();
        let class_date = request
            .class_date
            .unwrap_or_else(|| timezone::school_date(now));
        let check_in_time = match request.status {
            AttendanceStatus::Present => Some(timezone::school_clock_time(now)),
            _ => None,
        };

        let (attendance, replaced) = self.attendance.replace_for_day(NewAttendance {
            student_id: request.student_id,
            course_id: request.course_id,
            class_date,
            status: request.status,
            check_in_time,
            notes: request.notes,
        })?;

        let already_counted = replaced.iter().any(Attendance::has_counted);
        let enrollment = if attendance.status.counts_as_attended() && !already_counted {
            self.enrollments
                .record_session(&attendance.student_id, &attendance.course_id)?
        } else {
            None
        };

        info!(
            student_id = %attendance.student_id,
            course_id = %attendance.course_id,
            class_date = %attendance.class_date,
            status = ?attendance.status,
            replaced = replaced.len(),
            "Attendance marked"
        );

        Ok(AttendanceMark {
            attendance,
            enrollment,
        })
    }

    /// Edit a stored mark without touching enrollment counters
    pub fn update_attendance(&self, id: &str, patch: AttendancePatch) -> Result<Attendance> {
        self.attendance.update(id, patch)
    }

    pub fn get_attendance(&self, id: &str) -> Result<Attendance> {
        self.attendance
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Attendance"))
    }

    /// Remove a mark; sessions already counted stay on the enrollment
    pub fn delete_attendance(&self, id: &str) -> Result<()> {
        self.attendance.delete(id)?;
        info!(attendance_id = %id, "Attendance deleted");
        Ok(())
    }
}
