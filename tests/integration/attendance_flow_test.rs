//! Attendance marking and the enrollment session counter.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{date, School};
use tutorhub::modules::attendance::models::{AttendanceStatus, MarkAttendance};
use tutorhub::modules::enrollments::models::{EnrollmentPatch, EnrollmentStatus};
use tutorhub::Scope;

fn sessions(school: &School, student: &str, course: &str) -> u32 {
    school
        .db
        .get_enrollments_by_student(student)
        .into_result()
        .unwrap()
        .into_iter()
        .find(|e| e.course_id == course && e.status == EnrollmentStatus::Active)
        .map(|e| e.sessions_attended)
        .unwrap()
}

fn mark(school: &School, status: AttendanceStatus, day: u32) {
    school
        .db
        .mark_attendance(MarkAttendance::new(&school.s1, &school.c1, status).on(date(2024, 3, day)))
        .into_result()
        .unwrap();
}

#[test]
fn test_five_present_days_count_five_sessions() {
    let school = School::new().with_enrollments();
    for day in [4, 6, 11, 13, 18] {
        mark(&school, AttendanceStatus::Present, day);
    }

    assert_eq!(sessions(&school, &school.s1, &school.c1), 5);
    let course = school.db.get_course_by_id(&school.c1).into_result().unwrap();
    assert_eq!(course.total_sessions, 30);
}

#[test]
fn test_same_day_is_replaced_not_duplicated() {
    let school = School::new().with_enrollments();
    mark(&school, AttendanceStatus::Absent, 4);
    mark(&school, AttendanceStatus::Present, 4);
    mark(&school, AttendanceStatus::Present, 4);

    let rows = school
        .db
        .get_attendance(Some(school.c1.as_str()), Some(school.s1.as_str()), &Scope::Unrestricted)
        .into_result()
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Present);

    // Absent → present counted once, the repeat did not count again
    assert_eq!(sessions(&school, &school.s1, &school.c1), 1);
}

#[test]
fn test_flipping_a_mark_counts_the_day_once() {
    let school = School::new().with_enrollments();
    for status in [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Present,
    ] {
        mark(&school, status, 4);
    }

    let rows = school
        .db
        .get_attendance(Some(school.c1.as_str()), Some(school.s1.as_str()), &Scope::Unrestricted)
        .into_result()
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Present);
    assert_eq!(sessions(&school, &school.s1, &school.c1), 1);

    mark(&school, AttendanceStatus::Late, 6);
    assert_eq!(sessions(&school, &school.s1, &school.c1), 2);
}

#[test]
fn test_downgrading_a_mark_never_decrements() {
    let school = School::new().with_enrollments();
    mark(&school, AttendanceStatus::Present, 4);
    mark(&school, AttendanceStatus::Absent, 4);
    assert_eq!(sessions(&school, &school.s1, &school.c1), 1);
}

#[test]
fn test_late_counts_and_has_no_check_in_time() {
    let school = School::new().with_enrollments();
    let late = school
        .db
        .mark_attendance(
            MarkAttendance::new(&school.s1, &school.c1, AttendanceStatus::Late).on(date(2024, 3, 5)),
        )
        .into_result()
        .unwrap();
    assert!(late.attendance.check_in_time.is_none());
    assert_eq!(late.enrollment.map(|e| e.sessions_attended), Some(1));

    let present = school
        .db
        .mark_attendance(
            MarkAttendance::new(&school.s1, &school.c1, AttendanceStatus::Present).on(date(2024, 3, 6)),
        )
        .into_result()
        .unwrap();
    assert!(present.attendance.check_in_time.is_some());
}

#[test]
fn test_class_date_defaults_to_today() {
    let school = School::new().with_enrollments();
    let marked = school
        .db
        .mark_attendance(MarkAttendance::new(&school.s2, &school.c1, AttendanceStatus::Present))
        .into_result()
        .unwrap();

    let today = tutorhub::core::timezone::school_date(chrono::Utc::now());
    // Allow for the test straddling midnight in Bangkok
    assert!(marked.attendance.class_date == today || marked.attendance.class_date.succ_opt() == Some(today));
}

#[test]
fn test_mark_without_enrollment_is_recorded_but_not_counted() {
    let school = School::new();
    let marked = school
        .db
        .mark_attendance(
            MarkAttendance::new(&school.s3, &school.c1, AttendanceStatus::Present).on(date(2024, 3, 4)),
        )
        .into_result()
        .unwrap();

    assert!(marked.enrollment.is_none());
    let rows = school
        .db
        .get_attendance(None, Some(school.s3.as_str()), &Scope::Unrestricted)
        .into_result()
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_attendance_is_scoped_through_course() {
    let school = School::new().with_enrollments();
    mark(&school, AttendanceStatus::Present, 4);

    let b2 = school
        .db
        .get_attendance(None, None, &Scope::branch(&school.b2))
        .into_result()
        .unwrap();
    assert!(b2.is_empty());
}

#[test]
fn test_sessions_attended_cannot_decrease() {
    let school = School::new().with_enrollments();
    mark(&school, AttendanceStatus::Present, 4);
    mark(&school, AttendanceStatus::Present, 5);

    let enrollment = school
        .db
        .get_enrollments_by_student(&school.s1)
        .into_result()
        .unwrap()
        .remove(0);

    let lowered = school.db.update_enrollment_sessions(&enrollment.id, 1);
    assert!(lowered.error.unwrap().contains("cannot decrease"));

    let raised = school
        .db
        .update_enrollment_sessions(&enrollment.id, 7)
        .into_result()
        .unwrap();
    assert_eq!(raised.sessions_attended, 7);
}

#[test]
fn test_duplicate_active_enrollment_is_rejected_until_completed() {
    let school = School::new().with_enrollments();
    let again = tutorhub::modules::enrollments::models::NewEnrollment::new(&school.s1, &school.c1);
    assert!(school.db.create_enrollment(again.clone()).error.is_some());

    let existing = school
        .db
        .get_enrollments_by_student(&school.s1)
        .into_result()
        .unwrap()
        .remove(0);
    school
        .db
        .update_enrollment(
            &existing.id,
            EnrollmentPatch {
                status: Some(EnrollmentStatus::Completed),
                ..Default::default()
            },
        )
        .into_result()
        .unwrap();

    assert!(school.db.create_enrollment(again).into_result().is_ok());
}
