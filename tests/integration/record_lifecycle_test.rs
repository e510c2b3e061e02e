//! Find, update and delete through the facade for the ledger-style entities.

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::NaiveTime;
use rust_decimal_macros::dec;

use helpers::{date, School};
use tutorhub::modules::attendance::models::{AttendancePatch, AttendanceStatus, MarkAttendance};
use tutorhub::modules::revenue::models::{NewRevenue, RevenuePatch};
use tutorhub::modules::schedules::models::NewSchedule;
use tutorhub::Scope;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_revenue_amount_update_resplits_commission() {
    let school = School::new();
    let revenue = school
        .db
        .create_revenue(NewRevenue::new(&school.b1, &school.c1, &school.s1, dec!(10000), date(2024, 1, 10)))
        .into_result()
        .unwrap();
    assert_eq!(revenue.commission, dec!(1500));

    let patch = RevenuePatch {
        amount: Some(dec!(12000)),
        ..Default::default()
    };
    let updated = school.db.update_revenue(&revenue.id, patch).into_result().unwrap();
    assert_eq!(updated.amount, dec!(12000));
    assert_eq!(updated.commission, dec!(1800));

    let fetched = school.db.get_revenue_by_id(&revenue.id).into_result().unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn test_revenue_explicit_commission_wins_over_rate() {
    let school = School::new();
    let revenue = school
        .db
        .create_revenue(NewRevenue::new(&school.b2, &school.c2, &school.s3, dec!(8000), date(2024, 2, 3)))
        .into_result()
        .unwrap();

    let patch = RevenuePatch {
        amount: Some(dec!(9000)),
        commission: Some(dec!(500)),
        ..Default::default()
    };
    let updated = school.db.update_revenue(&revenue.id, patch).into_result().unwrap();
    assert_eq!(updated.commission, dec!(500));

    let negative = RevenuePatch {
        amount: Some(dec!(-1)),
        ..Default::default()
    };
    let result = school.db.update_revenue(&revenue.id, negative);
    assert!(result.error.unwrap().starts_with("Validation error"));
}

#[test]
fn test_deleted_revenue_leaves_statistics() {
    let school = School::new().with_revenue();
    let rows = school
        .db
        .get_revenue(&Default::default(), &Scope::branch(&school.b2))
        .into_result()
        .unwrap();
    assert_eq!(rows.len(), 1);

    assert!(school.db.delete_revenue(&rows[0].id).error.is_none());

    let result = school.db.get_revenue_by_id(&rows[0].id);
    assert!(result.data.is_none());
    assert_eq!(result.error.as_deref(), Some("Revenue not found"));

    let stats = school.db.get_statistics(&Scope::Unrestricted).into_result().unwrap();
    assert_eq!(stats.total_revenue, dec!(15000));

    let again = school.db.delete_revenue(&rows[0].id);
    assert_eq!(again.error.as_deref(), Some("Revenue not found"));
}

#[test]
fn test_attendance_update_and_delete_keep_sessions() {
    let school = School::new().with_enrollments();
    let mark = school
        .db
        .mark_attendance(
            MarkAttendance::new(&school.s1, &school.c1, AttendanceStatus::Present).on(date(2024, 3, 4)),
        )
        .into_result()
        .unwrap();
    let id = mark.attendance.id.clone();

    let patch = AttendancePatch {
        notes: Some("left early".to_string()),
        ..Default::default()
    };
    let updated = school.db.update_attendance(&id, patch).into_result().unwrap();
    assert_eq!(updated.notes.as_deref(), Some("left early"));
    assert_eq!(
        school.db.get_attendance_by_id(&id).into_result().unwrap().notes,
        updated.notes
    );

    assert!(school.db.delete_attendance(&id).error.is_none());
    let missing = school.db.get_attendance_by_id(&id);
    assert_eq!(missing.error.as_deref(), Some("Attendance not found"));

    let enrollment = school
        .db
        .get_enrollments_by_student(&school.s1)
        .into_result()
        .unwrap()
        .remove(0);
    assert_eq!(enrollment.sessions_attended, 1);
    assert_eq!(
        school.db.get_enrollment_by_id(&enrollment.id).into_result().unwrap(),
        enrollment
    );
}

#[test]
fn test_schedule_find_and_delete() {
    let school = School::new();
    let schedule = school
        .db
        .create_schedule(NewSchedule {
            course_id: school.c1.clone(),
            day_of_week: 1,
            start_time: time(9, 0),
            end_time: time(10, 30),
        })
        .into_result()
        .unwrap();

    let fetched = school.db.get_schedule_by_id(&schedule.id).into_result().unwrap();
    assert_eq!(fetched.start_time, time(9, 0));

    assert!(school.db.delete_schedule(&schedule.id).error.is_none());
    let missing = school.db.get_schedule_by_id(&schedule.id);
    assert_eq!(missing.error.as_deref(), Some("Schedule not found"));
    assert!(school
        .db
        .get_schedules(&Scope::Unrestricted, None)
        .into_result()
        .unwrap()
        .is_empty());
}
