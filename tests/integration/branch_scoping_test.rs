//! Branch-scoped queries: direct filters for users/courses/revenue, joins
//! through courses for enrollments and schedules, and the two-hop path
//! enrollment → course → branch for payments.

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::NaiveTime;
use rust_decimal_macros::dec;

use helpers::{date, School};
use tutorhub::modules::payments::models::{NewPayment, PaymentMethod, PaymentState};
use tutorhub::modules::schedules::models::NewSchedule;
use tutorhub::modules::users::models::NewUser;
use tutorhub::Scope;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_student_created_in_b1_is_only_listed_for_b1() {
    let school = School::new();
    let student = school
        .db
        .create_student(NewUser::student("0871234567", "Pim", "Sak", Some(school.b1.clone())))
        .into_result()
        .unwrap();

    let b1 = school.db.get_students(&Scope::branch(&school.b1)).into_result().unwrap();
    let b2 = school.db.get_students(&Scope::branch(&school.b2)).into_result().unwrap();

    assert!(b1.iter().any(|s| s.id == student.id));
    assert!(!b2.iter().any(|s| s.id == student.id));
    assert_eq!(student.branch_name.as_deref(), Some("Siam"));
}

#[test]
fn test_unscoped_lists_everything() {
    let school = School::new();
    let students = school.db.get_students(&Scope::Unrestricted).into_result().unwrap();
    let teachers = school.db.get_teachers(&Scope::Unrestricted).into_result().unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(teachers.len(), 2);
}

#[test]
fn test_scoped_enrollments_belong_to_branch_courses() {
    let school = School::new().with_enrollments();
    let scope = Scope::branch(&school.b1);

    let enrollments = school.db.get_enrollments(&scope).into_result().unwrap();
    assert_eq!(enrollments.len(), 2);
    for enrollment in &enrollments {
        let course = school
            .db
            .get_course_by_id(&enrollment.course_id)
            .into_result()
            .unwrap();
        assert_eq!(course.branch_id, school.b1);
    }
}

#[test]
fn test_unknown_branch_yields_empty_lists() {
    let school = School::new().with_enrollments().with_revenue();
    let scope = Scope::branch("no-such-branch");

    assert!(school.db.get_students(&scope).into_result().unwrap().is_empty());
    assert!(school.db.get_courses(&scope).into_result().unwrap().is_empty());
    assert!(school.db.get_enrollments(&scope).into_result().unwrap().is_empty());
    assert!(school.db.get_payments(&scope).into_result().unwrap().is_empty());
    assert!(school.db.get_schedules(&scope, None).into_result().unwrap().is_empty());
    assert!(school
        .db
        .get_revenue(&Default::default(), &scope)
        .into_result()
        .unwrap()
        .is_empty());
}

#[test]
fn test_payments_follow_enrollment_to_branch() {
    let school = School::new().with_enrollments();
    let enrollments = school.db.get_enrollments(&Scope::Unrestricted).into_result().unwrap();

    for enrollment in &enrollments {
        school
            .db
            .create_payment(NewPayment {
                enrollment_id: enrollment.id.clone(),
                amount: dec!(8500),
                payment_date: date(2024, 1, 5),
                payment_method: PaymentMethod::Transfer,
                status: PaymentState::Completed,
            })
            .into_result()
            .unwrap();
    }

    let b1 = school.db.get_payments(&Scope::branch(&school.b1)).into_result().unwrap();
    let b2 = school.db.get_payments(&Scope::branch(&school.b2)).into_result().unwrap();
    let all = school.db.get_payments(&Scope::Unrestricted).into_result().unwrap();

    assert_eq!(b1.len(), 2);
    assert_eq!(b2.len(), 1);
    assert_eq!(all.len(), 3);
}

#[test]
fn test_schedules_filter_by_branch_and_teacher() {
    let school = School::new();
    for (course, day) in [(&school.c1, 1), (&school.c1, 3), (&school.c2, 6)] {
        school
            .db
            .create_schedule(NewSchedule {
                course_id: course.clone(),
                day_of_week: day,
                start_time: time(9, 0),
                end_time: time(10, 30),
            })
            .into_result()
            .unwrap();
    }

    let b1 = school.db.get_schedules(&Scope::branch(&school.b1), None).into_result().unwrap();
    assert_eq!(b1.len(), 2);
    assert!(b1.windows(2).all(|w| w[0].day_of_week <= w[1].day_of_week));

    let t2 = school
        .db
        .get_schedules(&Scope::Unrestricted, Some(school.t2.as_str()))
        .into_result()
        .unwrap();
    assert_eq!(t2.len(), 1);
    assert_eq!(t2[0].course_id, school.c2);

    // Teacher from the other branch sees nothing inside B1
    let crossed = school
        .db
        .get_schedules(&Scope::branch(&school.b1), Some(school.t2.as_str()))
        .into_result()
        .unwrap();
    assert!(crossed.is_empty());
}

#[test]
fn test_single_branch_scope_sees_one_branch() {
    let school = School::new();
    let branches = school.db.get_branches(&Scope::branch(&school.b2)).into_result().unwrap();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0].name, "Ladprao");
}
