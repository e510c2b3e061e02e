//! Seeding the store from a JSON document.

use std::io::Write;

use rust_decimal_macros::dec;

use tutorhub::core::AppError;
use tutorhub::modules::attendance::models::{AttendanceStatus, MarkAttendance};
use tutorhub::store::seed;
use tutorhub::{DatabaseService, Scope, SharedStore};

const SEED: &str = r#"{
    "branches": [
        {"id": "1", "name": "Siam", "address": "Rama I Rd", "phone": "021234567", "commission_rate": 0.15},
        {"id": "2", "name": "Ladprao", "address": "Ladprao Rd", "phone": "029876543", "commission_rate": 0.1}
    ],
    "users": [
        {"id": "u1", "phone": "0899999999", "first_name": "Super", "last_name": "Admin", "role": "superadmin"},
        {"id": "u2", "phone": "0811111111", "first_name": "Nok", "last_name": "Noi", "role": "student", "branch_id": "1", "branch_name": "Siam"}
    ],
    "courses": [
        {"id": "c1", "name": "Math", "total_sessions": 30, "price": 8500, "branch_id": "1"}
    ],
    "enrollments": [
        {"id": "e1", "student_id": "u2", "course_id": "c1", "enrollment_date": "2024-01-05", "payment_status": "paid"}
    ],
    "revenue": [
        {"id": "r1", "branch_id": "1", "course_id": "c1", "student_id": "u2", "amount": 8500, "commission": 1275, "date": "2024-01-05"}
    ]
}"#;

#[test]
fn test_seed_document_loads_into_services() {
    let store = seed::from_json(SEED).unwrap();
    let db = DatabaseService::new(SharedStore::new(store));

    let stats = db.get_statistics(&Scope::Unrestricted).into_result().unwrap();
    assert_eq!(stats.total_branches, 2);
    assert_eq!(stats.total_students, 1);
    assert_eq!(stats.total_enrollments, 1);
    assert_eq!(stats.paid_enrollments, 1);
    assert_eq!(stats.total_revenue, dec!(8500));
    assert_eq!(stats.total_commission, dec!(1275));
}

#[test]
fn test_duplicate_phone_in_seed_is_rejected() {
    let json = r#"{"users": [
        {"id": "a", "phone": "0811111111", "first_name": "A", "last_name": "A", "role": "student"},
        {"id": "b", "phone": "0811111111", "first_name": "B", "last_name": "B", "role": "teacher"}
    ]}"#;
    assert!(matches!(seed::from_json(json), Err(AppError::Configuration(_))));
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let store = seed::from_json(SEED).unwrap();
    let json = seed::to_json(&store).unwrap();
    let reloaded = seed::from_json(&json).unwrap();

    assert_eq!(reloaded.users, store.users);
    assert_eq!(reloaded.revenue, store.revenue);
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let store = seed::load(file.path()).await.unwrap();
    assert_eq!(store.courses.len(), 1);
    assert_eq!(store.courses[0].branch_id, "1");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let result = seed::load("/nonexistent/seed.json").await;
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_sample_seed_ships_a_working_school() {
    let store = seed::from_json(include_str!("../../seed/sample.json")).unwrap();
    let db = DatabaseService::new(SharedStore::new(store));

    let session = db.login("0812345678").into_result().unwrap();
    let stats = db.get_statistics(&session.scope().unwrap()).into_result().unwrap();
    assert_eq!(stats.total_students, 1);
    assert_eq!(stats.total_courses, 2);
    assert_eq!(stats.total_revenue, dec!(3000));
    assert_eq!(stats.total_commission, dec!(450));

    // The seeded class day is already counted
    let remark = db
        .mark_attendance(
            MarkAttendance::new("2", "1", AttendanceStatus::Late)
                .on(chrono::NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()),
        )
        .into_result()
        .unwrap();
    assert!(remark.enrollment.is_none());
    assert_eq!(db.get_enrollment_by_id("1").into_result().unwrap().sessions_attended, 1);
}
