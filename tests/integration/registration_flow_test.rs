//! Student self-registration: four sequential writes with no rollback.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::School;
use tutorhub::core::Role;
use tutorhub::modules::users::models::{GuardianType, NewGuardian};
use tutorhub::modules::users::services::RegistrationForm;

fn form(school: &School, phone: &str) -> RegistrationForm {
    RegistrationForm {
        first_name: "Kanya".to_string(),
        last_name: "Srisuk".to_string(),
        nickname: Some("Kan".to_string()),
        phone: phone.to_string(),
        branch_id: Some(school.b1.clone()),
        father: NewGuardian {
            first_name: "Somchai".to_string(),
            phone: Some(phone.to_string()),
            occupation: Some("Engineer".to_string()),
            ..Default::default()
        },
        mother: NewGuardian {
            first_name: "Malee".to_string(),
            line_id: Some("malee.s".to_string()),
            ..Default::default()
        },
        preferred_school_1: Some("Triam Udom".to_string()),
        pdpa_consent: true,
        ..Default::default()
    }
}

#[test]
fn test_registration_writes_every_record() {
    let school = School::new();
    let registration = school
        .db
        .register_student(form(&school, "0861112222"))
        .into_result()
        .unwrap();

    assert_eq!(registration.student.role, Role::Student);
    assert_eq!(registration.student.branch_name.as_deref(), Some("Siam"));
    assert_eq!(registration.guardians.len(), 2);
    assert_eq!(registration.guardians[0].guardian_type, GuardianType::Father);
    assert_eq!(registration.guardians[1].guardian_type, GuardianType::Mother);
    assert!(registration.preference.pdpa_consent);

    let store = school.db.store().read().unwrap();
    assert!(store.guardians.iter().all(|g| g.student_id == registration.student.id));
    assert_eq!(store.preferences.len(), 1);
}

#[test]
fn test_registered_student_can_log_in() {
    let school = School::new();
    school.db.register_student(form(&school, "0861113333")).into_result().unwrap();

    let session = school.db.login("0861113333").into_result().unwrap();
    assert_eq!(session.role, Role::Student);
    assert_eq!(session.branch_id.as_deref(), Some(school.b1.as_str()));
}

#[test]
fn test_taken_phone_writes_nothing() {
    let school = School::new();
    // 0810000001 already belongs to a fixture student
    let users_before = school.db.store().read().unwrap().users.len();

    let result = school.db.register_student(form(&school, "0810000001"));
    assert!(result.error.unwrap().contains("already registered"));

    let store = school.db.store().read().unwrap();
    assert_eq!(store.users.len(), users_before);
    assert!(store.guardians.is_empty());
}

#[test]
fn test_failure_midway_keeps_earlier_writes() {
    let school = School::new();
    let mut input = form(&school, "0861114444");
    input.mother.phone = Some("not-a-phone".to_string());

    let result = school.db.register_student(input);
    assert!(result.data.is_none());
    assert!(result.error.unwrap().contains("guardian phone"));

    // Student and father were committed before the mother failed
    let store = school.db.store().read().unwrap();
    let student = store.users.iter().find(|u| u.phone == "0861114444").unwrap();
    let guardians: Vec<_> = store
        .guardians
        .iter()
        .filter(|g| g.student_id == student.id)
        .collect();
    assert_eq!(guardians.len(), 1);
    assert_eq!(guardians[0].guardian_type, GuardianType::Father);
    assert!(store.preferences.is_empty());
}

#[test]
fn test_missing_names_are_rejected() {
    let school = School::new();
    let mut input = form(&school, "0861115555");
    input.first_name = String::new();
    assert!(school.db.register_student(input).error.is_some());
}
