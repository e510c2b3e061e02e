use chrono::{Duration, TimeZone, Utc};

use tutorhub::core::{AppError, Role, Scope, Session};

fn session(role: Role, branch: Option<&str>) -> Session {
    Session::new("U1", role, branch.map(str::to_string))
}

#[test]
fn test_superadmin_is_unrestricted() {
    assert_eq!(session(Role::Superadmin, None).scope().unwrap(), Scope::Unrestricted);
    // An attached branch does not narrow a superadmin
    assert_eq!(
        session(Role::Superadmin, Some("B1")).scope().unwrap(),
        Scope::Unrestricted
    );
}

#[test]
fn test_branch_roles_are_pinned() {
    for role in [Role::Admin, Role::Teacher, Role::Student] {
        assert_eq!(
            session(role, Some("B1")).scope().unwrap(),
            Scope::branch("B1"),
            "{} should be scoped to its branch",
            role
        );
    }
}

#[test]
fn test_branchless_admin_is_rejected() {
    let err = session(Role::Admin, None).scope().unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));

    let err = session(Role::Teacher, Some("")).scope().unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[test]
fn test_only_staff_may_modify() {
    assert!(session(Role::Admin, Some("B1")).require_staff().is_ok());
    assert!(session(Role::Superadmin, None).require_staff().is_ok());
    assert!(session(Role::Teacher, Some("B1")).require_staff().is_err());
    assert!(session(Role::Student, Some("B1")).require_staff().is_err());

    assert!(session(Role::Teacher, Some("B1")).require_teacher_or_staff().is_ok());
    assert!(session(Role::Student, Some("B1")).require_teacher_or_staff().is_err());
}

#[test]
fn test_session_expires_after_a_day() {
    let issued = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    let session = Session::issued_at("U1", Role::Teacher, Some("B1".into()), issued);

    assert!(!session.is_expired(issued + Duration::hours(23)));
    assert!(!session.is_expired(issued + Duration::hours(24)));
    assert!(session.is_expired(issued + Duration::hours(24) + Duration::seconds(1)));
}

#[test]
fn test_from_branch_id() {
    assert_eq!(Scope::from_branch_id(None), Scope::Unrestricted);
    assert_eq!(Scope::from_branch_id(Some("B2")).branch_id(), Some("B2"));
}

#[test]
fn test_scope_json_shape() {
    let json = serde_json::to_value(Scope::branch("B1")).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "branch", "branch_id": "B1"}));

    let json = serde_json::to_value(Scope::Unrestricted).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "unrestricted"}));
}
