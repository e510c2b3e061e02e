use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{AppError, Result, Role, Scope, Session};
use crate::database_service::DatabaseService;
use crate::modules::enrollments::models::{EnrollmentPatch, NewEnrollment};

#[derive(Debug, Default, Deserialize)]
pub struct EnrollmentFilter {
    pub student_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionsRequest {
    pub sessions_attended: u32,
}

/// Reject enrollments whose course lies outside the session's branch.
/// Orphans (course deleted) are only reachable by superadmins.
fn ensure_in_scope(db: &DatabaseService, session: &Session, id: &str) -> Result<()> {
    let scope = session.scope()?;
    if scope == Scope::Unrestricted {
        return db.enrollments.get_enrollment(id).map(|_| ());
    }
    match db.enrollments.course_of(id) {
        Ok(course) if scope.admits(Some(course.branch_id.as_str())) => Ok(()),
        Ok(_) | Err(AppError::NotFound(_)) => Err(AppError::not_found("Enrollment")),
        Err(e) => Err(e),
    }
}

/// GET /enrollments - scoped list; students only ever see their own
pub async fn list_enrollments(
    db: web::Data<DatabaseService>,
    session: Session,
    query: web::Query<EnrollmentFilter>,
) -> Result<HttpResponse> {
    let scope = session.scope()?;
    let student_id = match session.role {
        Role::Student => Some(session.user_id.as_str()),
        _ => query.student_id.as_deref(),
    };

    let mut enrollments = db.enrollments.list_enrollments(&scope)?;
    if let Some(student_id) = student_id {
        enrollments.retain(|e| e.student_id == student_id);
    }
    Ok(HttpResponse::Ok().json(enrollments))
}

pub async fn get_enrollment_course(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let course = db.enrollments.course_of(&path)?;
    if !session.scope()?.admits(Some(course.branch_id.as_str())) {
        return Err(AppError::not_found("Enrollment"));
    }
    Ok(HttpResponse::Ok().json(course))
}

pub async fn create_enrollment(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<NewEnrollment>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let input = body.into_inner();
    let course = db.courses.get_course(&input.course_id)?;
    if !session.scope()?.admits(Some(course.branch_id.as_str())) {
        return Err(AppError::not_found("Course"));
    }
    let enrollment = db.enrollments.enroll(input)?;
    Ok(HttpResponse::Created().json(enrollment))
}

pub async fn update_enrollment(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<EnrollmentPatch>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    ensure_in_scope(&db, &session, &path)?;
    let enrollment = db.enrollments.update_enrollment(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(enrollment))
}

pub async fn update_sessions(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<SessionsRequest>,
) -> Result<HttpResponse> {
    session.require_teacher_or_staff()?;
    ensure_in_scope(&db, &session, &path)?;
    let enrollment = db
        .enrollments
        .set_sessions_attended(&path, body.sessions_attended)?;
    Ok(HttpResponse::Ok().json(enrollment))
}

pub async fn delete_enrollment(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    ensure_in_scope(&db, &session, &path)?;
    db.enrollments.delete_enrollment(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/enrollments")
            .route("", web::get().to(list_enrollments))
            .route("", web::post().to(create_enrollment))
            .route("/{id}", web::put().to(update_enrollment))
            .route("/{id}", web::delete().to(delete_enrollment))
            .route("/{id}/course", web::get().to(get_enrollment_course))
            .route("/{id}/sessions", web::put().to(update_sessions)),
    );
}
