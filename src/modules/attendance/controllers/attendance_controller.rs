use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{AppError, Result, Role, Session};
use crate::database_service::DatabaseService;
use crate::modules::attendance::models::{AttendancePatch, MarkAttendance};

#[derive(Debug, Default, Deserialize)]
pub struct AttendanceFilter {
    pub course_id: Option<String>,
    pub student_id: Option<String>,
}

/// The course being marked must belong to the session's branch
fn ensure_course_in_scope(db: &DatabaseService, session: &Session, course_id: &str) -> Result<()> {
    let course = db.courses.get_course(course_id)?;
    if session.scope()?.admits(Some(course.branch_id.as_str())) {
        Ok(())
    } else {
        Err(AppError::not_found("Course"))
    }
}

pub async fn list_attendance(
    db: web::Data<DatabaseService>,
    session: Session,
    query: web::Query<AttendanceFilter>,
) -> Result<HttpResponse> {
    let student_id = match session.role {
        Role::Student => Some(session.user_id.as_str()),
        _ => query.student_id.as_deref(),
    };
    let rows = db.attendance.list_attendance(
        query.course_id.as_deref(),
        student_id,
        &session.scope()?,
    )?;
    Ok(HttpResponse::Ok().json(rows))
}

/// POST /attendance - mark a student for a class day
pub async fn mark_attendance(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<MarkAttendance>,
) -> Result<HttpResponse> {
    session.require_teacher_or_staff()?;
    ensure_course_in_scope(&db, &session, &body.course_id)?;
    let mark = db.attendance.mark_attendance(body.into_inner())?;
    Ok(HttpResponse::Ok().json(mark))
}

pub async fn update_attendance(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<AttendancePatch>,
) -> Result<HttpResponse> {
    session.require_teacher_or_staff()?;
    let current = db.attendance.get_attendance(&path)?;
    ensure_course_in_scope(&db, &session, &current.course_id)?;
    let attendance = db.attendance.update_attendance(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(attendance))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendance")
            .route("", web::get().to(list_attendance))
            .route("", web::post().to(mark_attendance))
            .route("/{id}", web::put().to(update_attendance)),
    );
}
