use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{AppError, Result, Session};
use crate::database_service::DatabaseService;
use crate::modules::courses::models::{Course, CoursePatch, NewCourse};

#[derive(Debug, Deserialize)]
pub struct AssignTeacherRequest {
    pub teacher_id: String,
}

fn scoped_course(db: &DatabaseService, session: &Session, id: &str) -> Result<Course> {
    let course = db.courses.get_course(id)?;
    if session.scope()?.admits(Some(course.branch_id.as_str())) {
        Ok(course)
    } else {
        Err(AppError::not_found("Course"))
    }
}

pub async fn list_courses(db: web::Data<DatabaseService>, session: Session) -> Result<HttpResponse> {
    let courses = db.courses.list_courses(&session.scope()?)?;
    Ok(HttpResponse::Ok().json(courses))
}

pub async fn get_course(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let course = scoped_course(&db, &session, &path)?;
    Ok(HttpResponse::Ok().json(course))
}

pub async fn list_course_enrollments(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    scoped_course(&db, &session, &path)?;
    let enrollments = db.enrollments.list_by_course(&path)?;
    Ok(HttpResponse::Ok().json(enrollments))
}

pub async fn create_course(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<NewCourse>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let input = body.into_inner();
    if !session.scope()?.admits(Some(input.branch_id.as_str())) {
        return Err(AppError::unauthorized("Cannot create courses for another branch"));
    }
    let course = db.courses.create_course(input)?;
    Ok(HttpResponse::Created().json(course))
}

pub async fn update_course(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<CoursePatch>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_course(&db, &session, &path)?;
    let course = db.courses.update_course(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(course))
}

pub async fn assign_teacher(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<AssignTeacherRequest>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_course(&db, &session, &path)?;
    let course = db.courses.assign_teacher(&path, &body.teacher_id)?;
    Ok(HttpResponse::Ok().json(course))
}

pub async fn unassign_teacher(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_course(&db, &session, &path)?;
    let course = db.courses.unassign_teacher(&path)?;
    Ok(HttpResponse::Ok().json(course))
}

pub async fn delete_course(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_course(&db, &session, &path)?;
    db.courses.delete_course(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course))
            .route("/{id}/teacher", web::put().to(assign_teacher))
            .route("/{id}/teacher", web::delete().to(unassign_teacher))
            .route("/{id}/enrollments", web::get().to(list_course_enrollments)),
    );
}
