use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result, Role, Session};
use crate::database_service::DatabaseService;
use crate::modules::schedules::models::{day_name, NewSchedule, Schedule, SchedulePatch};

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleFilter {
    pub teacher_id: Option<String>,
}

/// Schedule row with its weekday spelled out for display
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub day_name: &'static str,
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            day_name: day_name(schedule.day_of_week),
            schedule,
        }
    }
}

fn ensure_course_in_scope(db: &DatabaseService, session: &Session, course_id: &str) -> Result<()> {
    let course = db.courses.get_course(course_id)?;
    if session.scope()?.admits(Some(course.branch_id.as_str())) {
        Ok(())
    } else {
        Err(AppError::not_found("Course"))
    }
}

/// GET /schedules - teachers see their own timetable
pub async fn list_schedules(
    db: web::Data<DatabaseService>,
    session: Session,
    query: web::Query<ScheduleFilter>,
) -> Result<HttpResponse> {
    let teacher_id = match session.role {
        Role::Teacher => Some(session.user_id.as_str()),
        _ => query.teacher_id.as_deref(),
    };
    let schedules: Vec<ScheduleResponse> = db
        .schedules
        .list_schedules(&session.scope()?, teacher_id)?
        .into_iter()
        .map(ScheduleResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(schedules))
}

pub async fn create_schedule(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<NewSchedule>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    ensure_course_in_scope(&db, &session, &body.course_id)?;
    let schedule = db.schedules.create_schedule(body.into_inner())?;
    Ok(HttpResponse::Created().json(ScheduleResponse::from(schedule)))
}

pub async fn update_schedule(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<SchedulePatch>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let current = db.schedules.get_schedule(&path)?;
    ensure_course_in_scope(&db, &session, &current.course_id)?;
    if let Some(course_id) = body.course_id.as_deref() {
        ensure_course_in_scope(&db, &session, course_id)?;
    }
    let schedule = db.schedules.update_schedule(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(ScheduleResponse::from(schedule)))
}

pub async fn delete_schedule(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let current = db.schedules.get_schedule(&path)?;
    ensure_course_in_scope(&db, &session, &current.course_id)?;
    db.schedules.delete_schedule(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/schedules")
            .route("", web::get().to(list_schedules))
            .route("", web::post().to(create_schedule))
            .route("/{id}", web::put().to(update_schedule))
            .route("/{id}", web::delete().to(delete_schedule)),
    );
}
