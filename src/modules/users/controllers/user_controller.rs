use actix_web::{web, HttpResponse};

use crate::core::{AppError, Result, Role, Session};
use crate::database_service::DatabaseService;
use crate::modules::users::models::{NewUser, User, UserPatch};

/// Fetch a user of `role` that the session is allowed to see
fn scoped_user(db: &DatabaseService, session: &Session, id: &str, role: Role) -> Result<User> {
    let scope = session.scope()?;
    let entity = match role {
        Role::Teacher => "Teacher",
        _ => "Student",
    };
    match db.users.get_user(id) {
        Ok(user) if user.role == role && scope.admits(user.branch_id.as_deref()) => Ok(user),
        Ok(_) | Err(AppError::NotFound(_)) => Err(AppError::not_found(entity)),
        Err(e) => Err(e),
    }
}

/// Staff outside superadmin can only create users in their own branch
fn pin_branch(session: &Session, mut input: NewUser) -> Result<NewUser> {
    if let Some(branch_id) = session.scope()?.branch_id() {
        input.branch_id = Some(branch_id.to_string());
    }
    Ok(input)
}

// Students

pub async fn list_students(db: web::Data<DatabaseService>, session: Session) -> Result<HttpResponse> {
    let students = db.users.list_students(&session.scope()?)?;
    Ok(HttpResponse::Ok().json(students))
}

pub async fn get_student(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let student = scoped_user(&db, &session, &path, Role::Student)?;
    Ok(HttpResponse::Ok().json(student))
}

pub async fn create_student(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<NewUser>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let student = db.users.create_student(pin_branch(&session, body.into_inner())?)?;
    Ok(HttpResponse::Created().json(student))
}

pub async fn update_student(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<UserPatch>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_user(&db, &session, &path, Role::Student)?;
    let student = db.users.update_user(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(student))
}

pub async fn delete_student(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_user(&db, &session, &path, Role::Student)?;
    db.users.delete_user(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

// Teachers

pub async fn list_teachers(db: web::Data<DatabaseService>, session: Session) -> Result<HttpResponse> {
    let teachers = db.users.list_teachers(&session.scope()?)?;
    Ok(HttpResponse::Ok().json(teachers))
}

pub async fn get_teacher(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let teacher = scoped_user(&db, &session, &path, Role::Teacher)?;
    Ok(HttpResponse::Ok().json(teacher))
}

pub async fn list_teacher_courses(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    scoped_user(&db, &session, &path, Role::Teacher)?;
    let courses = db.courses.list_by_teacher(&path)?;
    Ok(HttpResponse::Ok().json(courses))
}

pub async fn create_teacher(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<NewUser>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let teacher = db.users.create_teacher(pin_branch(&session, body.into_inner())?)?;
    Ok(HttpResponse::Created().json(teacher))
}

pub async fn update_teacher(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<UserPatch>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_user(&db, &session, &path, Role::Teacher)?;
    let teacher = db.users.update_user(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(teacher))
}

pub async fn delete_teacher(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    scoped_user(&db, &session, &path, Role::Teacher)?;
    db.users.delete_user(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student)),
    )
    .service(
        web::scope("/teachers")
            .route("", web::get().to(list_teachers))
            .route("", web::post().to(create_teacher))
            .route("/{id}", web::get().to(get_teacher))
            .route("/{id}", web::put().to(update_teacher))
            .route("/{id}", web::delete().to(delete_teacher))
            .route("/{id}/courses", web::get().to(list_teacher_courses)),
    );
}
