use actix_web::{web, HttpResponse};

use crate::core::{AppError, Result, Session};
use crate::database_service::DatabaseService;
use crate::modules::branches::models::{BranchPatch, NewBranch};

/// Only superadmins manage the branch list itself
fn require_superadmin(session: &Session) -> Result<()> {
    session.require_staff()?;
    if session.scope()?.branch_id().is_some() {
        return Err(AppError::unauthorized("Only superadmins may add or remove branches"));
    }
    Ok(())
}

pub async fn list_branches(db: web::Data<DatabaseService>, session: Session) -> Result<HttpResponse> {
    let branches = db.branches.list_branches(&session.scope()?)?;
    Ok(HttpResponse::Ok().json(branches))
}

pub async fn get_branch(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    if !session.scope()?.admits(Some(path.as_str())) {
        return Err(AppError::not_found("Branch"));
    }
    let branch = db.branches.get_branch(&path)?;
    Ok(HttpResponse::Ok().json(branch))
}

pub async fn create_branch(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<NewBranch>,
) -> Result<HttpResponse> {
    require_superadmin(&session)?;
    let branch = db.branches.create_branch(body.into_inner())?;
    Ok(HttpResponse::Created().json(branch))
}

pub async fn update_branch(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<BranchPatch>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    if !session.scope()?.admits(Some(path.as_str())) {
        return Err(AppError::not_found("Branch"));
    }
    let branch = db.branches.update_branch(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(branch))
}

pub async fn delete_branch(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    require_superadmin(&session)?;
    db.branches.delete_branch(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/branches")
            .route("", web::get().to(list_branches))
            .route("", web::post().to(create_branch))
            .route("/{id}", web::get().to(get_branch))
            .route("/{id}", web::put().to(update_branch))
            .route("/{id}", web::delete().to(delete_branch)),
    );
}
