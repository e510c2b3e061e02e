use actix_web::{web, HttpResponse};

use crate::core::{AppError, Result, Scope, Session};
use crate::database_service::DatabaseService;
use crate::modules::payments::models::{NewPayment, PaymentPatch};

/// Payments may only be written against enrollments in the session's branch
fn ensure_enrollment_in_scope(db: &DatabaseService, session: &Session, enrollment_id: &str) -> Result<()> {
    let scope = session.scope()?;
    if scope == Scope::Unrestricted || db.enrollments.enrollment_ids(&scope)?.contains(enrollment_id) {
        Ok(())
    } else {
        Err(AppError::not_found("Enrollment"))
    }
}

pub async fn list_payments(db: web::Data<DatabaseService>, session: Session) -> Result<HttpResponse> {
    session.require_staff()?;
    let payments = db.payments.list_payments(&session.scope()?)?;
    Ok(HttpResponse::Ok().json(payments))
}

pub async fn create_payment(
    db: web::Data<DatabaseService>,
    session: Session,
    body: web::Json<NewPayment>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    ensure_enrollment_in_scope(&db, &session, &body.enrollment_id)?;
    let payment = db.payments.create_payment(body.into_inner())?;
    Ok(HttpResponse::Created().json(payment))
}

pub async fn update_payment(
    db: web::Data<DatabaseService>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<PaymentPatch>,
) -> Result<HttpResponse> {
    session.require_staff()?;
    let current = db.payments.get_payment(&path)?;
    ensure_enrollment_in_scope(&db, &session, &current.enrollment_id)?;
    let payment = db.payments.update_payment(&path, body.into_inner())?;
    Ok(HttpResponse::Ok().json(payment))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("", web::get().to(list_payments))
            .route("", web::post().to(create_payment))
            .route("/{id}", web::put().to(update_payment)),
    );
}
