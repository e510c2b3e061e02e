use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::Result;
use crate::database_service::DatabaseService;
use crate::modules::users::services::RegistrationForm;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
}

/// POST /auth/login
pub async fn login(
    db: web::Data<DatabaseService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let session = db.auth.login(&body.phone)?;
    Ok(HttpResponse::Ok().json(session))
}

/// POST /auth/register - public self-service sign-up
pub async fn register(
    db: web::Data<DatabaseService>,
    body: web::Json<RegistrationForm>,
) -> Result<HttpResponse> {
    let registration = db.registration.register_student(body.into_inner())?;
    Ok(HttpResponse::Created().json(registration))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/register", web::post().to(register)),
    );
}
