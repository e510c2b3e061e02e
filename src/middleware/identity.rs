use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::core::{AppError, Role, Session};

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_ROLE_HEADER: &str = "X-User-Role";
pub const BRANCH_ID_HEADER: &str = "X-Branch-Id";

/// The identity provider in front of the API forwards the signed-in user in
/// headers. Nothing here checks credentials.
impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(session_from_headers(req))
    }
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn session_from_headers(req: &HttpRequest) -> Result<Session, AppError> {
    let user_id = header(req, USER_ID_HEADER)
        .ok_or_else(|| AppError::unauthorized(format!("Missing {} header", USER_ID_HEADER)))?;
    let role: Role = header(req, USER_ROLE_HEADER)
        .ok_or_else(|| AppError::unauthorized(format!("Missing {} header", USER_ROLE_HEADER)))?
        .parse()
        .map_err(AppError::Unauthorized)?;
    let branch_id = header(req, BRANCH_ID_HEADER).map(str::to_string);

    Ok(Session::new(user_id, role, branch_id))
}
