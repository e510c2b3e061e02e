use tracing::info;

use crate::core::{AppError, Result, Session};
use crate::modules::users::models::is_valid_phone;

use super::UserService;

/// Resolves a phone number into a dashboard session.
///
/// Credentials belong to the external identity provider; this only maps a
/// known phone to its role and branch.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserService,
}

impl AuthService {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    pub fn login(&self, phone: &str) -> Result<Session> {
        if !is_valid_phone(phone) {
            return Err(AppError::validation(format!(
                "Invalid phone number '{}': expected 10 digits starting with 0",
                phone
            )));
        }

        let user = self
            .users
            .find_by_phone(phone)?
            .ok_or_else(|| AppError::not_found("User"))?;

        info!(user_id = %user.id, role = %user.role, "Session issued");
        Ok(Session::new(user.id, user.role, user.branch_id))
    }
}
