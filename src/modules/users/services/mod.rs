mod auth_service;
mod registration_service;
mod user_service;

pub use auth_service::AuthService;
pub use registration_service::{Registration, RegistrationForm, RegistrationService};
pub use user_service::UserService;
