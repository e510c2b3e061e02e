mod auth_controller;
mod user_controller;

pub use auth_controller::LoginRequest;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    auth_controller::configure(cfg);
    user_controller::configure(cfg);
}
