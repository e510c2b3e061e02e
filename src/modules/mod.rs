pub mod attendance;
pub mod branches;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod payments;
pub mod reports;
pub mod revenue;
pub mod schedules;
pub mod users;

/// Register every module's routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health::controllers::configure(cfg);
    users::controllers::configure(cfg);
    branches::controllers::configure(cfg);
    courses::controllers::configure(cfg);
    enrollments::controllers::configure(cfg);
    attendance::controllers::configure(cfg);
    payments::controllers::configure(cfg);
    schedules::controllers::configure(cfg);
    reports::controllers::configure(cfg);
}
