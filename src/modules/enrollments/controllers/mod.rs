mod enrollment_controller;

pub use enrollment_controller::{configure, EnrollmentFilter, SessionsRequest};
