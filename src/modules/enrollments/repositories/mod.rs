mod enrollment_repository;

pub use enrollment_repository::{EnrollmentRepository, EnrollmentRow};
