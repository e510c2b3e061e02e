mod enrollment;

pub use enrollment::{Enrollment, EnrollmentPatch, EnrollmentStatus, NewEnrollment, PaymentStatus};
