mod course_controller;

pub use course_controller::{configure, AssignTeacherRequest};
