mod course;

pub use course::{Course, CoursePatch, NewCourse};
