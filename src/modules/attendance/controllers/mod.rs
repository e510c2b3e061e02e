mod attendance_controller;

pub use attendance_controller::{configure, AttendanceFilter};
