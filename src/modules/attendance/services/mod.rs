mod attendance_service;

pub use attendance_service::{AttendanceMark, AttendanceService};
