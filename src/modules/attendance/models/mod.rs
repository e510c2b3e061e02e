mod attendance;

pub use attendance::{Attendance, AttendancePatch, AttendanceStatus, MarkAttendance, NewAttendance};
