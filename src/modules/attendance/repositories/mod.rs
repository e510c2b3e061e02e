mod attendance_repository;

pub use attendance_repository::AttendanceRepository;
