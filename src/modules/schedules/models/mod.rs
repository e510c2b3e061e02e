mod schedule;

pub use schedule::{day_name, NewSchedule, Schedule, SchedulePatch};
