use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::store::Record;

/// Weekly time slot of a course. Branch and teacher come from the course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub course_id: String,
    /// 0 = Sunday ... 6 = Saturday
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Record for Schedule {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSchedule {
    pub course_id: String,
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl NewSchedule {
    pub fn validate(&self) -> Result<()> {
        validate_slot(self.day_of_week, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchedulePatch {
    pub course_id: Option<String>,
    pub day_of_week: Option<u8>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl SchedulePatch {
    /// Validate the slot that results from applying this patch to `current`
    pub fn validate_against(&self, current: &Schedule) -> Result<()> {
        validate_slot(
            self.day_of_week.unwrap_or(current.day_of_week),
            self.start_time.unwrap_or(current.start_time),
            self.end_time.unwrap_or(current.end_time),
        )
    }

    pub fn apply_to(self, schedule: &mut Schedule) {
        if let Some(v) = self.course_id {
            schedule.course_id = v;
        }
        if let Some(v) = self.day_of_week {
            schedule.day_of_week = v;
        }
        if let Some(v) = self.start_time {
            schedule.start_time = v;
        }
        if let Some(v) = self.end_time {
            schedule.end_time = v;
        }
    }
}

fn validate_slot(day_of_week: u8, start_time: NaiveTime, end_time: NaiveTime) -> Result<()> {
    if day_of_week > 6 {
        return Err(AppError::validation(format!(
            "day_of_week must be 0-6 (0 = Sunday), got {}",
            day_of_week
        )));
    }
    if start_time >= end_time {
        return Err(AppError::validation(format!(
            "start_time ({}) must be before end_time ({})",
            start_time, end_time
        )));
    }
    Ok(())
}

/// Thai day name for a `day_of_week` value, empty when out of range
pub fn day_name(day_of_week: u8) -> &'static str {
    const DAYS: [&str; 7] = ["อาทิตย์", "จันทร์", "อังคาร", "พุธ", "พฤหัสบดี", "ศุกร์", "เสาร์"];
    DAYS.get(day_of_week as usize).copied().unwrap_or("")
}
