use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// Present and late both use up one of the course's sessions
    pub fn counts_as_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

/// One student's attendance for one class day of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub class_date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in_time: Option<NaiveTime>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Set once this class day has added to the enrollment's session count
    #[serde(default)]
    pub counted: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Attendance {
    pub fn is_same_class(&self, student_id: &str, course_id: &str, class_date: NaiveDate) -> bool {
        self.student_id == student_id && self.course_id == course_id && self.class_date == class_date
    }

    /// Whether this class day has already used up a session.
    /// Seeded rows carry no flag, so an attended status stands in for it.
    pub fn has_counted(&self) -> bool {
        self.counted || self.status.counts_as_attended()
    }
}

impl Record for Attendance {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A fully resolved attendance row ready to be stored
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub student_id: String,
    pub course_id: String,
    pub class_date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

/// Teacher's request to mark a student for a class
#[derive(Debug, Clone, Deserialize)]
pub struct MarkAttendance {
    pub student_id: String,
    pub course_id: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to today's school date
    #[serde(default)]
    pub class_date: Option<NaiveDate>,
}

impl MarkAttendance {
    pub fn new(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            status,
            notes: None,
            class_date: None,
        }
    }

    pub fn on(mut self, class_date: NaiveDate) -> Self {
        self.class_date = Some(class_date);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AttendancePatch {
    pub status: Option<AttendanceStatus>,
    pub check_in_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl AttendancePatch {
    pub fn apply_to(self, attendance: &mut Attendance) {
        if let Some(v) = self.status {
            attendance.status = v;
        }
        if let Some(v) = self.check_in_time {
            attendance.check_in_time = Some(v);
        }
        if let Some(v) = self.notes {
            attendance.notes = Some(v);
        }
    }
}
