use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Whether the course fee for an enrollment has been settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "active"),
            EnrollmentStatus::Completed => write!(f, "completed"),
            EnrollmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A student's registration into a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub enrollment_date: NaiveDate,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub status: EnrollmentStatus,
    /// Only ever grows, driven by attendance marking
    #[serde(default)]
    pub sessions_attended: u32,
    // Cached display names; empty when the referenced record was missing
    #[serde(default)]
    pub student_first_name: String,
    #[serde(default)]
    pub student_last_name: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}

impl Record for Enrollment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEnrollment {
    pub student_id: String,
    pub course_id: String,
    /// Defaults to today's school date
    #[serde(default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub status: EnrollmentStatus,
}

impl NewEnrollment {
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            enrollment_date: None,
            payment_status: PaymentStatus::Pending,
            status: EnrollmentStatus::Active,
        }
    }
}

/// Partial enrollment update. `sessions_attended` is not patchable here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnrollmentPatch {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
    pub payment_status: Option<PaymentStatus>,
    pub status: Option<EnrollmentStatus>,
}

impl EnrollmentPatch {
    pub fn apply_to(self, enrollment: &mut Enrollment) {
        if let Some(v) = self.student_id {
            enrollment.student_id = v;
        }
        if let Some(v) = self.course_id {
            enrollment.course_id = v;
        }
        if let Some(v) = self.enrollment_date {
            enrollment.enrollment_date = v;
        }
        if let Some(v) = self.payment_status {
            enrollment.payment_status = v;
        }
        if let Some(v) = self.status {
            enrollment.status = v;
        }
    }
}
