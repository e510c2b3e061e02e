use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::store::Record;

/// A course offered by one branch, optionally taught by an assigned teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub grade_level: String,
    pub total_sessions: u32,
    pub price: Decimal,
    pub branch_id: String,
    /// Unassigned until an admin assigns a teacher
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Record for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub grade_level: String,
    pub total_sessions: u32,
    pub price: Decimal,
    pub branch_id: String,
    #[serde(default)]
    pub teacher_id: Option<String>,
}

impl NewCourse {
    pub fn new(
        name: impl Into<String>,
        branch_id: impl Into<String>,
        total_sessions: u32,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            grade_level: String::new(),
            total_sessions,
            price,
            branch_id: branch_id.into(),
            teacher_id: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Course name is required"));
        }
        validate_sessions(self.total_sessions)?;
        money::validate_amount("price", self.price).map_err(AppError::Validation)
    }
}

/// Partial course update.
///
/// Unassigning a teacher is a separate operation because `None` here means
/// "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub grade_level: Option<String>,
    pub total_sessions: Option<u32>,
    pub price: Option<Decimal>,
    pub branch_id: Option<String>,
    pub teacher_id: Option<String>,
}

impl CoursePatch {
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::validation("Course name cannot be blank"));
        }
        if let Some(sessions) = self.total_sessions {
            validate_sessions(sessions)?;
        }
        if let Some(price) = self.price {
            money::validate_amount("price", price).map_err(AppError::Validation)?;
        }
        Ok(())
    }

    pub fn apply_to(self, course: &mut Course) {
        if let Some(v) = self.name {
            course.name = v;
        }
        if let Some(v) = self.description {
            course.description = v;
        }
        if let Some(v) = self.grade_level {
            course.grade_level = v;
        }
        if let Some(v) = self.total_sessions {
            course.total_sessions = v;
        }
        if let Some(v) = self.price {
            course.price = v;
        }
        if let Some(v) = self.branch_id {
            course.branch_id = v;
        }
        if let Some(v) = self.teacher_id {
            course.teacher_id = Some(v);
        }
    }
}

fn validate_sessions(total_sessions: u32) -> Result<()> {
    if total_sessions == 0 {
        return Err(AppError::validation("total_sessions must be at least 1"));
    }
    Ok(())
}
