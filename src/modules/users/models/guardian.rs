use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::store::Record;

use super::is_valid_phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardianType {
    Father,
    Mother,
}

/// Parent contact captured at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guardian {
    pub id: String,
    pub student_id: String,
    pub guardian_type: GuardianType,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub workplace: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub line_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Record for Guardian {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewGuardian {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub workplace: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub line_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewGuardian {
    /// A guardian phone is optional but must be well formed when given
    pub fn validate(&self) -> Result<()> {
        match self.phone.as_deref() {
            Some(phone) if !phone.is_empty() && !is_valid_phone(phone) => Err(
                AppError::validation(format!("Invalid guardian phone number '{}'", phone)),
            ),
            _ => Ok(()),
        }
    }
}
