use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// School choices and consent recorded when a student registers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPreference {
    pub id: String,
    pub student_id: String,
    #[serde(default)]
    pub preferred_school_1: Option<String>,
    #[serde(default)]
    pub preferred_school_2: Option<String>,
    #[serde(default)]
    pub pdpa_consent: bool,
    #[serde(default)]
    pub branch_id: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Record for StudentPreference {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStudentPreference {
    pub student_id: String,
    #[serde(default)]
    pub preferred_school_1: Option<String>,
    #[serde(default)]
    pub preferred_school_2: Option<String>,
    #[serde(default)]
    pub pdpa_consent: bool,
    #[serde(default)]
    pub branch_id: Option<String>,
}
