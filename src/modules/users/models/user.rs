use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result, Role};
use crate::store::Record;

/// Thai mobile/landline numbers: a leading zero followed by nine digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{9}$").expect("valid phone pattern"));

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Any person who can log in: student, teacher, admin or superadmin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Login key, unique across all users
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    /// `None` only for superadmins
    #[serde(default)]
    pub branch_id: Option<String>,

    // Guardian contact, meaningful for students only
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_surname: Option<String>,
    #[serde(default)]
    pub guardian_occupation: Option<String>,
    #[serde(default)]
    pub guardian_line_id: Option<String>,

    /// Cached name of `branch_id`, resolved on write
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields supplied when creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub branch_id: Option<String>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_surname: Option<String>,
    #[serde(default)]
    pub guardian_occupation: Option<String>,
    #[serde(default)]
    pub guardian_line_id: Option<String>,
}

impl NewUser {
    /// Minimal student record; remaining fields can be filled with struct update syntax
    pub fn student(
        phone: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        branch_id: Option<String>,
    ) -> Self {
        Self::with_role(Role::Student, phone, first_name, last_name, branch_id)
    }

    pub fn teacher(
        phone: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        branch_id: Option<String>,
    ) -> Self {
        Self::with_role(Role::Teacher, phone, first_name, last_name, branch_id)
    }

    pub fn with_role(
        role: Role,
        phone: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        branch_id: Option<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            nickname: None,
            email: None,
            role,
            branch_id,
            guardian_name: None,
            guardian_surname: None,
            guardian_occupation: None,
            guardian_line_id: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_phone(&self.phone) {
            return Err(AppError::validation(format!(
                "Invalid phone number '{}': expected 10 digits starting with 0",
                self.phone
            )));
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }
        Ok(())
    }
}

/// Partial user update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub branch_id: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_surname: Option<String>,
    pub guardian_occupation: Option<String>,
    pub guardian_line_id: Option<String>,
}

impl UserPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(phone) = &self.phone {
            if !is_valid_phone(phone) {
                return Err(AppError::validation(format!(
                    "Invalid phone number '{}': expected 10 digits starting with 0",
                    phone
                )));
            }
        }
        let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());
        if blank(&self.first_name) || blank(&self.last_name) {
            return Err(AppError::validation("First and last name cannot be blank"));
        }
        Ok(())
    }

    /// Merge into `user`; denormalized names are the repository's concern
    pub fn apply_to(self, user: &mut User) {
        if let Some(v) = self.phone {
            user.phone = v;
        }
        if let Some(v) = self.first_name {
            user.first_name = v;
        }
        if let Some(v) = self.last_name {
            user.last_name = v;
        }
        if let Some(v) = self.nickname {
            user.nickname = Some(v);
        }
        if let Some(v) = self.email {
            user.email = Some(v);
        }
        if let Some(v) = self.role {
            user.role = v;
        }
        if let Some(v) = self.branch_id {
            user.branch_id = Some(v);
        }
        if let Some(v) = self.guardian_name {
            user.guardian_name = Some(v);
        }
        if let Some(v) = self.guardian_surname {
            user.guardian_surname = Some(v);
        }
        if let Some(v) = self.guardian_occupation {
            user.guardian_occupation = Some(v);
        }
        if let Some(v) = self.guardian_line_id {
            user.guardian_line_id = Some(v);
        }
    }
}
