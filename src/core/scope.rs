use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

/// How long a login session stays valid
pub const SESSION_HOURS: i64 = 24;

/// Dashboard roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    Superadmin,
}

impl Role {
    /// Admins and superadmins may create, edit and delete records
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Teacher => write!(f, "teacher"),
            Role::Admin => write!(f, "admin"),
            Role::Superadmin => write!(f, "superadmin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::Superadmin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Branch restriction applied to a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "branch_id", rename_all = "snake_case")]
pub enum Scope {
    /// Sees every branch
    Unrestricted,
    /// Sees only records belonging to this branch
    Branch(String),
}

impl Scope {
    pub fn branch(branch_id: impl Into<String>) -> Self {
        Scope::Branch(branch_id.into())
    }

    /// Build a scope from an optional branch id, `None` meaning unrestricted
    pub fn from_branch_id(branch_id: Option<&str>) -> Self {
        match branch_id {
            Some(id) => Scope::Branch(id.to_string()),
            None => Scope::Unrestricted,
        }
    }

    pub fn branch_id(&self) -> Option<&str> {
        match self {
            Scope::Unrestricted => None,
            Scope::Branch(id) => Some(id.as_str()),
        }
    }

    /// Whether a record owned by `branch_id` is visible under this scope
    pub fn admits(&self, branch_id: Option<&str>) -> bool {
        match self {
            Scope::Unrestricted => true,
            Scope::Branch(scope_id) => branch_id == Some(scope_id.as_str()),
        }
    }
}

/// Identity handed to the core by the external auth provider.
///
/// The core never checks credentials; it trusts whatever session it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
    pub branch_id: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role, branch_id: Option<String>) -> Self {
        Self::issued_at(user_id, role, branch_id, Utc::now())
    }

    pub fn issued_at(
        user_id: impl Into<String>,
        role: Role,
        branch_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            branch_id,
            expires_at: now + Duration::hours(SESSION_HOURS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Scope every query issued on behalf of this session.
    ///
    /// Superadmins are unrestricted. Every other role is pinned to its own
    /// branch and is rejected when it has none.
    pub fn scope(&self) -> Result<Scope> {
        match (self.role, self.branch_id.as_deref()) {
            (Role::Superadmin, _) => Ok(Scope::Unrestricted),
            (_, Some(id)) if !id.is_empty() => Ok(Scope::branch(id)),
            (role, _) => Err(AppError::unauthorized(format!(
                "{} session has no branch",
                role
            ))),
        }
    }

    /// Teachers may record attendance alongside staff
    pub fn require_teacher_or_staff(&self) -> Result<()> {
        if self.role == Role::Teacher || self.role.is_staff() {
            Ok(())
        } else {
            Err(AppError::unauthorized(format!(
                "{} is not allowed to record attendance",
                self.role
            )))
        }
    }

    pub fn require_staff(&self) -> Result<()> {
        if self.role.is_staff() {
            Ok(())
        } else {
            Err(AppError::unauthorized(format!(
                "{} is not allowed to modify records",
                self.role
            )))
        }
    }
}
