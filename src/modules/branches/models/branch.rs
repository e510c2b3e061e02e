use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::store::Record;

/// A physical tutoring centre; the unit every query is scoped by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub manager_name: Option<String>,
    /// Fraction of gross revenue retained as commission, in `[0, 1]`
    pub commission_rate: Decimal,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Branch {
    /// Commission owed on `amount` at the branch's current rate
    pub fn commission_on(&self, amount: Decimal) -> Decimal {
        amount * self.commission_rate
    }
}

impl Record for Branch {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBranch {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub manager_name: Option<String>,
    pub commission_rate: Decimal,
}

impl NewBranch {
    pub fn new(name: impl Into<String>, commission_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            phone: String::new(),
            manager_name: None,
            commission_rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Branch name is required"));
        }
        money::validate_rate("commission_rate", self.commission_rate).map_err(AppError::Validation)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BranchPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_name: Option<String>,
    pub commission_rate: Option<Decimal>,
}

impl BranchPatch {
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::validation("Branch name cannot be blank"));
        }
        if let Some(rate) = self.commission_rate {
            money::validate_rate("commission_rate", rate).map_err(AppError::Validation)?;
        }
        Ok(())
    }

    pub fn apply_to(self, branch: &mut Branch) {
        if let Some(v) = self.name {
            branch.name = v;
        }
        if let Some(v) = self.address {
            branch.address = v;
        }
        if let Some(v) = self.phone {
            branch.phone = v;
        }
        if let Some(v) = self.manager_name {
            branch.manager_name = Some(v);
        }
        if let Some(v) = self.commission_rate {
            branch.commission_rate = v;
        }
    }
}
