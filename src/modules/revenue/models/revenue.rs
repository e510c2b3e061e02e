use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::store::Record;

/// Ledger row used by every revenue report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub id: String,
    pub branch_id: String,
    pub course_id: String,
    pub student_id: String,
    /// Gross amount received
    pub amount: Decimal,
    /// Commission fixed when the row was written; not tied to the branch's current rate
    pub commission: Decimal,
    pub date: NaiveDate,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Revenue {
    pub fn net_amount(&self) -> Decimal {
        self.amount - self.commission
    }
}

impl Record for Revenue {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRevenue {
    pub branch_id: String,
    pub course_id: String,
    pub student_id: String,
    pub amount: Decimal,
    /// Pre-computed commission; derived from the branch rate when absent
    #[serde(default)]
    pub commission: Option<Decimal>,
    pub date: NaiveDate,
}

impl NewRevenue {
    pub fn new(
        branch_id: impl Into<String>,
        course_id: impl Into<String>,
        student_id: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            branch_id: branch_id.into(),
            course_id: course_id.into(),
            student_id: student_id.into(),
            amount,
            commission: None,
            date,
        }
    }

    pub fn validate(&self) -> Result<()> {
        money::validate_amount("amount", self.amount).map_err(AppError::Validation)?;
        if let Some(commission) = self.commission {
            money::validate_amount("commission", commission).map_err(AppError::Validation)?;
        }
        Ok(())
    }
}

/// Partial revenue update.
///
/// Changing `amount` without an explicit `commission` re-derives the
/// commission from the branch's rate at the time of the update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RevenuePatch {
    pub amount: Option<Decimal>,
    pub commission: Option<Decimal>,
    pub date: Option<NaiveDate>,
}

impl RevenuePatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            money::validate_amount("amount", amount).map_err(AppError::Validation)?;
        }
        if let Some(commission) = self.commission {
            money::validate_amount("commission", commission).map_err(AppError::Validation)?;
        }
        Ok(())
    }
}

/// Inclusive date window for revenue listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RevenueQuery {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl RevenueQuery {
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(AppError::validation(format!(
                    "start_date ({}) must be before or equal to end_date ({})",
                    start, end
                )));
            }
        }
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}
