use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Card,
}

/// Lifecycle of a single payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentState {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// Money received against an enrollment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub enrollment_id: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: PaymentState,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Record for Payment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPayment {
    pub enrollment_id: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: PaymentState,
}

impl NewPayment {
    pub fn validate(&self) -> Result<()> {
        money::validate_amount("amount", self.amount).map_err(AppError::Validation)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentPatch {
    pub amount: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<PaymentState>,
}

impl PaymentPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            money::validate_amount("amount", amount).map_err(AppError::Validation)?;
        }
        Ok(())
    }

    pub fn apply_to(self, payment: &mut Payment) {
        if let Some(v) = self.amount {
            payment.amount = v;
        }
        if let Some(v) = self.payment_date {
            payment.payment_date = v;
        }
        if let Some(v) = self.payment_method {
            payment.payment_method = v;
        }
        if let Some(v) = self.status {
            payment.status = v;
        }
    }
}
