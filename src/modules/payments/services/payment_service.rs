use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, Result, Scope};
use crate::modules::enrollments::services::EnrollmentService;
use crate::modules::payments::models::{NewPayment, Payment, PaymentPatch};
use crate::modules::payments::repositories::PaymentRepository;

#[derive(Debug, Clone)]
pub struct PaymentService {
    payments: PaymentRepository,
    enrollments: EnrollmentService,
}

impl PaymentService {
    pub fn new(payments: PaymentRepository, enrollments: EnrollmentService) -> Self {
        Self {
            payments,
            enrollments,
        }
    }

    /// Payments reached through enrollment, then course, then branch
    pub fn list_payments(&self, scope: &Scope) -> Result<Vec<Payment>> {
        match scope {
            Scope::Unrestricted => self.payments.list(),
            Scope::Branch(_) => {
                let enrollment_ids = self.enrollments.enrollment_ids(scope)?;
                self.payments
                    .list_where(&|p| enrollment_ids.contains(&p.enrollment_id))
            }
        }
    }

    pub fn list_by_enrollment(&self, enrollment_id: &str) -> Result<Vec<Payment>> {
        self.payments.list_by_enrollment(enrollment_id)
    }

    pub fn get_payment(&self, id: &str) -> Result<Payment> {
        self.payments
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Payment"))
    }

    pub fn create_payment(&self, input: NewPayment) -> Result<Payment> {
        input.validate()?;
        self.enrollments.get_enrollment(&input.enrollment_id)?;

        let payment = self.payments.create(input)?;
        info!(
            payment_id = %payment.id,
            enrollment_id = %payment.enrollment_id,
            amount = %payment.amount,
            "Payment recorded"
        );
        Ok(payment)
    }

    pub fn update_payment(&self, id: &str, patch: PaymentPatch) -> Result<Payment> {
        patch.validate()?;
        self.payments.update(id, patch)
    }

    pub fn delete_payment(&self, id: &str) -> Result<()> {
        self.payments.delete(id)
    }
}
