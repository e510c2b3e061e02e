use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::payments::models::{NewPayment, Payment, PaymentPatch};
use crate::store::{self, SharedStore};

#[derive(Debug, Clone)]
pub struct PaymentRepository {
    store: SharedStore,
}

impl PaymentRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list_by_enrollment(&self, enrollment_id: &str) -> Result<Vec<Payment>> {
        self.list_where(&|p| p.enrollment_id == enrollment_id)
    }
}

impl Repository<Payment> for PaymentRepository {
    type Create = NewPayment;
    type Patch = PaymentPatch;

    fn create(&self, input: NewPayment) -> Result<Payment> {
        let now = store::now();
        let payment = Payment {
            id: store::new_id(),
            enrollment_id: input.enrollment_id,
            amount: input.amount,
            payment_date: input.payment_date,
            payment_method: input.payment_method,
            status: input.status,
            created_at: now,
            updated_at: now,
        };

        self.store.write()?.payments.push(payment.clone());
        Ok(payment)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Payment>> {
        Ok(store::find_by_id(&self.store.read()?.payments, id).cloned())
    }

    fn update(&self, id: &str, patch: PaymentPatch) -> Result<Payment> {
        let mut db = self.store.write()?;
        let payment = store::find_by_id_mut(&mut db.payments, id)
            .ok_or_else(|| AppError::not_found("Payment"))?;
        patch.apply_to(payment);
        payment.updated_at = store::now();

        Ok(payment.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.payments, id) {
            Ok(())
        } else {
            Err(AppError::not_found("Payment"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&Payment) -> bool) -> Result<Vec<Payment>> {
        Ok(self
            .store
            .read()?
            .payments
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect())
    }
}
