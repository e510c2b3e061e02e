use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::revenue::models::{NewRevenue, Revenue, RevenuePatch};
use crate::store::{self, SharedStore};

/// Repository for revenue rows.
///
/// A row's commission is fixed when it is written: either supplied by the
/// caller or derived from the owning branch's rate at that moment. Later
/// rate changes do not touch stored rows.
#[derive(Debug, Clone)]
pub struct RevenueRepository {
    store: SharedStore,
}

impl RevenueRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Repository<Revenue> for RevenueRepository {
    type Create = NewRevenue;
    type Patch = RevenuePatch;

    fn create(&self, input: NewRevenue) -> Result<Revenue> {
        let mut db = self.store.write()?;
        let commission = match input.commission {
            Some(commission) => commission,
            None => db
                .branch(&input.branch_id)
                .ok_or_else(|| AppError::not_found("Branch"))?
                .commission_on(input.amount),
        };
        let now = store::now();

        let revenue = Revenue {
            id: store::new_id(),
            branch_id: input.branch_id,
            course_id: input.course_id,
            student_id: input.student_id,
            amount: input.amount,
            commission,
            date: input.date,
            created_at: now,
            updated_at: now,
        };

        db.revenue.push(revenue.clone());
        Ok(revenue)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Revenue>> {
        Ok(store::find_by_id(&self.store.read()?.revenue, id).cloned())
    }

    fn update(&self, id: &str, patch: RevenuePatch) -> Result<Revenue> {
        let mut db = self.store.write()?;

        let branch_id = store::find_by_id(&db.revenue, id)
            .map(|r| r.branch_id.clone())
            .ok_or_else(|| AppError::not_found("Revenue"))?;
        // A new amount without an explicit commission is re-split at the current rate
        let commission = match (patch.amount, patch.commission) {
            (_, Some(commission)) => Some(commission),
            (Some(amount), None) => Some(
                db.branch(&branch_id)
                    .ok_or_else(|| AppError::not_found("Branch"))?
                    .commission_on(amount),
            ),
            (None, None) => None,
        };

        let revenue = store::find_by_id_mut(&mut db.revenue, id)
            .ok_or_else(|| AppError::not_found("Revenue"))?;
        if let Some(amount) = patch.amount {
            revenue.amount = amount;
        }
        if let Some(commission) = commission {
            revenue.commission = commission;
        }
        if let Some(date) = patch.date {
            revenue.date = date;
        }
        revenue.updated_at = store::now();

        Ok(revenue.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.revenue, id) {
            Ok(())
        } else {
            Err(AppError::not_found("Revenue"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&Revenue) -> bool) -> Result<Vec<Revenue>> {
        Ok(self
            .store
            .read()?
            .revenue
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect())
    }
}
