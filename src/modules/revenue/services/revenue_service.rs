use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, Result, Scope};
use crate::modules::revenue::models::{NewRevenue, Revenue, RevenuePatch, RevenueQuery};
use crate::modules::revenue::repositories::RevenueRepository;

#[derive(Debug, Clone)]
pub struct RevenueService {
    revenue: RevenueRepository,
}

impl RevenueService {
    pub fn new(revenue: RevenueRepository) -> Self {
        Self { revenue }
    }

    /// Revenue rows in the inclusive date range, restricted to `scope`
    pub fn get_revenue(&self, query: &RevenueQuery, scope: &Scope) -> Result<Vec<Revenue>> {
        query.validate()?;
        let mut rows = self
            .revenue
            .list_where(&|r| query.contains(r.date) && scope.admits(Some(r.branch_id.as_str())))?;
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    pub fn get_revenue_record(&self, id: &str) -> Result<Revenue> {
        self.revenue
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Revenue"))
    }

    /// Record gross revenue; commission defaults to the branch's current rate
    pub fn record_revenue(&self, input: NewRevenue) -> Result<Revenue> {
        input.validate()?;
        let revenue = self.revenue.create(input)?;
        info!(
            revenue_id = %revenue.id,
            branch_id = %revenue.branch_id,
            amount = %revenue.amount,
            commission = %revenue.commission,
            net = %revenue.net_amount(),
            "Revenue recorded"
        );
        Ok(revenue)
    }

    /// Apply a patch; a new amount without a commission is re-split at the branch's current rate
    pub fn update_revenue(&self, id: &str, patch: RevenuePatch) -> Result<Revenue> {
        patch.validate()?;
        let revenue = self.revenue.update(id, patch)?;
        info!(
            revenue_id = %revenue.id,
            amount = %revenue.amount,
            commission = %revenue.commission,
            "Revenue updated"
        );
        Ok(revenue)
    }

    pub fn delete_revenue(&self, id: &str) -> Result<()> {
        self.revenue.delete(id)?;
        info!(revenue_id = %id, "Revenue deleted");
        Ok(())
    }
}
