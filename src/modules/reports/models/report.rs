use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money;
use crate::modules::branches::models::Branch;
use crate::modules::revenue::models::{Revenue, RevenueQuery};

/// Dashboard headline counters for one scope
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total_students: usize,
    pub total_courses: usize,
    pub total_branches: usize,
    pub total_enrollments: usize,
    /// Sum of gross revenue amounts
    pub total_revenue: Decimal,
    /// Sum of the commission stored on each revenue row
    pub total_commission: Decimal,
    pub paid_enrollments: usize,
    pub pending_payments: usize,
}

impl Statistics {
    /// Field-by-field sum, used to roll branch statistics up
    pub fn merge(self, other: &Statistics) -> Statistics {
        Statistics {
            total_students: self.total_students + other.total_students,
            total_courses: self.total_courses + other.total_courses,
            total_branches: self.total_branches + other.total_branches,
            total_enrollments: self.total_enrollments + other.total_enrollments,
            total_revenue: self.total_revenue + other.total_revenue,
            total_commission: self.total_commission + other.total_commission,
            paid_enrollments: self.paid_enrollments + other.paid_enrollments,
            pending_payments: self.pending_payments + other.pending_payments,
        }
    }
}

/// Gross, commission and net revenue of one branch.
///
/// Commission here is recomputed from the branch's current rate, so it can
/// differ from the stored per-row commission summed in [`Statistics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchRevenueAnalysis {
    pub branch: Branch,
    pub total_revenue: Decimal,
    pub commission: Decimal,
    pub net_revenue: Decimal,
    /// Enrollments whose course belongs to the branch
    pub enrollment_count: usize,
    /// Rate as shown on the dashboard, e.g. `15.0%`
    pub commission_rate_label: String,
    /// Net revenue as shown on the dashboard, e.g. `฿8,500.00`
    pub net_revenue_display: String,
}

impl BranchRevenueAnalysis {
    pub fn new(branch: Branch, total_revenue: Decimal, enrollment_count: usize) -> Self {
        let commission = branch.commission_on(total_revenue);
        let net_revenue = total_revenue - commission;
        Self {
            commission_rate_label: money::format_rate(branch.commission_rate),
            net_revenue_display: money::format_baht(net_revenue),
            branch,
            total_revenue,
            commission,
            net_revenue,
            enrollment_count,
        }
    }
}

/// Revenue page payload: the filtered rows plus branch-level totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueReport {
    pub query: RevenueQueryEcho,
    pub rows: Vec<Revenue>,
    /// Gross total of `rows`
    pub total_revenue: Decimal,
    /// Summed from the branch analysis, which is not date filtered
    pub total_commission: Decimal,
    pub net_revenue: Decimal,
    pub branches: Vec<BranchRevenueAnalysis>,
}

/// Date bounds a report was generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenueQueryEcho {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

impl From<&RevenueQuery> for RevenueQueryEcho {
    fn from(query: &RevenueQuery) -> Self {
        Self {
            start_date: query.start_date,
            end_date: query.end_date,
        }
    }
}

impl RevenueReport {
    pub fn new(query: &RevenueQuery, rows: Vec<Revenue>, branches: Vec<BranchRevenueAnalysis>) -> Self {
        let total_revenue = rows.iter().map(|r| r.amount).sum();
        let total_commission = branches.iter().map(|b| b.commission).sum();
        let net_revenue = branches.iter().map(|b| b.net_revenue).sum();
        Self {
            query: query.into(),
            rows,
            total_revenue,
            total_commission,
            net_revenue,
            branches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
