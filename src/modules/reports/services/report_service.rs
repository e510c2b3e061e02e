use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::core::{Result, Scope};
use crate::modules::branches::services::BranchService;
use crate::modules::courses::services::CourseService;
use crate::modules::enrollments::models::PaymentStatus;
use crate::modules::enrollments::services::EnrollmentService;
use crate::modules::reports::models::{BranchRevenueAnalysis, RevenueReport, Statistics};
use crate::modules::revenue::models::RevenueQuery;
use crate::modules::revenue::services::RevenueService;
use crate::modules::users::services::UserService;

/// Read-only aggregation over scoped records
#[derive(Debug, Clone)]
pub struct ReportService {
    users: UserService,
    branches: BranchService,
    courses: CourseService,
    enrollments: EnrollmentService,
    revenue: RevenueService,
}

impl ReportService {
    pub fn new(
        users: UserService,
        branches: BranchService,
        courses: CourseService,
        enrollments: EnrollmentService,
        revenue: RevenueService,
    ) -> Self {
        Self {
            users,
            branches,
            courses,
            enrollments,
            revenue,
        }
    }

    /// Headline counters. `total_commission` sums each row's stored commission.
    pub fn get_statistics(&self, scope: &Scope) -> Result<Statistics> {
        let students = self.users.list_students(scope)?;
        let courses = self.courses.list_courses(scope)?;
        let branches = self.branches.list_branches(scope)?;
        let enrollments = self.enrollments.list_enrollments(scope)?;
        let revenue = self.revenue.get_revenue(&RevenueQuery::default(), scope)?;

        let stats = Statistics {
            total_students: students.len(),
            total_courses: courses.len(),
            total_branches: branches.len(),
            total_enrollments: enrollments.len(),
            total_revenue: revenue.iter().map(|r| r.amount).sum(),
            total_commission: revenue.iter().map(|r| r.commission).sum(),
            paid_enrollments: enrollments
                .iter()
                .filter(|e| e.payment_status == PaymentStatus::Paid)
                .count(),
            pending_payments: enrollments
                .iter()
                .filter(|e| e.payment_status == PaymentStatus::Pending)
                .count(),
        };

        debug!(scope = ?scope, students = stats.total_students, revenue = %stats.total_revenue, "Statistics computed");
        Ok(stats)
    }

    /// Per-branch gross, commission at the current rate, and net
    pub fn get_branch_revenue_analysis(&self, scope: &Scope) -> Result<Vec<BranchRevenueAnalysis>> {
        let branches = self.branches.list_branches(scope)?;
        let revenue = self.revenue.get_revenue(&RevenueQuery::default(), scope)?;
        let course_branch: HashMap<String, String> = self
            .courses
            .list_courses(scope)?
            .into_iter()
            .map(|c| (c.id, c.branch_id))
            .collect();
        let enrollments = self.enrollments.list_enrollments(scope)?;

        let mut gross: HashMap<&str, Decimal> = HashMap::new();
        for row in &revenue {
            *gross.entry(row.branch_id.as_str()).or_default() += row.amount;
        }
        let mut enrolled: HashMap<&str, usize> = HashMap::new();
        for enrollment in &enrollments {
            if let Some(branch_id) = course_branch.get(&enrollment.course_id) {
                *enrolled.entry(branch_id.as_str()).or_default() += 1;
            }
        }

        let analysis = branches
            .into_iter()
            .map(|branch| {
                let total = gross.get(branch.id.as_str()).copied().unwrap_or_default();
                let count = enrolled.get(branch.id.as_str()).copied().unwrap_or_default();
                BranchRevenueAnalysis::new(branch, total, count)
            })
            .collect::<Vec<_>>();

        info!(scope = ?scope, branches = analysis.len(), "Branch revenue analysis generated");
        Ok(analysis)
    }

    /// Revenue rows for the date range together with branch-level totals
    pub fn get_revenue_report(&self, query: &RevenueQuery, scope: &Scope) -> Result<RevenueReport> {
        let rows = self.revenue.get_revenue(query, scope)?;
        let branches = self.get_branch_revenue_analysis(scope)?;
        let report = RevenueReport::new(query, rows, branches);

        if report.is_empty() {
            info!(
                start = ?query.start_date,
                end = ?query.end_date,
                "Revenue report has no rows in range"
            );
        }
        Ok(report)
    }
}
