//! Revenue filtering by inclusive date range and the branch revenue analysis.

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use helpers::{date, School};
use tutorhub::modules::revenue::models::{NewRevenue, RevenueQuery};
use tutorhub::Scope;

#[test]
fn test_rows_lie_inside_inclusive_range() {
    let school = School::new().with_revenue();
    let query = RevenueQuery::between(date(2024, 1, 10), date(2024, 1, 31));

    let rows = school
        .db
        .get_revenue(&query, &Scope::Unrestricted)
        .into_result()
        .unwrap();

    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert!(row.date >= date(2024, 1, 10) && row.date <= date(2024, 1, 31));
    }
}

#[test]
fn test_range_bounds_are_optional() {
    let school = School::new().with_revenue();

    let from_feb = RevenueQuery {
        start_date: Some(date(2024, 2, 1)),
        end_date: None,
    };
    let rows = school.db.get_revenue(&from_feb, &Scope::Unrestricted).into_result().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, dec!(8000));

    let all = school
        .db
        .get_revenue(&RevenueQuery::default(), &Scope::Unrestricted)
        .into_result()
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn test_inverted_range_is_a_validation_error() {
    let school = School::new().with_revenue();
    let query = RevenueQuery::between(date(2024, 2, 1), date(2024, 1, 1));

    let result = school.db.get_revenue(&query, &Scope::Unrestricted);
    assert!(result.data.is_none());
    assert!(result.error.unwrap().contains("start_date"));
}

#[test]
fn test_commission_stored_at_creation() {
    let school = School::new();
    let revenue = school
        .db
        .create_revenue(NewRevenue::new(
            school.b1.clone(),
            school.c1.clone(),
            school.s1.clone(),
            dec!(10000),
            date(2024, 3, 1),
        ))
        .into_result()
        .unwrap();

    assert_eq!(revenue.commission, dec!(1500));
    assert_eq!(revenue.net_amount(), dec!(8500));
}

#[test]
fn test_branch_analysis_split() {
    let school = School::new().with_enrollments().with_revenue();
    let analysis = school
        .db
        .get_branch_revenue_analysis(&Scope::Unrestricted)
        .into_result()
        .unwrap();
    assert_eq!(analysis.len(), 2);

    for entry in &analysis {
        assert_eq!(entry.commission, entry.total_revenue * entry.branch.commission_rate);
        assert_eq!(entry.net_revenue + entry.commission, entry.total_revenue);
    }

    let b1 = analysis.iter().find(|a| a.branch.id == school.b1).unwrap();
    assert_eq!(b1.total_revenue, dec!(15000));
    assert_eq!(b1.commission, dec!(2250));
    assert_eq!(b1.net_revenue, dec!(12750));
    assert_eq!(b1.enrollment_count, 2);

    let b2 = analysis.iter().find(|a| a.branch.id == school.b2).unwrap();
    assert_eq!(b2.total_revenue, dec!(8000));
    assert_eq!(b2.commission, dec!(800));
    assert_eq!(b2.enrollment_count, 1);
}

#[test]
fn test_branch_without_revenue_reports_zero() {
    let school = School::new();
    let analysis = school
        .db
        .get_branch_revenue_analysis(&Scope::branch(&school.b2))
        .into_result()
        .unwrap();

    assert_eq!(analysis.len(), 1);
    assert_eq!(analysis[0].total_revenue, Decimal::ZERO);
    assert_eq!(analysis[0].net_revenue, Decimal::ZERO);
    assert_eq!(analysis[0].enrollment_count, 0);
}

#[test]
fn test_revenue_report_totals() {
    let school = School::new().with_revenue();
    let query = RevenueQuery::between(date(2024, 1, 1), date(2024, 1, 31));

    let report = school
        .db
        .get_revenue_report(&query, &Scope::Unrestricted)
        .into_result()
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.total_revenue, dec!(15000));
    // Commission and net come from the branch analysis across all dates
    assert_eq!(report.total_commission, dec!(2250) + dec!(800));
    assert_eq!(report.net_revenue, dec!(12750) + dec!(7200));
}

#[test]
fn test_scoped_revenue_report() {
    let school = School::new().with_revenue();
    let report = school
        .db
        .get_revenue_report(&RevenueQuery::default(), &Scope::branch(&school.b2))
        .into_result()
        .unwrap();

    assert!(report.rows.iter().all(|r| r.branch_id == school.b2));
    assert_eq!(report.total_revenue, dec!(8000));
    assert_eq!(report.branches.len(), 1);
}
