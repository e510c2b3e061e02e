use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tutorhub::core::money;
use tutorhub::modules::branches::models::Branch;
use tutorhub::modules::reports::models::BranchRevenueAnalysis;

/// Property-based tests for the branch commission split
///
/// Validates:
/// - commission = total_revenue × commission_rate
/// - net_revenue + commission == total_revenue with no rounding drift
/// - commission never exceeds gross for rates in [0, 1]

fn branch(rate: Decimal) -> Branch {
    Branch {
        id: "B1".to_string(),
        name: "Siam".to_string(),
        address: String::new(),
        phone: String::new(),
        manager_name: None,
        commission_rate: rate,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_fifteen_percent_of_ten_thousand() {
    let analysis = BranchRevenueAnalysis::new(branch(dec!(0.15)), dec!(10000), 4);
    assert_eq!(analysis.commission, dec!(1500));
    assert_eq!(analysis.net_revenue, dec!(8500));
    assert_eq!(analysis.enrollment_count, 4);
    assert_eq!(money::format_baht(analysis.net_revenue), "฿8,500.00");
}

#[test]
fn test_zero_and_full_rates() {
    let none = BranchRevenueAnalysis::new(branch(Decimal::ZERO), dec!(999.99), 0);
    assert_eq!(none.commission, Decimal::ZERO);
    assert_eq!(none.net_revenue, dec!(999.99));

    let all = BranchRevenueAnalysis::new(branch(Decimal::ONE), dec!(999.99), 0);
    assert_eq!(all.commission, dec!(999.99));
    assert_eq!(all.net_revenue, Decimal::ZERO);
}

#[test]
fn test_branch_without_revenue() {
    let analysis = BranchRevenueAnalysis::new(branch(dec!(0.2)), Decimal::ZERO, 0);
    assert_eq!(analysis.commission, Decimal::ZERO);
    assert_eq!(analysis.net_revenue, Decimal::ZERO);
}

proptest! {
    #[test]
    fn test_split_is_exact(
        satang in 0i64..10_000_000_000i64,   // ฿0.00 to ฿100,000,000.00
        rate_basis_points in 0u32..=10_000u32 // 0% to 100%
    ) {
        let total = Decimal::new(satang, 2);
        let rate = Decimal::new(rate_basis_points as i64, 4);

        let analysis = BranchRevenueAnalysis::new(branch(rate), total, 0);

        prop_assert_eq!(analysis.commission, total * rate);
        prop_assert_eq!(analysis.net_revenue + analysis.commission, total);
        prop_assert!(analysis.commission <= total);
        prop_assert!(analysis.net_revenue >= Decimal::ZERO);
    }

    #[test]
    fn test_stored_commission_matches_split_at_same_rate(
        satang in 0i64..1_000_000_000i64,
        rate_basis_points in 0u32..=10_000u32
    ) {
        let amount = Decimal::new(satang, 2);
        let rate = Decimal::new(rate_basis_points as i64, 4);
        let b = branch(rate);

        // A row written at this rate carries the same commission the split recomputes
        prop_assert_eq!(b.commission_on(amount), BranchRevenueAnalysis::new(b.clone(), amount, 0).commission);
    }
}
