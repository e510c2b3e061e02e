//! Dashboard statistics and the two commission paths.
//!
//! Statistics sum the commission stored on each revenue row. The branch
//! analysis recomputes commission from the branch's current rate. After a
//! rate change the two disagree; these tests pin that behavior down.

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal_macros::dec;

use helpers::School;
use tutorhub::modules::branches::models::BranchPatch;
use tutorhub::modules::reports::models::Statistics;
use tutorhub::Scope;

#[test]
fn test_scoped_counts() {
    let school = School::new().with_enrollments().with_revenue();
    let stats = school
        .db
        .get_statistics(&Scope::branch(&school.b1))
        .into_result()
        .unwrap();

    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.total_courses, 1);
    assert_eq!(stats.total_branches, 1);
    assert_eq!(stats.total_enrollments, 2);
    assert_eq!(stats.total_revenue, dec!(15000));
    assert_eq!(stats.total_commission, dec!(2250));
    assert_eq!(stats.paid_enrollments, 1);
    assert_eq!(stats.pending_payments, 1);
}

#[test]
fn test_unscoped_equals_sum_of_branches() {
    let school = School::new().with_enrollments().with_revenue();

    let all = school.db.get_statistics(&Scope::Unrestricted).into_result().unwrap();
    let summed = [&school.b1, &school.b2]
        .into_iter()
        .map(|b| school.db.get_statistics(&Scope::branch(b)).into_result().unwrap())
        .fold(Statistics::default(), |acc, s| acc.merge(&s));

    assert_eq!(all, summed);
    assert_eq!(all.total_revenue, dec!(23000));
}

#[test]
fn test_empty_store_has_zero_statistics() {
    let db = helpers::empty_db();
    let stats = db.get_statistics(&Scope::Unrestricted).into_result().unwrap();
    assert_eq!(stats, Statistics::default());
}

#[test]
fn test_commission_paths_diverge_after_rate_change() {
    let school = School::new().with_revenue();
    let scope = Scope::branch(&school.b1);

    let before = school.db.get_statistics(&scope).into_result().unwrap();
    let analysis = school.db.get_branch_revenue_analysis(&scope).into_result().unwrap();
    assert_eq!(before.total_commission, analysis[0].commission);

    school
        .db
        .update_branch(
            &school.b1,
            BranchPatch {
                commission_rate: Some(dec!(0.20)),
                ..Default::default()
            },
        )
        .into_result()
        .unwrap();

    let after = school.db.get_statistics(&scope).into_result().unwrap();
    let analysis = school.db.get_branch_revenue_analysis(&scope).into_result().unwrap();

    // Stored rows keep the 15% they were written with
    assert_eq!(after.total_commission, dec!(2250));
    // The analysis applies today's 20%
    assert_eq!(analysis[0].commission, dec!(3000));
    assert_ne!(after.total_commission, analysis[0].commission);
}

#[test]
fn test_new_revenue_uses_the_new_rate() {
    let school = School::new();
    school
        .db
        .update_branch(
            &school.b2,
            BranchPatch {
                commission_rate: Some(dec!(0.25)),
                ..Default::default()
            },
        )
        .into_result()
        .unwrap();
    school.revenue(&school.b2, &school.c2, &school.s3, dec!(4000), helpers::date(2024, 5, 1));

    let stats = school.db.get_statistics(&Scope::branch(&school.b2)).into_result().unwrap();
    assert_eq!(stats.total_commission, dec!(1000));
}
