//! End-to-end engine tests
//!
//! Exercises the full profile -> scores -> recommendations pipeline and
//! the invariants the engine promises for any valid profile.

use kompass_core::{
    compute_scores, recommend, AssetHolding, Profile, ScoreCategory, Tier,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

fn all_scores(profile: &Profile) -> Vec<(&'static str, f64)> {
    let scores = compute_scores(profile);
    let mut fields: Vec<(&'static str, f64)> = ScoreCategory::SUB_SCORES
        .iter()
        .map(|category| (category.as_str(), scores.get(*category)))
        .collect();
    fields.push(("financial_basis", scores.financial_basis));
    fields.push(("risk_protection", scores.risk_protection));
    fields.push(("asset_base", scores.asset_base));
    fields.push(("overall", scores.overall));
    fields
}

/// A handful of structurally different profiles for invariant checks
fn fixture_profiles() -> Vec<Profile> {
    let mut profiles = vec![Profile::sample()];

    // Broke and uninsured
    let mut broke = Profile::sample();
    broke.cash_flow.monthly_income = 900.0;
    broke.cash_flow.fixed_costs = 850.0;
    broke.cash_flow.variable_costs = 300.0;
    broke.liquidity.emergency_fund = 0.0;
    broke.debt.overdraft_balance = 3000.0;
    broke.debt.installment_loan_balance = 25000.0;
    broke.insurance = Default::default();
    broke.documents = Default::default();
    broke.portfolio = Default::default();
    broke.retirement.statutory_pension = 0.0;
    broke.retirement.occupational_pension = 0.0;
    broke.retirement.private_pension = 0.0;
    profiles.push(broke);

    // Zero income, zero expenses
    let mut empty = Profile::sample();
    empty.cash_flow.monthly_income = 0.0;
    empty.cash_flow.fixed_costs = 0.0;
    empty.cash_flow.variable_costs = 0.0;
    profiles.push(empty);

    // Young single renter without a car
    let mut young = Profile::sample();
    young.personal.age = 23;
    young.personal.is_single = true;
    young.personal.owns_property = false;
    young.personal.owns_car = false;
    young.insurance.term_life = false;
    young.insurance.buildings = false;
    young.insurance.motor_liability = false;
    profiles.push(young);

    // Wealthy retiree
    let mut retiree = Profile::sample();
    retiree.personal.age = 70;
    retiree.liquidity.emergency_fund = 50000.0;
    retiree.debt.overdraft_balance = 0.0;
    retiree.debt.installment_loan_balance = 0.0;
    retiree.portfolio.equities = AssetHolding {
        held: true,
        amount: 300000.0,
    };
    retiree.retirement.statutory_pension = 1800.0;
    profiles.push(retiree);

    profiles
}

#[test]
fn test_range_invariant_holds_for_all_fixtures() {
    for (index, profile) in fixture_profiles().iter().enumerate() {
        for (name, score) in all_scores(profile) {
            assert!(
                (0.0..=100.0).contains(&score),
                "profile {index}: {name} = {score} out of range"
            );
            assert!(score.is_finite(), "profile {index}: {name} not finite");
        }
    }
}

#[test]
fn test_determinism() {
    for profile in fixture_profiles() {
        let first = compute_scores(&profile);
        let second = compute_scores(&profile);
        assert_eq!(first, second);

        let first_recs = recommend(&first, &profile);
        let second_recs = recommend(&second, &profile);
        assert_eq!(first_recs.len(), second_recs.len());
        for (a, b) in first_recs.iter().zip(&second_recs) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.description, b.description);
        }
    }
}

#[test]
fn test_emergency_fund_monotonicity() {
    let mut profile = Profile::sample();
    profile.liquidity.emergency_fund = 0.0;
    let mut previous = compute_scores(&profile).emergency_fund;

    for fund in [500.0, 2000.0, 5100.0, 10000.0, 100000.0] {
        profile.liquidity.emergency_fund = fund;
        let score = compute_scores(&profile).emergency_fund;
        assert!(
            score >= previous,
            "emergency fund {fund}: score {score} dropped below {previous}"
        );
        previous = score;
    }
}

#[test]
fn test_overdraft_monotonicity() {
    let mut profile = Profile::sample();
    profile.debt.overdraft_balance = 0.0;
    let mut previous = compute_scores(&profile).debt;

    for overdraft in [100.0, 499.0, 501.0, 2000.0, 20000.0] {
        profile.debt.overdraft_balance = overdraft;
        let score = compute_scores(&profile).debt;
        assert!(
            score <= previous,
            "overdraft {overdraft}: score {score} rose above {previous}"
        );
        previous = score;
    }
}

#[test]
fn test_conditional_denominator_consistency() {
    // With term life uncovered, flipping is_single changes only the
    // applicable maximum: 85/100 when it applies, 85/85 when it does not
    let mut profile = Profile::sample();
    profile.insurance.health = true;
    profile.insurance.disability = true;
    profile.insurance.personal_liability = true;
    profile.insurance.accident = true;
    profile.insurance.term_life = false;

    profile.personal.is_single = false;
    let partnered = compute_scores(&profile).personal_insurance;
    assert_close(partnered, 85.0);

    profile.personal.is_single = true;
    let single = compute_scores(&profile).personal_insurance;
    assert_close(single, 100.0);
}

#[test]
fn test_scenario_a() {
    let mut profile = Profile::sample();
    profile.cash_flow.monthly_income = 2200.0;
    profile.cash_flow.fixed_costs = 1050.0;
    profile.cash_flow.variable_costs = 650.0;
    profile.liquidity.emergency_fund = 5100.0;
    profile.debt.overdraft_balance = 100.0;
    profile.debt.installment_loan_balance = 12000.0;

    let scores = compute_scores(&profile);
    assert_close(scores.emergency_fund, 100.0);
    assert_close(scores.debt, 41.67);
}

#[test]
fn test_scenario_b_zero_income() {
    let mut profile = Profile::sample();
    profile.cash_flow.monthly_income = 0.0;

    let scores = compute_scores(&profile);
    assert_eq!(scores.savings_rate, 0.0);
    assert_eq!(scores.debt, 0.0);
    assert!(scores.overall.is_finite());
}

#[test]
fn test_scenario_c_property_gate() {
    let mut profile = Profile::sample();
    profile.personal.owns_property = false;
    profile.insurance.buildings = false;
    let without_property = compute_scores(&profile).property_insurance;

    profile.personal.owns_property = true;
    profile.insurance.buildings = true;
    let covered_owner = compute_scores(&profile).property_insurance;

    // Lacking buildings insurance without property costs nothing
    assert_close(without_property, covered_owner);
}

#[test]
fn test_scenario_d_empty_portfolio() {
    let mut profile = Profile::sample();
    profile.portfolio = Default::default();
    assert_eq!(compute_scores(&profile).investment_quality, 0.0);
}

#[test]
fn test_scenario_e_at_retirement_age() {
    let mut profile = Profile::sample();
    profile.personal.age = 67;
    // With no inflation left the replacement ratio reads directly off
    // current expenses: 1100 / 1700 / 0.8
    let scores = compute_scores(&profile);
    assert_close(scores.retirement_adequacy, 1100.0 / 1700.0 / 0.8 * 100.0);
}

#[test]
fn test_sample_profile_report_is_stable() {
    let profile = Profile::sample();
    let scores = compute_scores(&profile);

    // Spot-check the sample against hand-computed values
    assert_close(scores.savings_rate, 100.0);
    assert_close(scores.emergency_fund, 100.0);
    assert_close(scores.debt, 41.67);
    assert_close(scores.personal_insurance, 55.0);
    assert_close(scores.property_insurance, 100.0);
    assert_close(scores.emergency_documents, 70.0);

    assert_eq!(Tier::from_score(scores.emergency_fund), Tier::Excellent);
    assert_eq!(Tier::from_score(scores.debt), Tier::Poor);

    let recommendations = recommend(&scores, &profile);
    assert!(!recommendations.is_empty());
    // Debt and personal insurance are both below their thresholds
    assert!(recommendations.iter().any(|r| r.title == "Reduce debt"));
    assert!(recommendations
        .iter()
        .any(|r| r.title == "Close personal insurance gaps"));
}
