//! CONTRACT: budget status is a pure function of (spending, budget)
//! with exact boundaries - 90% is still within budget, overrun starts
//! strictly past 100%.

use overlord::{BudgetStatus, SchemeId, Specialty};

use crate::common::{scheme, Engine};

fn status_for(spending: f64) -> BudgetStatus {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, 90);
    s.current_spending = spending;
    engine.add_scheme(&s);
    engine
        .schemes
        .validate_budget_status(SchemeId(1))
        .unwrap()
        .status
}

#[test]
fn contract_exactly_ninety_percent_is_within() {
    // spending=45,000 budget=50,000
    assert_eq!(status_for(45_000.0), BudgetStatus::Within);
}

#[test]
fn contract_one_dollar_past_ninety_percent_is_approaching() {
    assert_eq!(status_for(45_001.0), BudgetStatus::Approaching);
}

#[test]
fn contract_past_budget_is_over() {
    assert_eq!(status_for(51_000.0), BudgetStatus::Over);
}

#[test]
fn contract_exactly_at_budget_is_within() {
    assert_eq!(status_for(50_000.0), BudgetStatus::Within);
}

#[test]
fn contract_status_strings_are_stable() {
    // Callers display these verbatim; changing them breaks the UI layer
    assert_eq!(BudgetStatus::Within.to_string(), "Within Budget");
    assert_eq!(
        BudgetStatus::Approaching.to_string(),
        "Approaching Budget Limit"
    );
    assert_eq!(
        BudgetStatus::Over.to_string(),
        "Over Budget - Action Required"
    );
}

#[test]
fn contract_overrun_blocks_assignments_and_is_visible_on_the_scheme() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, 90);
    s.current_spending = 60_000.0;
    engine.add_scheme(&s);

    let report = engine.schemes.validate_budget_status(SchemeId(1)).unwrap();

    assert!(!report.allow_new_assignments);
    assert!(!engine
        .store
        .borrow()
        .scheme(SchemeId(1))
        .unwrap()
        .allow_new_assignments);
}

#[test]
fn contract_budget_floor_is_ten_thousand() {
    let engine = Engine::new();

    assert!(!engine.schemes.validate_budget_values(9_999.99, 0.0).valid);
    assert!(engine.schemes.validate_budget_values(10_000.0, 0.0).valid);
}
