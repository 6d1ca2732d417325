//! CONTRACT: the scheme status machine collects every failed
//! precondition, and the automatic sweep only touches overdue active
//! schemes.

use overlord::{Repository, SchemeId, SchemeStatus, Specialty};

use crate::common::{epoch, minion, scheme, Engine};

#[test]
fn contract_bare_activation_yields_at_least_two_distinct_errors() {
    let engine = Engine::new();
    // No start date, no minions
    engine.add_scheme(&scheme(1, Specialty::Hacking, 90));

    let check = engine
        .schemes
        .can_transition(SchemeId(1), SchemeStatus::Active)
        .unwrap();

    assert!(!check.allowed);
    assert!(check.errors.len() >= 2, "got: {:?}", check.errors);
    assert!(check.errors.iter().any(|e| e.contains("Start date")));
    assert!(check
        .errors
        .iter()
        .any(|e| e.contains("At least 2 minions")));
}

#[test]
fn contract_full_activation_preconditions_pass() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, 90);
    s.start_date = Some(epoch());
    engine.add_scheme(&s);
    for (id, specialty) in [(1, Specialty::Hacking), (2, Specialty::Combat)] {
        let mut m = minion(id, specialty, 6);
        m.current_scheme_id = Some(SchemeId(1));
        engine.add_minion(&m);
    }

    let check = engine
        .schemes
        .can_transition(SchemeId(1), SchemeStatus::Active)
        .unwrap();

    assert!(check.allowed, "unexpected errors: {:?}", check.errors);
}

#[test]
fn contract_completion_requires_seventy_and_a_passed_deadline() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, -1);
    s.status = SchemeStatus::Active;
    s.success_likelihood = 69;
    engine.add_scheme(&s);

    let check = engine
        .schemes
        .can_transition(SchemeId(1), SchemeStatus::Completed)
        .unwrap();
    assert!(!check.allowed);

    let mut s2 = scheme(2, Specialty::Hacking, -1);
    s2.status = SchemeStatus::Active;
    s2.success_likelihood = 70;
    engine.add_scheme(&s2);

    let check = engine
        .schemes
        .can_transition(SchemeId(2), SchemeStatus::Completed)
        .unwrap();
    assert!(check.allowed);
}

#[test]
fn contract_auto_sweep_resolves_the_extremes_and_spares_the_middle() {
    let engine = Engine::new();
    for (id, success) in [(1, 80), (2, 50), (3, 20)] {
        let mut s = scheme(id, Specialty::Hacking, -3);
        s.status = SchemeStatus::Active;
        s.success_likelihood = success;
        engine.add_scheme(&s);
    }

    assert_eq!(
        engine.schemes.apply_auto_transitions(SchemeId(1)).unwrap(),
        Some(SchemeStatus::Completed)
    );
    assert_eq!(
        engine.schemes.apply_auto_transitions(SchemeId(2)).unwrap(),
        None
    );
    assert_eq!(
        engine.schemes.apply_auto_transitions(SchemeId(3)).unwrap(),
        Some(SchemeStatus::Failed)
    );

    // Results are durable
    assert_eq!(
        engine.repo.get_scheme(SchemeId(1)).unwrap().unwrap().status,
        SchemeStatus::Completed
    );
    assert_eq!(
        engine.repo.get_scheme(SchemeId(2)).unwrap().unwrap().status,
        SchemeStatus::Active
    );
    assert_eq!(
        engine.repo.get_scheme(SchemeId(3)).unwrap().unwrap().status,
        SchemeStatus::Failed
    );
}

#[test]
fn contract_thirty_is_inside_the_undecided_band() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, -3);
    s.status = SchemeStatus::Active;
    s.success_likelihood = 30;
    engine.add_scheme(&s);

    // 30 is not "below 30"
    assert_eq!(engine.schemes.apply_auto_transitions(SchemeId(1)).unwrap(), None);
}

#[test]
fn contract_any_status_may_retreat_to_planning() {
    let engine = Engine::new();
    for (id, status) in [
        (1, SchemeStatus::Active),
        (2, SchemeStatus::OnHold),
        (3, SchemeStatus::Completed),
        (4, SchemeStatus::Failed),
    ] {
        let mut s = scheme(id, Specialty::Hacking, 90);
        s.status = status;
        engine.add_scheme(&s);

        let check = engine
            .schemes
            .can_transition(SchemeId(id), SchemeStatus::Planning)
            .unwrap();
        assert!(check.allowed, "from {status:?}");
    }
}

#[test]
fn contract_unlisted_transitions_name_both_states() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, 90);
    s.status = SchemeStatus::Failed;
    engine.add_scheme(&s);

    let check = engine
        .schemes
        .can_transition(SchemeId(1), SchemeStatus::Completed)
        .unwrap();

    assert!(!check.allowed);
    assert_eq!(
        check.errors,
        vec!["Cannot transition from Failed to Completed".to_string()]
    );
}
