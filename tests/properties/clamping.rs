//! Property tests for the clamping laws.

use proptest::prelude::*;

use overlord::{MinionId, Repository, SchemeId, SchemeStatus, Specialty};

use crate::common::{minion, scheme, Engine};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: loyalty stays in 0-100 no matter the starting score or
    /// the payment amount.
    #[test]
    fn property_loyalty_always_in_bounds(
        initial_loyalty in 0i32..=100,
        salary_demand in 1.0f64..1_000_000.0,
        paid in 0.0f64..2_000_000.0,
    ) {
        let engine = Engine::new();
        let mut m = minion(1, Specialty::Hacking, 6);
        m.loyalty_score = initial_loyalty;
        m.salary_demand = salary_demand;
        engine.add_minion(&m);

        let loyalty = engine.minions.update_loyalty(MinionId(1), paid).unwrap();

        prop_assert!((0..=100).contains(&loyalty));
    }

    /// PROPERTY: repeated paydays keep loyalty in bounds, never drifting
    /// past either clamp.
    #[test]
    fn property_loyalty_survives_repeated_paydays(
        initial_loyalty in 0i32..=100,
        payments in proptest::collection::vec(0.0f64..10_000.0, 1..20),
    ) {
        let engine = Engine::new();
        let mut m = minion(1, Specialty::Hacking, 6);
        m.loyalty_score = initial_loyalty;
        engine.add_minion(&m);

        for paid in payments {
            let loyalty = engine.minions.update_loyalty(MinionId(1), paid).unwrap();
            prop_assert!((0..=100).contains(&loyalty));
        }
    }

    /// PROPERTY: success likelihood stays in 0-100 for any combination
    /// of crew, equipment, spending, and deadline.
    #[test]
    fn property_success_likelihood_always_in_bounds(
        crew in 0u32..8,
        matching in 0u32..8,
        working_equipment in 0u32..8,
        spending in 0.0f64..200_000.0,
        days_to_deadline in -200i64..200,
    ) {
        let engine = Engine::new();
        let mut s = scheme(1, Specialty::Hacking, days_to_deadline);
        s.current_spending = spending;
        engine.add_scheme(&s);

        let mut next_id = 1;
        for _ in 0..matching.min(crew) {
            let mut m = minion(next_id, Specialty::Hacking, 6);
            m.current_scheme_id = Some(SchemeId(1));
            engine.add_minion(&m);
            next_id += 1;
        }
        for _ in matching.min(crew)..crew {
            let mut m = minion(next_id, Specialty::Combat, 6);
            m.current_scheme_id = Some(SchemeId(1));
            engine.add_minion(&m);
            next_id += 1;
        }
        for id in 0..working_equipment {
            let mut e = crate::common::equipment(id + 1, overlord::EquipmentCategory::Gadget);
            e.assigned_scheme_id = Some(SchemeId(1));
            engine.add_equipment(&e);
        }

        let score = engine.schemes.calculate_success_likelihood(SchemeId(1)).unwrap();
        prop_assert!((0..=100).contains(&score));
    }

    /// PROPERTY: the persisted score always equals the computed score.
    #[test]
    fn property_update_persists_exactly_what_it_computes(
        spending in 0.0f64..100_000.0,
        days_to_deadline in -100i64..100,
    ) {
        let engine = Engine::new();
        let mut s = scheme(1, Specialty::Hacking, days_to_deadline);
        s.current_spending = spending;
        engine.add_scheme(&s);

        let computed = engine.schemes.update_success_likelihood(SchemeId(1)).unwrap();
        let stored = engine.repo.get_scheme(SchemeId(1)).unwrap().unwrap();

        prop_assert_eq!(stored.success_likelihood, computed);
    }

    /// PROPERTY: the auto sweep never moves a scheme anywhere but
    /// Completed or Failed, and only from Active.
    #[test]
    fn property_auto_sweep_targets_are_terminal(
        success in 0i32..=100,
        days_to_deadline in -50i64..50,
        status_seed in 0u8..5,
    ) {
        let engine = Engine::new();
        let status = match status_seed {
            0 => SchemeStatus::Planning,
            1 => SchemeStatus::Active,
            2 => SchemeStatus::OnHold,
            3 => SchemeStatus::Completed,
            _ => SchemeStatus::Failed,
        };
        let mut s = scheme(1, Specialty::Hacking, days_to_deadline);
        s.status = status;
        s.success_likelihood = success;
        engine.add_scheme(&s);

        let applied = engine.schemes.apply_auto_transitions(SchemeId(1)).unwrap();

        match applied {
            None => {}
            Some(new_status) => {
                prop_assert!(status == SchemeStatus::Active);
                prop_assert!(matches!(
                    new_status,
                    SchemeStatus::Completed | SchemeStatus::Failed
                ));
            }
        }
    }
}
