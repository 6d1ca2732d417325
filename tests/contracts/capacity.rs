//! CONTRACT: base capacity is a hard wall - the last slot can be
//! filled, the slot after cannot, and a bulk batch that does not fit
//! moves nobody.

use overlord::{BaseId, MinionId, Repository, RuleViolation, Specialty};

use crate::common::{base, minion, Engine};

fn occupy(engine: &Engine, base_id: u32, count: u32) {
    for i in 0..count {
        let mut m = minion(9_000 + i, Specialty::Combat, 5);
        m.current_base_id = Some(BaseId(base_id));
        engine.add_minion(&m);
    }
}

#[test]
fn contract_single_assignment_respects_the_wall() {
    let engine = Engine::new();
    engine.add_base(&base(1, 50));
    occupy(&engine, 1, 49);
    engine.add_minion(&minion(1, Specialty::Hacking, 6));
    engine.add_minion(&minion(2, Specialty::Hacking, 6));

    // Seat 50 of 50 is fine
    engine.minions.assign_to_base(MinionId(1), BaseId(1)).unwrap();

    // Seat 51 is not
    let err = engine
        .minions
        .assign_to_base(MinionId(2), BaseId(1))
        .unwrap_err();
    assert!(matches!(err, RuleViolation::BaseAtCapacity { capacity: 50 }));
}

#[test]
fn contract_bulk_assignment_is_all_or_nothing() {
    let engine = Engine::new();
    engine.add_base(&base(1, 30));
    occupy(&engine, 1, 28);
    for id in 1..=3 {
        engine.add_minion(&minion(id, Specialty::Combat, 5));
    }

    let ids = [MinionId(1), MinionId(2), MinionId(3)];
    let err = engine
        .minions
        .assign_many_to_base(&ids, BaseId(1))
        .unwrap_err();

    assert!(matches!(
        err,
        RuleViolation::ExceedsCapacity {
            requested: 3,
            available: 2
        }
    ));
    // Nobody moved
    for id in ids {
        assert_eq!(
            engine.repo.get_minion(id).unwrap().unwrap().current_base_id,
            None
        );
    }
    assert_eq!(engine.repo.base_occupancy(BaseId(1)).unwrap(), 28);
}

#[test]
fn contract_bulk_assignment_that_exactly_fits_succeeds() {
    let engine = Engine::new();
    engine.add_base(&base(1, 30));
    occupy(&engine, 1, 28);
    for id in 1..=2 {
        engine.add_minion(&minion(id, Specialty::Combat, 5));
    }

    engine
        .minions
        .assign_many_to_base(&[MinionId(1), MinionId(2)], BaseId(1))
        .unwrap();

    assert_eq!(engine.repo.base_occupancy(BaseId(1)).unwrap(), 30);
    assert!(engine.bases.is_at_full_capacity(BaseId(1)).unwrap());
}

#[test]
fn contract_preview_check_matches_the_hard_gate() {
    let engine = Engine::new();
    engine.add_base(&base(1, 2));
    occupy(&engine, 1, 2);
    engine.add_minion(&minion(1, Specialty::Hacking, 6));

    let check = engine
        .bases
        .can_assign_minion(BaseId(1), MinionId(1))
        .unwrap();
    assert!(!check.ok);

    assert!(engine.minions.assign_to_base(MinionId(1), BaseId(1)).is_err());
}
