//! CONTRACT: all rule components share one entity store - a write made
//! through one component is visible to every other without a reload.

use overlord::{EquipmentCategory, EquipmentId, MinionId, SchemeId, SchemeStatus, Specialty};

use crate::common::{equipment, minion, scheme, Engine};

#[test]
fn contract_scheme_write_is_seen_by_equipment_rules() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, -3);
    s.status = SchemeStatus::Active;
    s.success_likelihood = 80;
    engine.add_scheme(&s);
    let mut e = equipment(1, EquipmentCategory::Weapon);
    e.assigned_scheme_id = Some(SchemeId(1));
    e.last_maintenance_date = Some(crate::common::epoch() - chrono::Duration::days(122));
    engine.add_equipment(&e);

    // SchemeRules completes the overdue scheme...
    engine.schemes.apply_auto_transitions(SchemeId(1)).unwrap();

    // ...so EquipmentRules no longer sees active service and applies no wear
    let condition = engine.equipment.degrade_condition(EquipmentId(1)).unwrap();
    assert_eq!(condition, 100);
}

#[test]
fn contract_minion_write_is_seen_by_scheme_rules() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, 90);
    s.status = SchemeStatus::Active;
    engine.add_scheme(&s);
    engine.add_minion(&minion(1, Specialty::Hacking, 8));

    // MinionRules assigns the specialist...
    engine
        .minions
        .assign_to_scheme(MinionId(1), SchemeId(1))
        .unwrap();

    // ...and SchemeRules immediately counts them
    let check = engine
        .schemes
        .validate_specialty_matching(SchemeId(1))
        .unwrap();
    assert_eq!(check.matching_count, 1);
}

#[test]
fn contract_budget_gate_written_by_one_handle_is_read_by_another() {
    let engine = Engine::new();
    let mut s = scheme(1, Specialty::Hacking, 90);
    s.current_spending = 60_000.0;
    engine.add_scheme(&s);

    engine.schemes.validate_budget_status(SchemeId(1)).unwrap();

    // The flag lives in the shared store, not in a per-component copy
    assert!(!engine
        .store
        .borrow()
        .scheme(SchemeId(1))
        .unwrap()
        .allow_new_assignments);
}
