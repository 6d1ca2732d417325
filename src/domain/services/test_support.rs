//! Shared fixtures for rule-component unit tests
//!
//! Every test runs against an in-memory repository and a clock pinned
//! to `test_epoch`, so date-driven rules are deterministic.

use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::config::RuleConfig;
use crate::domain::entities::{Equipment, EvilScheme, Minion, SecretBase};
use crate::domain::ports::Repository;
use crate::domain::services::{
    BaseRules, EntityStore, EquipmentRules, MinionRules, SchemeRules, SharedStore,
};
use crate::domain::value_objects::{
    BaseId, EquipmentCategory, EquipmentId, MinionId, SchemeId, Specialty,
};
use crate::infrastructure::{FixedClock, InMemoryRepository};

/// The instant all rule tests consider "now"
pub(crate) fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap()
}

/// A fully wired engine over fakes
pub(crate) struct Harness {
    pub store: SharedStore,
    pub repo: Rc<InMemoryRepository>,
    pub clock: Rc<FixedClock>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            store: EntityStore::shared(),
            repo: Rc::new(InMemoryRepository::new()),
            clock: Rc::new(FixedClock::at(test_epoch())),
        }
    }

    pub fn scheme_rules(&self) -> SchemeRules {
        SchemeRules::new(
            self.store.clone(),
            self.repo.clone(),
            self.clock.clone(),
            RuleConfig::default(),
        )
    }

    pub fn minion_rules(&self) -> MinionRules {
        MinionRules::new(
            self.store.clone(),
            self.repo.clone(),
            self.clock.clone(),
            RuleConfig::default(),
        )
    }

    pub fn equipment_rules(&self) -> EquipmentRules {
        EquipmentRules::new(
            self.store.clone(),
            self.repo.clone(),
            self.clock.clone(),
            RuleConfig::default(),
        )
    }

    pub fn base_rules(&self) -> BaseRules {
        BaseRules::new(
            self.store.clone(),
            self.repo.clone(),
            self.clock.clone(),
            RuleConfig::default(),
        )
    }

    pub fn add_minion(&self, minion: &Minion) {
        self.repo.insert_minion(minion).unwrap();
    }

    pub fn add_scheme(&self, scheme: &EvilScheme) {
        self.repo.insert_scheme(scheme).unwrap();
    }

    pub fn add_base(&self, base: &SecretBase) {
        self.repo.insert_base(base).unwrap();
    }

    pub fn add_equipment(&self, equipment: &Equipment) {
        self.repo.insert_equipment(equipment).unwrap();
    }
}

pub(crate) fn minion(id: u32, specialty: Specialty, skill: u8) -> Minion {
    Minion::new(
        MinionId(id),
        format!("Minion {id}"),
        specialty,
        skill,
        5_000.0,
        test_epoch(),
    )
}

/// A Planning scheme requiring the given specialty, deadline relative to
/// the test epoch
pub(crate) fn scheme(id: u32, specialty: Specialty, days_to_deadline: i64) -> EvilScheme {
    EvilScheme::new(
        SchemeId(id),
        format!("Scheme {id}"),
        specialty,
        5,
        50_000.0,
        5,
        test_epoch() + Duration::days(days_to_deadline),
    )
}

pub(crate) fn base(id: u32, capacity: u32) -> SecretBase {
    SecretBase::new(
        BaseId(id),
        format!("Base {id}"),
        "Undisclosed",
        capacity,
        5,
        10_000.0,
    )
}

pub(crate) fn equipment(id: u32, category: EquipmentCategory) -> Equipment {
    Equipment::new(
        EquipmentId(id),
        format!("Equipment {id}"),
        category,
        10_000.0,
        500.0,
    )
}
