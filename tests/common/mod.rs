//! Shared fixtures for integration tests
//!
//! Builds a fully wired engine - one shared store, one in-memory
//! repository, one pinned clock - and entity builders with sensible
//! villainous defaults.

use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use overlord::config::RuleConfig;
use overlord::domain::services::{
    BaseRules, EntityStore, EquipmentRules, MinionRules, SchemeRules, SharedStore,
};
use overlord::infrastructure::{FixedClock, InMemoryRepository};
use overlord::{
    BaseId, Equipment, EquipmentCategory, EquipmentId, EvilScheme, Minion, MinionId, Repository,
    SchemeId, SecretBase, Specialty,
};

/// The instant integration tests consider "now"
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap()
}

/// One engine over shared fakes
pub struct Engine {
    pub store: SharedStore,
    pub repo: Rc<InMemoryRepository>,
    pub clock: Rc<FixedClock>,
    pub schemes: SchemeRules,
    pub minions: MinionRules,
    pub equipment: EquipmentRules,
    pub bases: BaseRules,
}

impl Engine {
    pub fn new() -> Self {
        let store = EntityStore::shared();
        let repo = Rc::new(InMemoryRepository::new());
        let clock = Rc::new(FixedClock::at(epoch()));
        let config = RuleConfig::default();

        Self {
            schemes: SchemeRules::new(
                store.clone(),
                repo.clone(),
                clock.clone(),
                config.clone(),
            ),
            minions: MinionRules::new(
                store.clone(),
                repo.clone(),
                clock.clone(),
                config.clone(),
            ),
            equipment: EquipmentRules::new(
                store.clone(),
                repo.clone(),
                clock.clone(),
                config.clone(),
            ),
            bases: BaseRules::new(store.clone(), repo.clone(), clock.clone(), config),
            store,
            repo,
            clock,
        }
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

pub fn minion(id: u32, specialty: Specialty, skill: u8) -> Minion {
    Minion::new(
        MinionId(id),
        format!("Minion {id}"),
        specialty,
        skill,
        5_000.0,
        epoch(),
    )
}

/// A Planning scheme with a 50,000 budget, deadline relative to the epoch
pub fn scheme(id: u32, specialty: Specialty, days_to_deadline: i64) -> EvilScheme {
    EvilScheme::new(
        SchemeId(id),
        format!("Scheme {id}"),
        specialty,
        5,
        50_000.0,
        5,
        epoch() + Duration::days(days_to_deadline),
    )
}

pub fn base(id: u32, capacity: u32) -> SecretBase {
    SecretBase::new(
        BaseId(id),
        format!("Base {id}"),
        "Undisclosed",
        capacity,
        5,
        10_000.0,
    )
}

pub fn equipment(id: u32, category: EquipmentCategory) -> Equipment {
    Equipment::new(
        EquipmentId(id),
        format!("Equipment {id}"),
        category,
        10_000.0,
        500.0,
    )
}
