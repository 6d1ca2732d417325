//! In-memory repository adapter
//!
//! Reference implementation of the `Repository` port backed by typed
//! maps. Serves tests and demos; a durable backend would implement the
//! same trait against real storage.

use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Duration, Utc};

use crate::domain::entities::{Equipment, EvilScheme, Minion, SecretBase};
use crate::domain::ports::Repository;
use crate::domain::value_objects::{
    BaseId, EquipmentCategory, EquipmentId, MinionId, SchemeId, Specialty,
};

/// Map-backed repository
///
/// `BTreeMap` keeps `get_all_*` ordering stable across runs, which the
/// snapshot tests rely on.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    minions: RefCell<BTreeMap<u32, Minion>>,
    schemes: RefCell<BTreeMap<u32, EvilScheme>>,
    bases: RefCell<BTreeMap<u32, SecretBase>>,
    equipment: RefCell<BTreeMap<u32, Equipment>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for InMemoryRepository {
    fn initialize(&self) -> Result<()> {
        self.create_schema_if_not_exists()
    }

    fn create_schema_if_not_exists(&self) -> Result<()> {
        // Nothing to create for the map backend
        Ok(())
    }

    fn seed_initial_data(&self) -> Result<()> {
        if !self.minions.borrow().is_empty() {
            return Ok(());
        }

        let now = Utc::now();

        let volcano = SecretBase::new(
            BaseId(1),
            "Mount Cinder",
            "South Pacific",
            30,
            8,
            45_000.0,
        )
        .with_doomsday_facility();
        let penthouse = SecretBase::new(
            BaseId(2),
            "Obsidian Tower",
            "Metro City",
            12,
            5,
            80_000.0,
        );
        self.insert_base(&volcano)?;
        self.insert_base(&penthouse)?;

        let mut igor = Minion::new(MinionId(1), "Igor", Specialty::Engineering, 9, 12_000.0, now);
        igor.current_base_id = Some(BaseId(1));
        let mut natasha = Minion::new(MinionId(2), "Natasha", Specialty::Disguise, 7, 9_000.0, now);
        natasha.current_base_id = Some(BaseId(2));
        let boris = Minion::new(MinionId(3), "Boris", Specialty::Explosives, 5, 6_000.0, now);
        self.insert_minion(&igor)?;
        self.insert_minion(&natasha)?;
        self.insert_minion(&boris)?;

        let scheme = EvilScheme::new(
            SchemeId(1),
            "Operation Blackout",
            Specialty::Engineering,
            6,
            500_000.0,
            7,
            now + Duration::days(120),
        )
        .with_description("Hold the city's power grid hostage");
        self.insert_scheme(&scheme)?;

        let mut laser = Equipment::new(
            EquipmentId(1),
            "Orbital Laser",
            EquipmentCategory::DoomsdayDevice,
            2_000_000.0,
            60_000.0,
        );
        laser.stored_base_id = Some(BaseId(1));
        let mut jet = Equipment::new(
            EquipmentId(2),
            "Stealth Jet",
            EquipmentCategory::Vehicle,
            750_000.0,
            15_000.0,
        );
        jet.stored_base_id = Some(BaseId(1));
        self.insert_equipment(&laser)?;
        self.insert_equipment(&jet)?;

        Ok(())
    }

    fn get_all_minions(&self) -> Result<Vec<Minion>> {
        Ok(self.minions.borrow().values().cloned().collect())
    }

    fn get_minion(&self, id: MinionId) -> Result<Option<Minion>> {
        Ok(self.minions.borrow().get(&id.raw()).cloned())
    }

    fn insert_minion(&self, minion: &Minion) -> Result<()> {
        self.minions
            .borrow_mut()
            .insert(minion.id.raw(), minion.clone());
        Ok(())
    }

    fn update_minion(&self, minion: &Minion) -> Result<()> {
        self.minions
            .borrow_mut()
            .insert(minion.id.raw(), minion.clone());
        Ok(())
    }

    fn delete_minion(&self, id: MinionId) -> Result<()> {
        self.minions.borrow_mut().remove(&id.raw());
        Ok(())
    }

    fn get_all_schemes(&self) -> Result<Vec<EvilScheme>> {
        Ok(self.schemes.borrow().values().cloned().collect())
    }

    fn get_scheme(&self, id: SchemeId) -> Result<Option<EvilScheme>> {
        Ok(self.schemes.borrow().get(&id.raw()).cloned())
    }

    fn insert_scheme(&self, scheme: &EvilScheme) -> Result<()> {
        self.schemes
            .borrow_mut()
            .insert(scheme.id.raw(), scheme.clone());
        Ok(())
    }

    fn update_scheme(&self, scheme: &EvilScheme) -> Result<()> {
        self.schemes
            .borrow_mut()
            .insert(scheme.id.raw(), scheme.clone());
        Ok(())
    }

    fn delete_scheme(&self, id: SchemeId) -> Result<()> {
        self.schemes.borrow_mut().remove(&id.raw());
        Ok(())
    }

    fn get_all_bases(&self) -> Result<Vec<SecretBase>> {
        Ok(self.bases.borrow().values().cloned().collect())
    }

    fn get_base(&self, id: BaseId) -> Result<Option<SecretBase>> {
        Ok(self.bases.borrow().get(&id.raw()).cloned())
    }

    fn insert_base(&self, base: &SecretBase) -> Result<()> {
        self.bases.borrow_mut().insert(base.id.raw(), base.clone());
        Ok(())
    }

    fn update_base(&self, base: &SecretBase) -> Result<()> {
        self.bases.borrow_mut().insert(base.id.raw(), base.clone());
        Ok(())
    }

    fn delete_base(&self, id: BaseId) -> Result<()> {
        self.bases.borrow_mut().remove(&id.raw());
        Ok(())
    }

    fn get_all_equipment(&self) -> Result<Vec<Equipment>> {
        Ok(self.equipment.borrow().values().cloned().collect())
    }

    fn get_equipment(&self, id: EquipmentId) -> Result<Option<Equipment>> {
        Ok(self.equipment.borrow().get(&id.raw()).cloned())
    }

    fn insert_equipment(&self, equipment: &Equipment) -> Result<()> {
        self.equipment
            .borrow_mut()
            .insert(equipment.id.raw(), equipment.clone());
        Ok(())
    }

    fn update_equipment(&self, equipment: &Equipment) -> Result<()> {
        self.equipment
            .borrow_mut()
            .insert(equipment.id.raw(), equipment.clone());
        Ok(())
    }

    fn delete_equipment(&self, id: EquipmentId) -> Result<()> {
        self.equipment.borrow_mut().remove(&id.raw());
        Ok(())
    }

    fn base_occupancy(&self, id: BaseId) -> Result<u32> {
        Ok(self
            .minions
            .borrow()
            .values()
            .filter(|m| m.current_base_id == Some(id))
            .count() as u32)
    }

    fn scheme_assigned_minion_count(&self, id: SchemeId) -> Result<u32> {
        Ok(self
            .minions
            .borrow()
            .values()
            .filter(|m| m.current_scheme_id == Some(id))
            .count() as u32)
    }

    fn scheme_assigned_equipment_count(&self, id: SchemeId) -> Result<u32> {
        Ok(self
            .equipment
            .borrow()
            .values()
            .filter(|e| e.assigned_scheme_id == Some(id))
            .count() as u32)
    }
}
