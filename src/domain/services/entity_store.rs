//! EntityStore - the consolidated in-memory cache
//!
//! One typed map per entity kind, shared by every rule component via
//! `SharedStore`. The engine is single-threaded and synchronous: one
//! rule operation completes fully before the next begins, so `RefCell`
//! borrows never overlap and no locking is needed.
//!
//! The store is a rebuildable projection - the repository remains the
//! sole owner of durable state. Single-entity reads are cache-first;
//! collection scans always read through to the repository.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

use crate::domain::entities::{Equipment, EvilScheme, Minion, SecretBase};
use crate::domain::ports::Repository;
use crate::domain::value_objects::{BaseId, EquipmentId, MinionId, SchemeId};

/// Handle shared by all rule components
pub type SharedStore = Rc<RefCell<EntityStore>>;

/// Id-keyed cache of all four entity kinds
#[derive(Debug, Default)]
pub struct EntityStore {
    minions: HashMap<MinionId, Minion>,
    schemes: HashMap<SchemeId, EvilScheme>,
    bases: HashMap<BaseId, SecretBase>,
    equipment: HashMap<EquipmentId, Equipment>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store in the shared handle
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Rebuild the whole projection from the repository
    pub fn reload(&mut self, repo: &dyn Repository) -> Result<()> {
        self.minions = repo
            .get_all_minions()?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        self.schemes = repo
            .get_all_schemes()?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        self.bases = repo
            .get_all_bases()?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();
        self.equipment = repo
            .get_all_equipment()?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();
        Ok(())
    }

    // Minions

    pub fn minion(&self, id: MinionId) -> Option<&Minion> {
        self.minions.get(&id)
    }

    pub fn put_minion(&mut self, minion: Minion) {
        self.minions.insert(minion.id, minion);
    }

    pub fn remove_minion(&mut self, id: MinionId) {
        self.minions.remove(&id);
    }

    // Schemes

    pub fn scheme(&self, id: SchemeId) -> Option<&EvilScheme> {
        self.schemes.get(&id)
    }

    pub fn scheme_mut(&mut self, id: SchemeId) -> Option<&mut EvilScheme> {
        self.schemes.get_mut(&id)
    }

    pub fn put_scheme(&mut self, scheme: EvilScheme) {
        self.schemes.insert(scheme.id, scheme);
    }

    pub fn remove_scheme(&mut self, id: SchemeId) {
        self.schemes.remove(&id);
    }

    // Bases

    pub fn base(&self, id: BaseId) -> Option<&SecretBase> {
        self.bases.get(&id)
    }

    pub fn put_base(&mut self, base: SecretBase) {
        self.bases.insert(base.id, base);
    }

    pub fn remove_base(&mut self, id: BaseId) {
        self.bases.remove(&id);
    }

    // Equipment

    pub fn equipment(&self, id: EquipmentId) -> Option<&Equipment> {
        self.equipment.get(&id)
    }

    pub fn put_equipment(&mut self, equipment: Equipment) {
        self.equipment.insert(equipment.id, equipment);
    }

    pub fn remove_equipment(&mut self, id: EquipmentId) {
        self.equipment.remove(&id);
    }
}
