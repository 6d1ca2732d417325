//! Repository port - the persistence boundary
//!
//! The repository is the sole owner of durable state; every rule
//! component's cache is a rebuildable projection of it. Lookups return
//! `Ok(None)` for absence - the rule layer decides whether that is an
//! error. Write failures propagate to the caller unchanged.

use anyhow::Result;

use crate::domain::entities::{Equipment, EvilScheme, Minion, SecretBase};
use crate::domain::value_objects::{BaseId, EquipmentId, MinionId, SchemeId};

/// Abstract store for all four entity kinds
///
/// Implemented by infrastructure; consumed by every rule component.
pub trait Repository {
    // Lifecycle
    fn initialize(&self) -> Result<()>;
    fn create_schema_if_not_exists(&self) -> Result<()>;
    fn seed_initial_data(&self) -> Result<()>;

    // Minions
    fn get_all_minions(&self) -> Result<Vec<Minion>>;
    fn get_minion(&self, id: MinionId) -> Result<Option<Minion>>;
    fn insert_minion(&self, minion: &Minion) -> Result<()>;
    fn update_minion(&self, minion: &Minion) -> Result<()>;
    fn delete_minion(&self, id: MinionId) -> Result<()>;

    // Schemes
    fn get_all_schemes(&self) -> Result<Vec<EvilScheme>>;
    fn get_scheme(&self, id: SchemeId) -> Result<Option<EvilScheme>>;
    fn insert_scheme(&self, scheme: &EvilScheme) -> Result<()>;
    fn update_scheme(&self, scheme: &EvilScheme) -> Result<()>;
    fn delete_scheme(&self, id: SchemeId) -> Result<()>;

    // Bases
    fn get_all_bases(&self) -> Result<Vec<SecretBase>>;
    fn get_base(&self, id: BaseId) -> Result<Option<SecretBase>>;
    fn insert_base(&self, base: &SecretBase) -> Result<()>;
    fn update_base(&self, base: &SecretBase) -> Result<()>;
    fn delete_base(&self, id: BaseId) -> Result<()>;

    // Equipment
    fn get_all_equipment(&self) -> Result<Vec<Equipment>>;
    fn get_equipment(&self, id: EquipmentId) -> Result<Option<Equipment>>;
    fn insert_equipment(&self, equipment: &Equipment) -> Result<()>;
    fn update_equipment(&self, equipment: &Equipment) -> Result<()>;
    fn delete_equipment(&self, id: EquipmentId) -> Result<()>;

    // Derived counts
    fn base_occupancy(&self, id: BaseId) -> Result<u32>;
    fn scheme_assigned_minion_count(&self, id: SchemeId) -> Result<u32>;
    fn scheme_assigned_equipment_count(&self, id: SchemeId) -> Result<u32>;
}
