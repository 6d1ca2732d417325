//! BaseRules - occupancy, discovery, storage, and cost rules for
//! secret bases
//!
//! Occupancy is always derived by counting stationed minions against
//! capacity. Discovery is a two-state flag with a 7-day evacuation
//! window after the discovering inspection. Equipment storage is
//! exclusive: an item lives at one base or none.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::RuleConfig;
use crate::domain::entities::{Equipment, Minion, SecretBase};
use crate::domain::ports::{Clock, Repository};
use crate::domain::services::SharedStore;
use crate::domain::value_objects::{BaseId, CostTrend, EquipmentId, MinionId, SecurityStatus};
use crate::error::{DomainResult, EntityKind, RuleViolation};

use chrono::{DateTime, Utc};

/// Days after a discovering inspection during which evacuation is urgent
const EVACUATION_WINDOW_DAYS: i64 = 7;

/// Stored items allowed per unit of minion capacity
const STORAGE_PER_CAPACITY: u32 = 2;

/// Occupancy fraction above which costs trend upward when morale is low
const CROWDED_FRACTION: f64 = 0.8;

/// Loyalty average below which a crowded base gets expensive
const LOW_MORALE_AVERAGE: f64 = 50.0;

/// Outcome of a minion-to-base assignment pre-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignCheck {
    pub ok: bool,
    pub errors: Vec<String>,
}

/// Outcome of an equipment-storage pre-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageCheck {
    pub ok: bool,
    pub errors: Vec<String>,
}

/// Rule component for secret bases
pub struct BaseRules {
    store: SharedStore,
    repo: Rc<dyn Repository>,
    clock: Rc<dyn Clock>,
    config: RuleConfig,
}

impl BaseRules {
    pub fn new(
        store: SharedStore,
        repo: Rc<dyn Repository>,
        clock: Rc<dyn Clock>,
        config: RuleConfig,
    ) -> Self {
        Self {
            store,
            repo,
            clock,
            config,
        }
    }

    /// Count of minions currently stationed at the base
    pub fn occupancy(&self, id: BaseId) -> DomainResult<u32> {
        self.base(id)?;
        Ok(self.repo.base_occupancy(id)?)
    }

    /// Slots left before the base is full
    pub fn available_capacity(&self, id: BaseId) -> DomainResult<u32> {
        let base = self.base(id)?;
        let occupancy = self.repo.base_occupancy(id)?;
        Ok(base.capacity.saturating_sub(occupancy))
    }

    pub fn can_accommodate_minion(&self, id: BaseId) -> DomainResult<bool> {
        Ok(self.available_capacity(id)? > 0)
    }

    /// Occupancy as a percentage of capacity (0 for a zero-capacity base)
    pub fn occupancy_percentage(&self, id: BaseId) -> DomainResult<f64> {
        let base = self.base(id)?;
        if base.capacity == 0 {
            return Ok(0.0);
        }
        let occupancy = self.repo.base_occupancy(id)?;
        Ok(occupancy as f64 / base.capacity as f64 * 100.0)
    }

    pub fn is_at_full_capacity(&self, id: BaseId) -> DomainResult<bool> {
        Ok(self.available_capacity(id)? == 0)
    }

    /// Pre-check stationing a minion at a base, collecting every error
    pub fn can_assign_minion(&self, id: BaseId, minion_id: MinionId) -> DomainResult<AssignCheck> {
        let base = self.base(id)?;
        let minion = self.minion(minion_id)?;
        let mut errors = Vec::new();

        if minion.is_stationed_at(base.id) {
            errors.push("Minion is already at this base".to_string());
        }

        let occupancy = self.repo.base_occupancy(base.id)?;
        if occupancy >= base.capacity {
            errors.push(format!(
                "Base is at full capacity ({} minions)",
                base.capacity
            ));
        }

        Ok(AssignCheck {
            ok: errors.is_empty(),
            errors,
        })
    }

    /// Record that the enemy found this base
    pub fn mark_discovered(&self, id: BaseId, discovery_date: DateTime<Utc>) -> DomainResult<()> {
        let mut base = self.base(id)?;
        base.is_discovered = true;
        base.last_inspection_date = Some(discovery_date);
        warn!(base = %base.name, "base discovered - evacuation advised");
        self.persist(base)
    }

    /// Clear the discovery flag after relocating or silencing witnesses
    pub fn mark_safe(&self, id: BaseId) -> DomainResult<()> {
        let mut base = self.base(id)?;
        base.is_discovered = false;
        debug!(base = %base.name, "base marked safe");
        self.persist(base)
    }

    /// Security posture: safe, urgently compromised, or merely known
    pub fn security_status(&self, id: BaseId) -> DomainResult<SecurityStatus> {
        let base = self.base(id)?;

        if !base.is_discovered {
            return Ok(SecurityStatus::Safe);
        }
        if let Some(inspected) = base.last_inspection_date {
            let days_since = (self.clock.now() - inspected).num_days();
            if days_since < EVACUATION_WINDOW_DAYS {
                return Ok(SecurityStatus::RecentlyDiscovered);
            }
        }
        Ok(SecurityStatus::Discovered)
    }

    /// Pre-check storing an item at a base, collecting every error
    ///
    /// Storage is exclusive - an item already stored elsewhere must be
    /// retrieved first.
    pub fn can_store_equipment(
        &self,
        id: BaseId,
        equipment_id: EquipmentId,
    ) -> DomainResult<StorageCheck> {
        let base = self.base(id)?;
        let equipment = self.equipment(equipment_id)?;
        let mut errors = Vec::new();

        let floor = self.config.equipment.min_operational_condition;
        if equipment.condition < floor {
            errors.push(format!(
                "Equipment condition too low ({}%) - must be at least {}%",
                equipment.condition, floor
            ));
        }

        if equipment.stored_base_id == Some(base.id) {
            errors.push("Equipment is already stored at this base".to_string());
        } else if equipment.stored_base_id.is_some() {
            errors.push("Equipment is already stored at another base".to_string());
        }

        Ok(StorageCheck {
            ok: errors.is_empty(),
            errors,
        })
    }

    /// Everything currently stored at the base
    pub fn stored_equipment(&self, id: BaseId) -> DomainResult<Vec<Equipment>> {
        self.base(id)?;
        Ok(self
            .repo
            .get_all_equipment()?
            .into_iter()
            .filter(|e| e.stored_base_id == Some(id))
            .collect())
    }

    /// Rough storage slots left (two items per capacity unit)
    pub fn available_storage_space(&self, id: BaseId) -> DomainResult<u32> {
        let base = self.base(id)?;
        let stored = self.stored_equipment(id)?.len() as u32;
        Ok((base.capacity * STORAGE_PER_CAPACITY).saturating_sub(stored))
    }

    /// Base upkeep plus the salaries of everyone stationed there
    pub fn monthly_costs(&self, id: BaseId) -> DomainResult<f64> {
        let base = self.base(id)?;
        let salaries: f64 = self
            .stationed_minions(id)?
            .iter()
            .map(|m| m.salary_demand)
            .sum();
        Ok(base.monthly_maintenance_cost + salaries)
    }

    /// Direction the monthly bill is heading
    pub fn cost_trend(&self, id: BaseId) -> DomainResult<CostTrend> {
        let base = self.base(id)?;
        let stationed = self.stationed_minions(id)?;

        if !stationed.is_empty() {
            let average_loyalty = stationed
                .iter()
                .map(|m| m.loyalty_score as f64)
                .sum::<f64>()
                / stationed.len() as f64;
            if stationed.len() as f64 >= base.capacity as f64 * CROWDED_FRACTION
                && average_loyalty < LOW_MORALE_AVERAGE
            {
                return Ok(CostTrend::Increasing);
            }
        }

        if stationed.is_empty() {
            return Ok(CostTrend::Minimal);
        }
        Ok(CostTrend::Stable)
    }

    /// Multi-line report for one base
    pub fn summary(&self, id: BaseId) -> DomainResult<String> {
        let base = self.base(id)?;
        let occupancy = self.occupancy(id)?;
        let available = self.available_capacity(id)?;
        let monthly_cost = self.monthly_costs(id)?;
        let security = self.security_status(id)?;
        let stored = self.stored_equipment(id)?;

        Ok(format!(
            "Base: {}\n\
             Location: {}\n\
             Security Level: {}/10\n\
             Occupancy: {}/{} ({} available)\n\
             Doomsday Device: {}\n\
             Discovery Status: {}\n\
             Monthly Costs: ${}\n\
             Stored Equipment: {} items",
            base.name,
            base.location,
            base.security_level,
            occupancy,
            base.capacity,
            available,
            if base.has_doomsday_device { "YES" } else { "No" },
            security,
            format_evil_dollars(monthly_cost),
            stored.len(),
        ))
    }

    fn stationed_minions(&self, id: BaseId) -> DomainResult<Vec<Minion>> {
        Ok(self
            .repo
            .get_all_minions()?
            .into_iter()
            .filter(|m| m.is_stationed_at(id))
            .collect())
    }

    /// Cache-first single-base read
    fn base(&self, id: BaseId) -> DomainResult<SecretBase> {
        if let Some(base) = self.store.borrow().base(id) {
            return Ok(base.clone());
        }
        match self.repo.get_base(id)? {
            Some(base) => {
                self.store.borrow_mut().put_base(base.clone());
                Ok(base)
            }
            None => Err(RuleViolation::NotFound {
                kind: EntityKind::Base,
                id: id.raw(),
            }),
        }
    }

    fn minion(&self, id: MinionId) -> DomainResult<Minion> {
        if let Some(minion) = self.store.borrow().minion(id) {
            return Ok(minion.clone());
        }
        match self.repo.get_minion(id)? {
            Some(minion) => {
                self.store.borrow_mut().put_minion(minion.clone());
                Ok(minion)
            }
            None => Err(RuleViolation::NotFound {
                kind: EntityKind::Minion,
                id: id.raw(),
            }),
        }
    }

    fn equipment(&self, id: EquipmentId) -> DomainResult<Equipment> {
        if let Some(equipment) = self.store.borrow().equipment(id) {
            return Ok(equipment.clone());
        }
        match self.repo.get_equipment(id)? {
            Some(equipment) => {
                self.store.borrow_mut().put_equipment(equipment.clone());
                Ok(equipment)
            }
            None => Err(RuleViolation::NotFound {
                kind: EntityKind::Equipment,
                id: id.raw(),
            }),
        }
    }

    fn persist(&self, base: SecretBase) -> DomainResult<()> {
        self.repo.update_base(&base)?;
        self.store.borrow_mut().put_base(base);
        Ok(())
    }
}

/// Format a money amount with thousands separators and two decimals
fn format_evil_dollars(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = (cents % 100).abs();

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}
