//! EquipmentRules - condition decay, maintenance economics, and
//! assignment gating for equipment
//!
//! Condition only decays while an item serves an active scheme, at 5
//! points per calendar month since its last maintenance. Maintenance
//! restores condition to 100 for a percentage of the purchase price -
//! doomsday devices cost double the normal rate and demand a skill-9
//! specialist on the receiving scheme.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::RuleConfig;
use crate::domain::entities::{Equipment, EvilScheme};
use crate::domain::ports::{Clock, Repository};
use crate::domain::services::SharedStore;
use crate::domain::value_objects::{EquipmentId, SchemeId};
use crate::error::{DomainResult, EntityKind, RuleViolation};

/// Success-likelihood points a scheme loses when assigned equipment is
/// scrapped
const SCRAPPED_EQUIPMENT_SUCCESS_PENALTY: i32 = 5;

/// Outcome of an equipment-to-scheme assignment pre-check
///
/// `warnings` never flip validity - doomsday storage and overkill
/// diagnostics ride along for the caller to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentCheck {
    pub valid: bool,
    pub message: String,
    pub warnings: Vec<String>,
}

impl AssignmentCheck {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            warnings: Vec::new(),
        }
    }
}

/// Rule component for equipment
pub struct EquipmentRules {
    store: SharedStore,
    repo: Rc<dyn Repository>,
    clock: Rc<dyn Clock>,
    config: RuleConfig,
}

impl EquipmentRules {
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

    /// Apply time-based wear to an item on an active scheme
    ///
    /// Wear is the whole-month difference since the last maintenance
    /// date times the degradation rate; an item never maintained has
    /// accumulated no measurable service time and does not decay.
    /// Returns the (possibly unchanged) condition.
    pub fn degrade_condition(&self, id: EquipmentId) -> DomainResult<i32> {
        let mut equipment = self.equipment(id)?;

        let Some(scheme_id) = equipment.assigned_scheme_id else {
            return Ok(equipment.condition);
        };
        let on_active_scheme = self
            .repo
            .get_scheme(scheme_id)?
            .is_some_and(|s| s.status.is_active());
        if !on_active_scheme {
            return Ok(equipment.condition);
        }

        let months = self.months_since_maintenance(&equipment);
        let degradation = months * self.config.equipment.degradation_rate;
        let worn = (equipment.condition - degradation).max(0);
        if worn == equipment.condition {
            return Ok(worn);
        }

        equipment.condition = worn;
        debug!(equipment = %equipment.name, months, condition = worn, "condition degraded");
        self.persist(equipment)?;
        Ok(worn)
    }

    /// Restore an item to perfect condition, returning the cost
    ///
    /// Costs 15% of purchase price, or 30% for a doomsday device.
    /// Rejects items already at 100 and callers who cannot pay; a
    /// rejected call leaves the item untouched.
    pub fn perform_maintenance(&self, id: EquipmentId, available_funds: f64) -> DomainResult<f64> {
        // Read through to the repository - maintenance bills real money
        let Some(mut equipment) = self.repo.get_equipment(id)? else {
            return Err(RuleViolation::NotFound {
                kind: EntityKind::Equipment,
                id: id.raw(),
            });
        };
        self.store.borrow_mut().put_equipment(equipment.clone());

        if equipment.condition >= 100 {
            return Err(RuleViolation::AlreadyPerfect);
        }

        let rate = if equipment.category.is_doomsday() {
            self.config.equipment.doomsday_maintenance_cost_pct
        } else {
            self.config.equipment.maintenance_cost_pct
        };
        let cost = equipment.purchase_price * rate;

        if available_funds < cost {
            return Err(RuleViolation::InsufficientFunds {
                cost,
                available: available_funds,
            });
        }

        equipment.condition = 100;
        equipment.last_maintenance_date = Some(self.clock.now());
        self.persist(equipment)?;
        Ok(cost)
    }

    /// Condition at or above the operational floor (50)
    pub fn is_operational(&self, id: EquipmentId) -> DomainResult<bool> {
        Ok(self.equipment(id)?.condition >= self.config.equipment.min_operational_condition)
    }

    /// Condition below the broken threshold (20)
    pub fn is_broken(&self, id: EquipmentId) -> DomainResult<bool> {
        Ok(self.equipment(id)?.condition < self.config.equipment.broken_condition)
    }

    /// Pre-check an equipment-to-scheme assignment
    pub fn validate_assignment(
        &self,
        id: EquipmentId,
        scheme_id: SchemeId,
    ) -> DomainResult<AssignmentCheck> {
        let equipment = self.equipment(id)?;
        let scheme = self.scheme(scheme_id)?;

        if equipment.condition < self.config.equipment.min_operational_condition {
            return Ok(AssignmentCheck::rejected("Equipment condition too low for use"));
        }

        let Some(stored_base_id) = equipment.stored_base_id else {
            return Ok(AssignmentCheck::rejected(
                "Equipment must be stored at a base first",
            ));
        };

        if let Some(current) = equipment.assigned_scheme_id {
            if current != scheme.id {
                let other_is_active = self
                    .repo
                    .get_scheme(current)?
                    .is_some_and(|s| s.status.is_active());
                if other_is_active {
                    return Ok(AssignmentCheck::rejected(
                        "Equipment already assigned to another active scheme",
                    ));
                }
            }
        }

        let mut warnings = Vec::new();
        let mut requires_specialist = equipment.requires_specialist;
        let mut required_skill = self.config.staffing.specialist_skill_level;

        if equipment.category.is_doomsday() {
            requires_specialist = true;
            required_skill = self.config.staffing.doomsday_specialist_skill_level;

            if let Some(stored_base) = self.repo.get_base(stored_base_id)? {
                if !stored_base.has_doomsday_device {
                    warnings.push("Base is not equipped to store doomsday devices".to_string());
                }
            }
            if scheme.diabolical_rating < self.config.scheme.high_diabolical_rating {
                warnings.push("Doomsday device is overkill for a low-rated scheme".to_string());
            }
        }

        if requires_specialist {
            let has_specialist = self
                .repo
                .get_all_minions()?
                .iter()
                .any(|m| m.is_assigned_to(scheme.id) && m.skill_level >= required_skill);
            if !has_specialist {
                return Ok(AssignmentCheck {
                    valid: false,
                    message: format!(
                        "Equipment requires a specialist minion (skill {required_skill}+)"
                    ),
                    warnings,
                });
            }
        }

        if let Some(primary) = scheme.primary_base_id {
            if primary != stored_base_id {
                warnings.push("Equipment is not stored at the scheme's primary base".to_string());
            }
        }

        Ok(AssignmentCheck {
            valid: true,
            message: "Assignment Valid".to_string(),
            warnings,
        })
    }

    /// Check creation/update fields, returning non-fatal warnings
    pub fn validate(&self, equipment: &Equipment) -> DomainResult<Vec<String>> {
        if equipment.condition < 0 || equipment.condition > 100 {
            return Err(RuleViolation::InvalidCondition {
                value: equipment.condition,
            });
        }
        if equipment.purchase_price <= 0.0 {
            return Err(RuleViolation::InvalidPrice {
                value: equipment.purchase_price,
            });
        }
        if equipment.maintenance_cost < 0.0 {
            return Err(RuleViolation::InvalidMaintenanceCost {
                value: equipment.maintenance_cost,
            });
        }

        let mut warnings = Vec::new();
        if equipment.maintenance_cost > equipment.purchase_price {
            warn!(equipment = %equipment.name, "maintenance cost exceeds purchase price");
            warnings.push("Maintenance cost exceeds purchase price".to_string());
        }
        Ok(warnings)
    }

    /// Validate and insert a new item
    pub fn add(&self, equipment: Equipment) -> DomainResult<Vec<String>> {
        let warnings = self.validate(&equipment)?;
        self.repo.insert_equipment(&equipment)?;
        self.store.borrow_mut().put_equipment(equipment);
        Ok(warnings)
    }

    /// Validate and persist changes to an existing item
    pub fn update(&self, equipment: Equipment) -> DomainResult<Vec<String>> {
        let warnings = self.validate(&equipment)?;
        self.persist(equipment)?;
        Ok(warnings)
    }

    /// Scrap an item
    ///
    /// If it was assigned to a scheme, that scheme's cached success
    /// likelihood drops by 5 (floored at 0) and is persisted before the
    /// item is removed.
    pub fn delete(&self, id: EquipmentId) -> DomainResult<()> {
        let equipment = self.equipment(id)?;

        if let Some(scheme_id) = equipment.assigned_scheme_id {
            if let Some(mut scheme) = self.repo.get_scheme(scheme_id)? {
                scheme.success_likelihood =
                    (scheme.success_likelihood - SCRAPPED_EQUIPMENT_SUCCESS_PENALTY).max(0);
                self.repo.update_scheme(&scheme)?;
                self.store.borrow_mut().put_scheme(scheme);
            }
        }

        self.repo.delete_equipment(id)?;
        self.store.borrow_mut().remove_equipment(id);
        Ok(())
    }

    /// Calendar months elapsed since last maintenance, floored at zero
    fn months_since_maintenance(&self, equipment: &Equipment) -> i32 {
        use chrono::Datelike;

        let Some(last) = equipment.last_maintenance_date else {
            return 0;
        };
        let now = self.clock.now();
        let months =
            (now.year() - last.year()) * 12 + now.month() as i32 - last.month() as i32;
        months.max(0)
    }

    /// Cache-first single-item read
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

    fn scheme(&self, id: SchemeId) -> DomainResult<EvilScheme> {
        if let Some(scheme) = self.store.borrow().scheme(id) {
            return Ok(scheme.clone());
        }
        match self.repo.get_scheme(id)? {
            Some(scheme) => {
                self.store.borrow_mut().put_scheme(scheme.clone());
                Ok(scheme)
            }
            None => Err(RuleViolation::NotFound {
                kind: EntityKind::Scheme,
                id: id.raw(),
            }),
        }
    }

    fn persist(&self, equipment: Equipment) -> DomainResult<()> {
        self.repo.update_equipment(&equipment)?;
        self.store.borrow_mut().put_equipment(equipment);
        Ok(())
    }
}
