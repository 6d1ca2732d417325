//! Equipment entity - an asset of the organization
//!
//! Condition degrades monthly while the item serves an active scheme and
//! is restored by maintenance (`EquipmentRules`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BaseId, EquipmentCategory, EquipmentId, SchemeId};

/// A piece of villainous hardware
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub category: EquipmentCategory,
    /// Condition, 0-100
    pub condition: i32,
    /// Purchase price in evil dollars, always positive
    pub purchase_price: f64,
    /// Recurring upkeep cost, never negative
    pub maintenance_cost: f64,
    pub assigned_scheme_id: Option<SchemeId>,
    pub stored_base_id: Option<BaseId>,
    pub requires_specialist: bool,
    pub last_maintenance_date: Option<DateTime<Utc>>,
}

impl Equipment {
    /// Create a factory-fresh, unassigned item
    pub fn new(
        id: EquipmentId,
        name: impl Into<String>,
        category: EquipmentCategory,
        purchase_price: f64,
        maintenance_cost: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            condition: 100,
            purchase_price,
            maintenance_cost,
            assigned_scheme_id: None,
            stored_base_id: None,
            requires_specialist: false,
            last_maintenance_date: None,
        }
    }

    pub fn with_specialist_required(mut self) -> Self {
        self.requires_specialist = true;
        self
    }

    /// Whether this item is committed to the given scheme
    pub fn is_assigned_to(&self, scheme: SchemeId) -> bool {
        self.assigned_scheme_id == Some(scheme)
    }
}
