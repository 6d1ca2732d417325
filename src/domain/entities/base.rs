//! SecretBase entity - a facility of the organization
//!
//! Occupancy is always derived by counting stationed minions; it is
//! never stored on the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::BaseId;

/// A hidden facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretBase {
    pub id: BaseId,
    pub name: String,
    pub location: String,
    /// Minion capacity, always positive
    pub capacity: u32,
    /// Security level, 1-10
    pub security_level: u8,
    /// Upkeep per month in evil dollars, never negative
    pub monthly_maintenance_cost: f64,
    pub has_doomsday_device: bool,
    pub is_discovered: bool,
    pub last_inspection_date: Option<DateTime<Utc>>,
}

impl SecretBase {
    pub fn new(
        id: BaseId,
        name: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
        security_level: u8,
        monthly_maintenance_cost: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            capacity,
            security_level,
            monthly_maintenance_cost,
            has_doomsday_device: false,
            is_discovered: false,
            last_inspection_date: None,
        }
    }

    pub fn with_doomsday_facility(mut self) -> Self {
        self.has_doomsday_device = true;
        self
    }
}
