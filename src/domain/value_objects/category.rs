//! Equipment category value object
//!
//! Doomsday Devices carry stricter specialist and storage rules than the
//! other categories; the rule layer asks `is_doomsday` rather than
//! matching on the variant.

use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;

/// Category of an equipment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    Weapon,
    Vehicle,
    Gadget,
    DoomsdayDevice,
}

impl EquipmentCategory {
    pub const ALL: [EquipmentCategory; 4] = [
        EquipmentCategory::Weapon,
        EquipmentCategory::Vehicle,
        EquipmentCategory::Gadget,
        EquipmentCategory::DoomsdayDevice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCategory::Weapon => "Weapon",
            EquipmentCategory::Vehicle => "Vehicle",
            EquipmentCategory::Gadget => "Gadget",
            EquipmentCategory::DoomsdayDevice => "Doomsday Device",
        }
    }

    pub fn is_doomsday(&self) -> bool {
        matches!(self, EquipmentCategory::DoomsdayDevice)
    }
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EquipmentCategory {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RuleViolation::InvalidCategory {
                value: s.to_string(),
            })
    }
}
