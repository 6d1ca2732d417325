//! Specialty value object - a minion's trade
//!
//! The whitelist is closed: Hacking, Explosives, Disguise, Combat,
//! Engineering, Piloting. Parsing is a case-sensitive exact match, so
//! `"hacking"` is rejected the same way `"Magic"` is.

use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;

/// A minion's area of expertise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Hacking,
    Explosives,
    Disguise,
    Combat,
    Engineering,
    Piloting,
}

impl Specialty {
    /// All specialties in display order
    pub const ALL: [Specialty; 6] = [
        Specialty::Hacking,
        Specialty::Explosives,
        Specialty::Disguise,
        Specialty::Combat,
        Specialty::Engineering,
        Specialty::Piloting,
    ];

    /// Canonical display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Hacking => "Hacking",
            Specialty::Explosives => "Explosives",
            Specialty::Disguise => "Disguise",
            Specialty::Combat => "Combat",
            Specialty::Engineering => "Engineering",
            Specialty::Piloting => "Piloting",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Specialty {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .into_iter()
            .find(|sp| sp.as_str() == s)
            .ok_or_else(|| RuleViolation::InvalidSpecialty {
                value: s.to_string(),
            })
    }
}
