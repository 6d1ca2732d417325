//! Scheme status value object
//!
//! Status changes are gated by `SchemeRules::can_transition`; this type
//! only knows the vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;

/// Lifecycle status of an evil scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SchemeStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Failed,
}

impl SchemeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeStatus::Planning => "Planning",
            SchemeStatus::Active => "Active",
            SchemeStatus::OnHold => "On Hold",
            SchemeStatus::Completed => "Completed",
            SchemeStatus::Failed => "Failed",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SchemeStatus::Active)
    }

    /// Completed and Failed schemes never change again on their own
    pub fn is_terminal(&self) -> bool {
        matches!(self, SchemeStatus::Completed | SchemeStatus::Failed)
    }
}

impl std::fmt::Display for SchemeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SchemeStatus {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(SchemeStatus::Planning),
            "Active" => Ok(SchemeStatus::Active),
            "On Hold" => Ok(SchemeStatus::OnHold),
            "Completed" => Ok(SchemeStatus::Completed),
            "Failed" => Ok(SchemeStatus::Failed),
            other => Err(RuleViolation::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}
