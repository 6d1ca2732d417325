//! Mood value object - derived minion morale classification

use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;

/// A minion's current mood, derived from loyalty and workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mood {
    Happy,
    #[default]
    Grumpy,
    PlottingBetrayal,
    Exhausted,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Grumpy => "Grumpy",
            Mood::PlottingBetrayal => "Plotting Betrayal",
            Mood::Exhausted => "Exhausted",
        }
    }

    /// A plotting minion is an active liability
    pub fn is_dangerous(&self) -> bool {
        matches!(self, Mood::PlottingBetrayal)
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Happy" => Ok(Mood::Happy),
            "Grumpy" => Ok(Mood::Grumpy),
            "Plotting Betrayal" => Ok(Mood::PlottingBetrayal),
            "Exhausted" => Ok(Mood::Exhausted),
            other => Err(RuleViolation::InvalidMood {
                value: other.to_string(),
            }),
        }
    }
}
