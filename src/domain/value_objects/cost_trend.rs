//! Cost trend indicator for a base

use serde::{Deserialize, Serialize};

/// Rough direction of a base's monthly costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostTrend {
    /// No minions stationed
    Minimal,
    Stable,
    /// High occupancy combined with low morale
    Increasing,
}

impl CostTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostTrend::Minimal => "Minimal",
            CostTrend::Stable => "Stable",
            CostTrend::Increasing => "Increasing (High occupancy + Low morale)",
        }
    }
}

impl std::fmt::Display for CostTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
