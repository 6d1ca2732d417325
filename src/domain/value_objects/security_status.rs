//! Discovery status of a secret base

use serde::{Deserialize, Serialize};

/// Security posture of a base with respect to discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityStatus {
    /// Not discovered
    Safe,
    /// Discovered within the last 7 days - evacuate now
    RecentlyDiscovered,
    /// Discovered, evacuation window has passed
    Discovered,
}

impl SecurityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityStatus::Safe => "Safe",
            SecurityStatus::RecentlyDiscovered => "Recently Discovered - Urgent Evacuation",
            SecurityStatus::Discovered => "Discovered",
        }
    }

    pub fn is_compromised(&self) -> bool {
        !matches!(self, SecurityStatus::Safe)
    }
}

impl std::fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
