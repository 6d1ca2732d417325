//! Deadline urgency classification for a scheme

use serde::{Deserialize, Serialize};

/// How close a scheme is to its target completion date
///
/// Bands are in whole days until the deadline: `<0` overdue, `<=7`
/// urgent, `<=30` due soon, otherwise on track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadlineStatus {
    OnTrack,
    DueSoon,
    Urgent,
    Overdue,
}

impl DeadlineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlineStatus::OnTrack => "On track",
            DeadlineStatus::DueSoon => "Due soon",
            DeadlineStatus::Urgent => "Urgent",
            DeadlineStatus::Overdue => "Overdue",
        }
    }

    /// Classify from a whole-day countdown
    pub fn from_days_remaining(days: i64) -> Self {
        if days < 0 {
            DeadlineStatus::Overdue
        } else if days <= 7 {
            DeadlineStatus::Urgent
        } else if days <= 30 {
            DeadlineStatus::DueSoon
        } else {
            DeadlineStatus::OnTrack
        }
    }
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
