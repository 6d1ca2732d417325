//! Minion entity - a member of the organization's staff
//!
//! Loyalty and mood are maintained by `MinionRules`; assignment fields
//! are maintained by the assignment operations. The
//! `scheme_assignment_date` is stamped when a minion joins a scheme and
//! cleared when they leave, and drives overwork detection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BaseId, MinionId, Mood, SchemeId, Specialty};

/// A henchperson on the payroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minion {
    pub id: MinionId,
    pub name: String,
    /// Skill level, 1-10
    pub skill_level: u8,
    pub specialty: Specialty,
    /// Loyalty score, 0-100
    pub loyalty_score: i32,
    /// Monthly salary demand in evil dollars, always positive
    pub salary_demand: f64,
    pub current_base_id: Option<BaseId>,
    pub current_scheme_id: Option<SchemeId>,
    pub mood_status: Mood,
    pub last_mood_update: DateTime<Utc>,
    pub scheme_assignment_date: Option<DateTime<Utc>>,
}

impl Minion {
    /// Create an unassigned minion with neutral loyalty
    pub fn new(
        id: MinionId,
        name: impl Into<String>,
        specialty: Specialty,
        skill_level: u8,
        salary_demand: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            skill_level,
            specialty,
            loyalty_score: 50,
            salary_demand,
            current_base_id: None,
            current_scheme_id: None,
            mood_status: Mood::Grumpy,
            last_mood_update: now,
            scheme_assignment_date: None,
        }
    }

    /// Whether this minion is working the given scheme
    pub fn is_assigned_to(&self, scheme: SchemeId) -> bool {
        self.current_scheme_id == Some(scheme)
    }

    /// Whether this minion is stationed at the given base
    pub fn is_stationed_at(&self, base: BaseId) -> bool {
        self.current_base_id == Some(base)
    }
}
