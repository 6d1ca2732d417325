//! EvilScheme entity - a project of the organization
//!
//! `success_likelihood` and `allow_new_assignments` are derived values
//! cached on the record; `SchemeRules` owns their recomputation. Status
//! only moves through the transition validator or the automatic
//! deadline sweep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BaseId, SchemeId, SchemeStatus, Specialty};

/// A diabolical undertaking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvilScheme {
    pub id: SchemeId,
    pub name: String,
    pub description: String,
    /// Total budget in evil dollars, always positive
    pub budget: f64,
    /// Spending committed so far, never negative
    pub current_spending: f64,
    pub required_skill_level: u8,
    pub required_specialty: Specialty,
    pub status: SchemeStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub target_completion_date: DateTime<Utc>,
    /// Diabolical rating, 1-10; drives resource requirements
    pub diabolical_rating: u8,
    /// Derived viability score, 0-100
    pub success_likelihood: i32,
    pub primary_base_id: Option<BaseId>,
    /// Derived flag maintained by budget validation
    pub allow_new_assignments: bool,
}

impl EvilScheme {
    /// Create a scheme in Planning with nothing spent yet
    pub fn new(
        id: SchemeId,
        name: impl Into<String>,
        required_specialty: Specialty,
        required_skill_level: u8,
        budget: f64,
        diabolical_rating: u8,
        target_completion_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            budget,
            current_spending: 0.0,
            required_skill_level,
            required_specialty,
            status: SchemeStatus::Planning,
            start_date: None,
            target_completion_date,
            diabolical_rating,
            success_likelihood: 0,
            primary_base_id: None,
            allow_new_assignments: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.current_spending
    }

    pub fn is_over_budget(&self) -> bool {
        self.current_spending > self.budget
    }
}
