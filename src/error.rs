//! Error types for Overlord
//!
//! Uses `thiserror` for the domain error enum. Hard rule rejections are
//! `RuleViolation` values; soft validations (budget previews, assignment
//! pre-checks) are returned as plain data and never pass through here.

use thiserror::Error;

use crate::domain::value_objects::Specialty;

/// Result type alias for rule-engine operations
pub type DomainResult<T> = Result<T, RuleViolation>;

/// Which kind of entity a lookup failed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Minion,
    Scheme,
    Base,
    Equipment,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Minion => write!(f, "minion"),
            EntityKind::Scheme => write!(f, "scheme"),
            EntityKind::Base => write!(f, "base"),
            EntityKind::Equipment => write!(f, "equipment"),
        }
    }
}

/// A hard rejection from the rule engine
#[derive(Error, Debug)]
pub enum RuleViolation {
    /// Entity lookup for an id that does not exist
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u32 },

    /// Specialty outside the recognized whitelist (case-sensitive)
    #[error("'{value}' is not a recognized specialty")]
    InvalidSpecialty { value: String },

    /// Equipment category outside the recognized whitelist
    #[error("'{value}' is not a recognized equipment category")]
    InvalidCategory { value: String },

    /// Scheme status string outside the fixed set
    #[error("'{value}' is not a recognized scheme status")]
    InvalidStatus { value: String },

    /// Mood status string outside the fixed set
    #[error("'{value}' is not a recognized mood")]
    InvalidMood { value: String },

    /// Skill level outside 1-10
    #[error("skill level {value} is invalid - must be between 1 and 10")]
    InvalidSkillLevel { value: i32 },

    /// Salary demand must be positive
    #[error("salary demand must be positive, got {value}")]
    InvalidSalary { value: f64 },

    /// Equipment condition outside 0-100
    #[error("condition {value} is invalid - must be between 0 and 100")]
    InvalidCondition { value: i32 },

    /// Purchase price must be positive
    #[error("purchase price must be greater than zero, got {value}")]
    InvalidPrice { value: f64 },

    /// Maintenance cost must not be negative
    #[error("maintenance cost cannot be negative, got {value}")]
    InvalidMaintenanceCost { value: f64 },

    /// Minion skill below the scheme's required level
    #[error("minion skill {actual} is below the required level {required}")]
    SkillTooLow { required: u8, actual: u8 },

    /// Minion specialty does not match the scheme's requirement
    #[error("minion specialty {actual} does not match required specialty {required}")]
    SpecialtyMismatch {
        required: Specialty,
        actual: Specialty,
    },

    /// Minion is committed elsewhere and the target scheme is active
    #[error("minion {minion} is already assigned to a different scheme")]
    AlreadyCommitted { minion: u32 },

    /// Single base assignment into a full base
    #[error("base is at full capacity ({capacity} minions)")]
    BaseAtCapacity { capacity: u32 },

    /// Bulk base assignment that does not fit
    #[error("assigning {requested} minions would exceed capacity ({available} slots free)")]
    ExceedsCapacity { requested: usize, available: u32 },

    /// Maintenance requested on pristine equipment
    #[error("equipment is already in perfect condition")]
    AlreadyPerfect,

    /// Maintenance requested without the funds to cover it
    #[error("insufficient funds for maintenance (cost {cost}, available {available})")]
    InsufficientFunds { cost: f64, available: f64 },

    /// Repository failure, propagated unchanged
    #[error("repository failure: {0}")]
    Repository(#[from] anyhow::Error),
}
