//! Overlord - villain organization management rule engine
//!
//! Overlord models the back office of a villain organization: minions,
//! evil schemes, secret bases, and equipment. This crate is the domain
//! core - the derived-state calculators (success likelihood, budget
//! health, deadlines, loyalty and mood, equipment condition, occupancy)
//! and the transition validators that gate state changes against
//! multi-entity business rules.
//!
//! Persistence and presentation live elsewhere: storage is reached only
//! through the [`domain::ports::Repository`] trait and time through
//! [`domain::ports::Clock`]. The engine is single-threaded and
//! synchronous - one rule operation completes fully before the next
//! begins.
//!
//! ```
//! use std::rc::Rc;
//!
//! use overlord::infrastructure::{InMemoryRepository, SystemClock};
//! use overlord::{EntityStore, Repository, RuleConfig, SchemeId, SchemeRules};
//!
//! let repo = Rc::new(InMemoryRepository::new());
//! repo.seed_initial_data().unwrap();
//!
//! let rules = SchemeRules::new(
//!     EntityStore::shared(),
//!     repo,
//!     Rc::new(SystemClock),
//!     RuleConfig::default(),
//! );
//! let score = rules.calculate_success_likelihood(SchemeId(1)).unwrap();
//! assert!((0..=100).contains(&score));
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::RuleConfig;
pub use domain::entities::{Equipment, EvilScheme, Minion, SecretBase};
pub use domain::ports::{Clock, Repository};
pub use domain::services::{
    BaseRules, EntityStore, EquipmentRules, MinionRules, SchemeRules, SharedStore,
};
pub use domain::value_objects::{
    BaseId, BudgetStatus, CostTrend, DeadlineStatus, EquipmentCategory, EquipmentId, MinionId,
    Mood, SchemeId, SchemeStatus, SecurityStatus, Specialty,
};
pub use error::{DomainResult, EntityKind, RuleViolation};
