//! Domain Services
//!
//! The four rule components plus the entity store they share. Each
//! component is constructed with the same `SharedStore`, a repository
//! handle, a clock, and the rule configuration; they read each other's
//! entity kinds through the store and repository rather than calling
//! each other.

mod base_rules;
mod entity_store;
mod equipment_rules;
mod minion_rules;
mod scheme_rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use base_rules::{AssignCheck, BaseRules, StorageCheck};
pub use entity_store::{EntityStore, SharedStore};
pub use equipment_rules::{AssignmentCheck, EquipmentRules};
pub use minion_rules::MinionRules;
pub use scheme_rules::{
    BudgetReport, BudgetValuesCheck, ResourceCheck, ResourceRequirements, SchemeRules,
    SpecialtyCheck, SpendingEstimate, TransitionCheck,
};
