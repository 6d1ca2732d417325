//! Value Objects
//!
//! Immutable typed values used across the domain: entity ids and the
//! closed vocabularies (specialties, moods, statuses, categories) plus
//! the derived classifications the rule layer hands back to callers.

mod budget_status;
mod category;
mod cost_trend;
mod deadline_status;
mod ids;
mod mood;
mod scheme_status;
mod security_status;
mod specialty;

pub use budget_status::BudgetStatus;
pub use category::EquipmentCategory;
pub use cost_trend::CostTrend;
pub use deadline_status::DeadlineStatus;
pub use ids::{BaseId, EquipmentId, MinionId, SchemeId};
pub use mood::Mood;
pub use scheme_status::SchemeStatus;
pub use security_status::SecurityStatus;
pub use specialty::Specialty;
