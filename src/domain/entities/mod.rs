//! Domain Entities
//!
//! Plain data records with identity. All behavior lives in the rule
//! services; entities only carry state and a few derived predicates.
//! Unassigned references are `None`, never a zero id.

mod base;
mod equipment;
mod minion;
mod scheme;

pub use base::SecretBase;
pub use equipment::Equipment;
pub use minion::Minion;
pub use scheme::EvilScheme;
