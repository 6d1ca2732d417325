//! Clock port - time source abstraction
//!
//! Deadlines, condition decay, overwork, and discovery windows all
//! depend on "now"; routing it through a trait keeps every rule
//! deterministic under test.

use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
