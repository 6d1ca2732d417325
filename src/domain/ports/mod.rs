//! Ports - interface definitions for infrastructure
//!
//! The rule layer never touches storage or the wall clock directly; both
//! go through these traits so tests can substitute deterministic fakes.

mod clock;
mod repository;

pub use clock::Clock;
pub use repository::Repository;
