//! Domain Layer
//!
//! The core of Overlord - the rule engine, free of storage and UI
//! concerns.
//!
//! ## Structure
//!
//! - `entities/` - Plain data records (Minion, EvilScheme, Equipment, SecretBase)
//! - `value_objects/` - Typed ids and closed vocabularies
//! - `services/` - The rule components and the shared entity store
//! - `ports/` - Interface definitions for infrastructure (repository, clock)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Storage and time go through trait-defined ports
//! 2. **Single store** - All rule components share one entity cache, so a
//!    write through one component is immediately visible to the others
//! 3. **Hard vs soft outcomes** - Rule rejections are `RuleViolation`
//!    errors; preview validations are plain result structs

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
