//! Value Objects
//!
//! Immutable value types for the domain.

mod intent;

pub use intent::*;
