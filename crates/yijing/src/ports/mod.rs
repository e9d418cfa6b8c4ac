//! Ports - Abstract interfaces for external collaborators
//!
//! Implementations live in the server crate.

pub mod services;

pub use services::*;
