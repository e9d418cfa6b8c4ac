//! Application Layer (Use Cases)
//!
//! Orchestrates domain rules and the LLM collaborator.

mod oracle_service;

pub use oracle_service::{ChatOutcome, OracleService};
