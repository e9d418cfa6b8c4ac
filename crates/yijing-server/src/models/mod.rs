//! API Data Models
//!
//! - Chat: question in, reading or persona reply out
//! - Health: liveness and collaborator status

mod chat;
mod health;

pub use chat::*;
pub use health::*;
