//! API Routes
//!
//! - /api/chat - Question in, reading or persona reply out
//! - /api/health - Liveness and collaborator status
//! - /swagger-ui - OpenAPI documentation

pub mod chat;
pub mod health;
pub mod swagger;
