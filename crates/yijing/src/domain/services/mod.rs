//! Domain Services
//!
//! Stateless rules over the fixed tables:
//! - `resolver`: three numbers → DivinationResult
//! - `numbers`: fallback number generator
//! - `classifier`: question text → Intent
//! - `formatter`: user-facing reply text
//! - `prompts`: LLM prompts and fallback texts

mod classifier;
mod formatter;
mod numbers;
pub mod prompts;
mod resolver;

pub use classifier::*;
pub use formatter::*;
pub use numbers::*;
pub use resolver::*;
