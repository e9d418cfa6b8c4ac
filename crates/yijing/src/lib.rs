//! Yijing Domain Library
//!
//! Core domain types and interfaces for the Yijing (易經) oracle service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Trigram, Hexagram, DivinationResult, Persona
//!   - `value_objects/`: Intent
//!   - `services/`: Symbol resolver, number generator, intent classifier,
//!     response formatter, prompt builders
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External LLM interface
//!
//! # Usage
//!
//! ```rust
//! use yijing::{classify, resolve, DrawNumbers, Intent};
//!
//! let result = resolve(DrawNumbers::new(123, 456, 789));
//! assert_eq!(result.changing_line, 3);
//! assert_eq!(classify("我的運勢如何？"), Intent::Divination);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::prompts;
pub use domain::{
    changing_line, classify, draw, draw_with, format_divination, format_persona,
    numbers_or_draw, resolve, resolve_numbers, score, DivinationResult, DomainError, DrawNumbers,
    Hexagram, Intent, IntentScore, Persona, Trigram, DRAW_RANGE, HEXAGRAMS, TRIGRAMS,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, TokenUsage,
};
