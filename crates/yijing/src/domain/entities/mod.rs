//! Domain Entities
//!
//! - Trigram (卦): one of the eight three-line figures
//! - Hexagram: a stacked (upper, lower) pair of trigrams
//! - DivinationResult: one resolved draw
//! - Persona: the voice used for background questions

mod divination;
mod hexagram;
mod persona;
mod trigram;

pub use divination::*;
pub use hexagram::*;
pub use persona::*;
pub use trigram::*;
