//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

pub mod openai;

pub use openai::OpenAiProvider;
