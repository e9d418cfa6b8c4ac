//! Service Ports
//!
//! - `LlmProvider`: text generation for interpretations and persona replies

pub mod llm_provider;

pub use llm_provider::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, TokenUsage,
};
