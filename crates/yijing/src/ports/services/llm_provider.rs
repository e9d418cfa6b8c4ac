//! LLM Provider Port
//!
//! Abstract interface for the external text-generation collaborator.
//! The server ships an OpenAI implementation; tests substitute fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Options for LLM completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl CompletionOptions {
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: Some(800),
            temperature: Some(0.7),
        }
    }
}

/// Response from LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// LLM Provider interface
///
/// # Example
///
/// ```rust,ignore
/// use yijing::ports::LlmProvider;
///
/// struct OpenAiProvider { /* ... */ }
///
/// #[async_trait]
/// impl LlmProvider for OpenAiProvider {
///     async fn complete(&self, messages: &[ChatMessage], options: &CompletionOptions)
///         -> Result<CompletionResponse, DomainError> {
///         // Call the chat completions API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError>;

    /// Generate a completion for a system + user prompt pair
    async fn complete_simple(
        &self,
        system: &str,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, DomainError> {
        let messages = vec![ChatMessage::system(system), ChatMessage::user(prompt)];
        let response = self.complete(&messages, options).await?;
        Ok(response.content)
    }

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl LlmProvider for Echo {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            options: &CompletionOptions,
        ) -> Result<CompletionResponse, DomainError> {
            let content = messages
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("|");
            Ok(CompletionResponse {
                content: format!("{}@{}", content, options.max_tokens.unwrap_or_default()),
                model: "echo".to_string(),
                usage: TokenUsage::default(),
                finish_reason: Some("stop".to_string()),
            })
        }

        fn provider_name(&self) -> &str {
            "echo"
        }

        fn model_id(&self) -> &str {
            "echo-1"
        }
    }

    #[tokio::test]
    async fn test_complete_simple_sends_system_then_user() {
        let options = CompletionOptions::default().with_max_tokens(600);
        let text = Echo.complete_simple("sys", "hi", &options).await.unwrap();
        assert_eq!(text, "sys|hi@600");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::assistant("ok")).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
