//! OpenAI Chat Completions adapter
//!
//! Implements the `LlmProvider` port against `POST {base_url}/chat/completions`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use yijing::{
    ChatMessage, CompletionOptions, CompletionResponse, DomainError, LlmProvider, TokenUsage,
};

use crate::config::OpenAiConfig;

/// OpenAI implementation of `LlmProvider`
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

impl OpenAiProvider {
    /// Build a provider whose HTTP client enforces the configured timeout
    pub fn new(config: &OpenAiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("yijing-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::ExternalService(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::ExternalService("OpenAI returned no choices".to_string()))?;

        let usage = payload
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default().trim().to_string(),
            model: if payload.model.is_empty() {
                self.model.clone()
            } else {
                payload.model
            },
            usage,
            finish_reason: choice.finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn map_transport_error(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::Timeout(err.to_string())
    } else if err.is_connect() {
        DomainError::Unavailable(err.to_string())
    } else {
        DomainError::ExternalService(format!("Request failed: {err}"))
    }
}

fn map_http_error(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
            DomainError::Unavailable(format!("OpenAI API ({}): {}", status.as_u16(), message))
        }
        _ => DomainError::ExternalService(format!(
            "OpenAI API error ({}): {}",
            status.as_u16(),
            message
        )),
    }
}
