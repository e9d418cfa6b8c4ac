//! Oracle Application Service (Use Case)
//!
//! Composes classification, symbol resolution, the LLM collaborator and
//! formatting into one chat turn. Collaborator failures never escape:
//! each call site degrades to its own fixed text.

use std::sync::Arc;

use yijing::prompts::{self, INTERPRETER_SYSTEM_PROMPT, PERSONA_FAILED, PERSONA_UNAVAILABLE};
use yijing::{
    classify, format_divination, format_persona, numbers_or_draw, resolve, CompletionOptions,
    DivinationResult, DrawNumbers, Hexagram, Intent, LlmProvider, Persona,
};

const INTERPRETATION_MAX_TOKENS: u32 = 800;
const PERSONA_MAX_TOKENS: u32 = 600;
const TEMPERATURE: f32 = 0.7;

/// Result of one chat turn
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub response: String,
    pub intent: Intent,
    /// Present only for divination
    pub hexagram: Option<&'static Hexagram>,
}

/// Application service for chat requests
#[derive(Clone)]
pub struct OracleService {
    llm: Option<Arc<dyn LlmProvider>>,
    persona: Persona,
}

impl OracleService {
    pub fn new(llm: Option<Arc<dyn LlmProvider>>, persona: Persona) -> Self {
        Self { llm, persona }
    }

    /// Service with no collaborator: every call site uses its fallback text
    pub fn offline() -> Self {
        Self::new(None, Persona::default())
    }

    pub fn llm_enabled(&self) -> bool {
        self.llm.is_some()
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Handle one question. `numbers` are used verbatim when supplied.
    pub async fn chat(&self, message: &str, numbers: Option<DrawNumbers>) -> ChatOutcome {
        match classify(message) {
            Intent::Divination => {
                let result = resolve(numbers_or_draw(numbers));
                tracing::info!(
                    "🔮 Divination: numbers [{}] -> #{} {} (line {})",
                    result.numbers,
                    result.hexagram.number,
                    result.hexagram.name,
                    result.changing_line
                );

                let interpretation = self.interpret(message, &result).await;
                ChatOutcome {
                    response: format_divination(message, &result, &interpretation),
                    intent: Intent::Divination,
                    hexagram: Some(result.hexagram),
                }
            }
            Intent::Persona => {
                tracing::info!("💬 Persona question");
                let reply = self.answer_as_persona(message).await;
                ChatOutcome {
                    response: format_persona(&reply),
                    intent: Intent::Persona,
                    hexagram: None,
                }
            }
        }
    }

    /// Interpretation text for a reading, or a fallback
    pub async fn interpret(&self, question: &str, result: &DivinationResult) -> String {
        let Some(llm) = &self.llm else {
            return prompts::interpretation_unavailable();
        };

        let prompt = prompts::interpretation_prompt(question, result);
        let options = CompletionOptions::default()
            .with_max_tokens(INTERPRETATION_MAX_TOKENS)
            .with_temperature(TEMPERATURE);

        match llm
            .complete_simple(INTERPRETER_SYSTEM_PROMPT, &prompt, &options)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                tracing::warn!("⚠️  {} returned an empty interpretation", llm.provider_name());
                prompts::interpretation_failed(result.hexagram)
            }
            Err(e) => {
                tracing::warn!("⚠️  Interpretation via {} failed: {}", llm.provider_name(), e);
                prompts::interpretation_failed(result.hexagram)
            }
        }
    }

    /// Persona-voiced answer, or a fallback
    pub async fn answer_as_persona(&self, question: &str) -> String {
        let Some(llm) = &self.llm else {
            return PERSONA_UNAVAILABLE.to_string();
        };

        let options = CompletionOptions::default()
            .with_max_tokens(PERSONA_MAX_TOKENS)
            .with_temperature(TEMPERATURE);

        match llm
            .complete_simple(&self.persona.description, question, &options)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                tracing::warn!("⚠️  {} returned an empty persona reply", llm.provider_name());
                PERSONA_FAILED.to_string()
            }
            Err(e) => {
                tracing::warn!("⚠️  Persona reply via {} failed: {}", llm.provider_name(), e);
                PERSONA_FAILED.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use yijing::{ChatMessage, CompletionResponse, DomainError, TokenUsage};

    /// Replies with a fixed text and records what it was asked
    struct Scripted {
        reply: Result<String, String>,
        seen: Mutex<Vec<(Vec<ChatMessage>, CompletionOptions)>>,
    }

    impl Scripted {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err("boom".to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for Scripted {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            options: &CompletionOptions,
        ) -> Result<CompletionResponse, DomainError> {
            self.seen
                .lock()
                .unwrap()
                .push((messages.to_vec(), options.clone()));
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    content: text.clone(),
                    model: "scripted".to_string(),
                    usage: TokenUsage::default(),
                    finish_reason: None,
                }),
                Err(e) => Err(DomainError::ExternalService(e.clone())),
            }
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }

        fn model_id(&self) -> &str {
            "scripted-1"
        }
    }

    fn service_with(llm: Arc<Scripted>) -> OracleService {
        OracleService::new(Some(llm), Persona::default())
    }

    #[tokio::test]
    async fn test_divination_uses_supplied_numbers() {
        let llm = Scripted::ok("  順勢而為。  ");
        let service = service_with(llm.clone());

        let outcome = service
            .chat("我的運勢如何", Some(DrawNumbers::new(102, 103, 105)))
            .await;

        assert_eq!(outcome.intent, Intent::Divination);
        assert_eq!(outcome.hexagram.map(|h| h.number), Some(4));
        assert!(outcome.response.contains("【起卦數字】\n102, 103, 105"));
        assert!(outcome.response.contains("【陳老師解讀】\n順勢而為。\n"));

        let seen = llm.seen.lock().unwrap();
        let (messages, options) = &seen[0];
        assert_eq!(messages[0], ChatMessage::system(INTERPRETER_SYSTEM_PROMPT));
        assert!(messages[1].content.contains("我的運勢如何"));
        assert_eq!(options.max_tokens, Some(800));
        assert_eq!(options.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn test_divination_draws_numbers_when_missing() {
        let outcome = OracleService::offline().chat("占卜", None).await;
        assert_eq!(outcome.intent, Intent::Divination);
        assert!(outcome.hexagram.is_some());
    }

    #[tokio::test]
    async fn test_persona_reply_is_returned_verbatim() {
        let llm = Scripted::ok("我住在桃園。");
        let service = service_with(llm.clone());

        let outcome = service.chat("請介紹您的背景", None).await;

        assert_eq!(outcome.intent, Intent::Persona);
        assert_eq!(outcome.response, "我住在桃園。");
        assert!(outcome.hexagram.is_none());

        let seen = llm.seen.lock().unwrap();
        let (messages, options) = &seen[0];
        assert_eq!(messages[0].content, service.persona().description);
        assert_eq!(messages[1], ChatMessage::user("請介紹您的背景"));
        assert_eq!(options.max_tokens, Some(600));
    }

    #[tokio::test]
    async fn test_offline_fallbacks() {
        let service = OracleService::offline();
        assert!(!service.llm_enabled());

        let divination = service.chat("占卜", Some(DrawNumbers::new(1, 1, 1))).await;
        assert!(divination
            .response
            .contains(&prompts::interpretation_unavailable()));

        let persona = service.chat("介紹你自己", None).await;
        assert_eq!(persona.response, PERSONA_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_failures_use_call_site_fallbacks() {
        let service = service_with(Scripted::failing());

        let divination = service.chat("占卜", Some(DrawNumbers::new(1, 1, 1))).await;
        assert!(divination
            .response
            .contains("根據 乾為天 的卦象，建議您保持大吉的心態。"));

        let persona = service.chat("介紹你自己", None).await;
        assert_eq!(persona.response, PERSONA_FAILED);
    }

    #[tokio::test]
    async fn test_blank_reply_counts_as_failure() {
        let service = service_with(Scripted::ok("   "));
        let persona = service.chat("介紹你自己", None).await;
        assert_eq!(persona.response, PERSONA_FAILED);
    }
}
