use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use yijing::{ChatMessage, CompletionOptions, DomainError, LlmProvider};
use yijing_server::adapters::OpenAiProvider;
use yijing_server::config::OpenAiConfig;

fn provider(base_url: String, timeout: Duration) -> OpenAiProvider {
    OpenAiProvider::new(&OpenAiConfig {
        api_key: "sk-test".to_string(),
        base_url,
        model: "gpt-4o-mini".to_string(),
        timeout,
    })
    .unwrap()
}

#[tokio::test]
async fn test_completion_is_parsed_and_trimmed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test")
                .json_body_partial(
                    r#"{
                        "model": "gpt-4o-mini",
                        "max_tokens": 600,
                        "messages": [
                            {"role": "system", "content": "persona"},
                            {"role": "user", "content": "你是誰"}
                        ]
                    }"#,
                );
            then.status(200).json_body(json!({
                "id": "chatcmpl-1",
                "model": "gpt-4o-mini-2024-07-18",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "  我是陳老師。 "},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
            }));
        })
        .await;

    let llm = provider(server.base_url(), Duration::from_secs(5));
    let messages = [ChatMessage::system("persona"), ChatMessage::user("你是誰")];
    let options = CompletionOptions::default().with_max_tokens(600);

    let response = llm.complete(&messages, &options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, "我是陳老師。");
    assert_eq!(response.model, "gpt-4o-mini-2024-07-18");
    assert_eq!(response.usage.total_tokens, 15);
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401).json_body(json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            }));
        })
        .await;

    let llm = provider(server.base_url(), Duration::from_secs(5));
    let err = llm
        .complete_simple("sys", "hi", &CompletionOptions::default())
        .await
        .unwrap_err();

    match err {
        DomainError::ExternalService(message) => {
            assert!(message.contains("401"));
            assert!(message.contains("Incorrect API key provided"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"model": "gpt-4o-mini", "choices": []}));
        })
        .await;

    let llm = provider(server.base_url(), Duration::from_secs(5));
    let result = llm
        .complete_simple("sys", "hi", &CompletionOptions::default())
        .await;
    assert!(matches!(result, Err(DomainError::ExternalService(_))));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({"choices": []}));
        })
        .await;

    let llm = provider(server.base_url(), Duration::from_millis(200));
    let err = llm
        .complete_simple("sys", "hi", &CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_unavailable(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_unavailable() {
    // Nothing listens on the discard port
    let llm = provider("http://127.0.0.1:9".to_string(), Duration::from_secs(2));
    let err = llm
        .complete_simple("sys", "hi", &CompletionOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_unavailable(), "expected unavailable, got {err:?}");
}
