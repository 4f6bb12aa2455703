//! Integration tests for GeminiClient against a mock Gemini API.

use std::time::Duration;

use polyglot_core::generation::config::GenerationConfig;
use polyglot_core::generation::gemini::GeminiClient;
use polyglot_core::generation::{GenerationError, GenerationService};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-api-key")
        .with_base_url(server.uri())
        .with_model("gemini-1.5-flash")
}

#[tokio::test]
async fn generate_posts_prompt_and_returns_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(body_json(serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": "Respond to the following message in es: Hello"}]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "  ¡Hola!  "}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = client_for(&mock_server)
        .generate("Respond to the following message in es: Hello")
        .await
        .expect("generation succeeds");

    // Trimming is the caller's job.
    assert_eq!(text, "  ¡Hola!  ");
}

#[tokio::test]
async fn provider_error_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).generate("hi").await.unwrap_err();

    match &err {
        GenerationError::Api { status, message } => {
            assert_eq!(*status, 429);
            assert_eq!(message, "Resource has been exhausted (e.g. check quota).");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "429 Resource has been exhausted (e.g. check quota)."
    );
}

#[tokio::test]
async fn invalid_key_is_an_api_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).generate("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Api { status: 400, .. }));
}

#[tokio::test]
async fn blocked_prompt_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).generate("hi").await.unwrap_err();
    assert_eq!(err.to_string(), "Prompt blocked: SAFETY");
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).generate("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Malformed(_)));
}

#[tokio::test]
async fn empty_error_body_falls_back_to_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).generate("hi").await.unwrap_err();
    assert_eq!(err.to_string(), "503 Service Unavailable");
}

#[tokio::test]
async fn request_timeout_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(serde_json::json!({
                    "candidates": [{"content": {"parts": [{"text": "too late"}]}}]
                })),
        )
        .mount(&mock_server)
        .await;

    let mut config = GenerationConfig::new("test-api-key");
    config.base_url = mock_server.uri();
    config.request_timeout = Some(Duration::from_millis(100));

    let err = GeminiClient::from_config(&config)
        .expect("client builds")
        .generate("hi")
        .await
        .unwrap_err();

    match err {
        GenerationError::Request(e) => assert!(e.is_timeout(), "expected timeout, got {e}"),
        other => panic!("unexpected error: {other:?}"),
    }
}
