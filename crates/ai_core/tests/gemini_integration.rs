//! Integration tests for the Gemini client against a mock HTTP server

use ai_core::{GeminiClient, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> InferenceConfig {
    InferenceConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..Default::default()
    }
}

fn generate_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 10,
            "candidatesTokenCount": 20,
            "totalTokenCount": 30
        }
    })
}

#[tokio::test]
async fn generate_returns_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response("Hello there!")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let response = client
        .generate(InferenceRequest::new("Say hello"))
        .await
        .unwrap();

    assert_eq!(response.content, "Hello there!");
    assert_eq!(response.model, "gemini-2.0-flash-exp");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));

    let usage = response.usage.unwrap();
    assert_eq!(usage.prompt_tokens, 10);
    assert_eq!(usage.completion_tokens, 20);
    assert_eq!(usage.total_tokens, 30);
}

#[tokio::test]
async fn generate_sends_prompt_and_generation_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
        .and(body_partial_json(json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": "What is Rust?"}]
            }],
            "generationConfig": {
                "temperature": 0.2
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response("A language.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let response = client
        .generate(InferenceRequest::new("What is Rust?").with_temperature(0.2))
        .await
        .unwrap();

    assert_eq!(response.content, "A language.");
}

#[tokio::test]
async fn generate_uses_request_model_override() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let response = client
        .generate(InferenceRequest::new("hi").with_model("gemini-1.5-pro"))
        .await
        .unwrap();

    assert_eq!(response.model, "gemini-1.5-pro");
}

#[tokio::test]
async fn generate_concatenates_multiple_parts() {
    let server = MockServer::start().await;

    let body = json!({
        "candidates": [{
            "content": {
                "parts": [{"text": "Hello "}, {"text": "world"}],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let response = client.generate(InferenceRequest::new("hi")).await.unwrap();

    assert_eq!(response.content, "Hello world");
    assert!(response.usage.is_none());
}

#[tokio::test]
async fn generate_maps_rate_limit_error() {
    let server = MockServer::start().await;

    let error_body = json!({
        "error": {
            "code": 429,
            "message": "Resource has been exhausted",
            "status": "RESOURCE_EXHAUSTED"
        }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(error_body))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let result = client.generate(InferenceRequest::new("hi")).await;

    assert!(matches!(result, Err(InferenceError::RateLimited)));
}

#[tokio::test]
async fn generate_maps_unknown_model_error() {
    let server = MockServer::start().await;

    let error_body = json!({
        "error": {
            "code": 404,
            "message": "Model not found",
            "status": "NOT_FOUND"
        }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let result = client
        .generate(InferenceRequest::new("hi").with_model("no-such-model"))
        .await;

    match result {
        Err(InferenceError::ModelNotAvailable(model)) => assert_eq!(model, "no-such-model"),
        other => panic!("Expected ModelNotAvailable, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_maps_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let result = client.generate(InferenceRequest::new("hi")).await;

    assert!(matches!(result, Err(InferenceError::ServerError(_))));
}

#[tokio::test]
async fn generate_fails_on_empty_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    let result = client.generate(InferenceRequest::new("hi")).await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn health_check_reports_reachable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
async fn health_check_reports_unreachable_on_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = GeminiClient::new(config_for(&server)).unwrap();
    assert!(!client.health_check().await.unwrap());
}
