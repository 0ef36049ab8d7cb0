//! Gemini inference adapter - Implements InferencePort using ai_core

use ai_core::{GeminiClient, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest};
use application::error::ApplicationError;
use application::ports::{InferencePort, InferenceResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for LLM inference backed by the Gemini client
pub struct GeminiInferenceAdapter {
    client: GeminiClient,
}

impl std::fmt::Debug for GeminiInferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInferenceAdapter")
            .finish_non_exhaustive()
    }
}

impl GeminiInferenceAdapter {
    /// Create a new inference adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the client fails to initialize.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let client = GeminiClient::new(config)
            .map_err(|e: InferenceError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }

    /// Map inference error to application error
    fn map_error(err: InferenceError) -> ApplicationError {
        match err {
            InferenceError::Configuration(e) => ApplicationError::Configuration(e),
            InferenceError::RateLimited => ApplicationError::RateLimited,
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let response = self
            .client
            .generate(InferenceRequest::new(prompt))
            .await
            .map_err(Self::map_error)?;

        debug!(
            model = %response.model,
            content_len = response.content.len(),
            "Inference complete"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
        })
    }

    async fn is_healthy(&self) -> bool {
        self.client.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> String {
        self.client.default_model().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter_for(server: &MockServer) -> GeminiInferenceAdapter {
        let config = InferenceConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.uri(),
            ..Default::default()
        };
        GeminiInferenceAdapter::new(config).unwrap()
    }

    #[test]
    fn new_fails_without_api_key() {
        let result = GeminiInferenceAdapter::new(InferenceConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[tokio::test]
    async fn generate_maps_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "Answer"}], "role": "model"},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {
                    "promptTokenCount": 5,
                    "candidatesTokenCount": 7,
                    "totalTokenCount": 12
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let result = adapter.generate("Question").await.unwrap();

        assert_eq!(result.content, "Answer");
        assert_eq!(result.model, "gemini-2.0-flash-exp");
        assert_eq!(result.tokens_used, Some(12));
    }

    #[tokio::test]
    async fn generate_maps_rate_limit() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {
                    "code": 429,
                    "message": "Quota exceeded",
                    "status": "RESOURCE_EXHAUSTED"
                }
            })))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let result = adapter.generate("Question").await;

        assert!(matches!(result, Err(ApplicationError::RateLimited)));
    }

    #[tokio::test]
    async fn is_healthy_reflects_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        assert!(adapter.is_healthy().await);
    }

    #[tokio::test]
    async fn current_model_is_default() {
        let server = MockServer::start().await;
        let adapter = adapter_for(&server);
        assert_eq!(adapter.current_model(), "gemini-2.0-flash-exp");
    }
}
