//! Inference port - Interface for LLM inference

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Number of tokens used (if available)
    pub tokens_used: Option<u32>,
}

/// Port for inference operations
///
/// The caller assembles the full prompt (system string, prior turns, current
/// question) before handing it to the port.
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a response for an assembled prompt
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;

    /// Check if the inference backend is healthy
    async fn is_healthy(&self) -> bool;

    /// Get the name of the current model
    fn current_model(&self) -> String;
}
