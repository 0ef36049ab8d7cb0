//! AI Core - LLM inference client
//!
//! Provides the `InferenceEngine` abstraction and a Gemini implementation
//! talking to the hosted `generateContent` API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiClient;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
