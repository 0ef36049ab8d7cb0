//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer. Contains adapters for
//! Gemini inference and the ElevenLabs / recognizer speech stack, plus the
//! layered application configuration.

pub mod adapters;
pub mod config;

pub use adapters::{GeminiInferenceAdapter, SpeechAdapter};
pub use config::{AppConfig, Environment, ServerConfig};
