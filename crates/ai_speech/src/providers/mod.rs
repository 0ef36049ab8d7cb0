//! Speech processing provider implementations
//!
//! Contains concrete implementations of the speech ports.

pub mod elevenlabs;
pub mod recognizer;

pub use elevenlabs::ElevenLabsProvider;
pub use recognizer::WebSpeechRecognizer;
