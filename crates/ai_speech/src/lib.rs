//! AI Speech - Speech-to-Text, Text-to-Speech, and voice cloning abstractions
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe audio to text (STT)
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//! - `VoiceCloning` - Create new voices from audio samples
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - ElevenLabs TTS, voice listing, and instant voice cloning
//! - Google Web Speech-style recognition endpoint (STT)

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::{RecognizerConfig, SpeechConfig};
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech, VoiceCloning};
pub use providers::elevenlabs::ElevenLabsProvider;
pub use providers::recognizer::WebSpeechRecognizer;
pub use types::{AudioData, AudioFormat, Transcription, VoiceInfo, VoiceSettings};
