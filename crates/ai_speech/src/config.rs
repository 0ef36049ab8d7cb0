//! Configuration for speech processing

use serde::{Deserialize, Serialize};

use crate::types::VoiceSettings;

/// Configuration for the ElevenLabs TTS / voices / cloning client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// ElevenLabs API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// ElevenLabs API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model for conversational and narration synthesis
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Model for long-form document reading
    #[serde(default = "default_long_form_model")]
    pub long_form_model: String,

    /// Default voice for synthesis
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Voice settings sent with every synthesis request
    #[serde(default)]
    pub voice_settings: VoiceSettings,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_tts_model() -> String {
    "eleven_monolingual_v1".to_string()
}

fn default_long_form_model() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_voice() -> String {
    // Rachel
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            tts_model: default_tts_model(),
            long_form_model: default_long_form_model(),
            default_voice: default_voice(),
            voice_settings: VoiceSettings::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-api-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("ElevenLabs API key is required".to_string());
        }

        if self.default_voice.is_empty() {
            return Err("Default voice must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Configuration for the speech recognizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Recognition endpoint accepting raw WAV bodies
    #[serde(default = "default_recognizer_endpoint")]
    pub endpoint: String,

    /// Recognizer API key (passed as `key` query parameter)
    #[serde(default)]
    pub api_key: Option<String>,

    /// BCP-47 language tag for recognition
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_recognizer_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_recognizer_endpoint() -> String {
    "http://www.google.com/speech-api/v2/recognize".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

const fn default_recognizer_timeout_ms() -> u64 {
    30000
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recognizer_endpoint(),
            api_key: None,
            language: default_language(),
            timeout_ms: default_recognizer_timeout_ms(),
        }
    }
}

impl RecognizerConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self::default()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Recognizer endpoint must not be empty".to_string());
        }

        if self.language.is_empty() {
            return Err("Recognizer language must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
