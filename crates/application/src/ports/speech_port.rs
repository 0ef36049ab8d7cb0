//! Speech port - Interface for transcription, synthesis, and voice cloning

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text
    pub text: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: Option<f32>,
}

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Generated audio data (MPEG)
    pub audio_data: Vec<u8>,
    /// MIME type of the audio
    pub mime_type: String,
}

impl SynthesisResult {
    /// Create an MPEG synthesis result
    #[must_use]
    pub fn mpeg(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data,
            mime_type: "audio/mpeg".to_string(),
        }
    }
}

/// Summary of an available voice
#[derive(Debug, Clone)]
pub struct VoiceSummary {
    /// Voice identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Vendor category (premade, cloned, ...)
    pub category: Option<String>,
}

/// Port for speech processing operations
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe a WAV audio buffer to text
    async fn transcribe(&self, audio_wav: Vec<u8>)
    -> Result<TranscriptionResult, ApplicationError>;

    /// Synthesize speech with the conversational model
    ///
    /// `voice` falls back to the configured default when `None`.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesisResult, ApplicationError>;

    /// Synthesize speech with the long-form reading model
    async fn synthesize_long_form(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesisResult, ApplicationError>;

    /// List available voices
    async fn list_voices(&self) -> Result<Vec<VoiceSummary>, ApplicationError>;

    /// Create a cloned voice from audio samples, returning the assigned voice ID
    async fn clone_voice(
        &self,
        name: &str,
        description: &str,
        samples: Vec<Vec<u8>>,
    ) -> Result<String, ApplicationError>;

    /// Check if the speech vendor is reachable
    async fn is_available(&self) -> bool;

    /// Get the default voice ID
    fn default_voice(&self) -> String;
}
