//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription, VoiceInfo};

/// Port for Speech-to-Text (STT) implementations
///
/// Implementations of this trait convert audio data to text transcriptions.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::NotRecognized` when no transcript could be
    /// extracted, or another `SpeechError` if the request fails.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Check if the STT service is available
    async fn is_available(&self) -> bool;
}

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to audio speech.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech with the default model
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `voice` - Optional voice ID to use (uses default if None)
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<AudioData, SpeechError>;

    /// Convert text to speech with a specific model
    ///
    /// Long-form reading uses a different synthesis model than conversation.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize_with_model(
        &self,
        text: &str,
        voice: Option<&str>,
        model: &str,
    ) -> Result<AudioData, SpeechError>;

    /// List available voices
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if listing fails.
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError>;

    /// Check if the TTS service is available
    async fn is_available(&self) -> bool;

    /// Get the name of the default TTS model
    fn model_name(&self) -> &str;

    /// Get the name of the long-form reading model
    fn long_form_model_name(&self) -> &str;

    /// Get the default voice ID
    fn default_voice(&self) -> &str;
}

/// Port for voice cloning implementations
#[async_trait]
pub trait VoiceCloning: Send + Sync {
    /// Create a cloned voice from audio samples
    ///
    /// # Arguments
    ///
    /// * `name` - Name for the new voice
    /// * `description` - Free-text description of the voice
    /// * `samples` - Audio samples to clone from (at least one)
    ///
    /// # Returns
    ///
    /// Returns the vendor-assigned voice ID.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::CloningFailed` if the vendor rejects the request.
    async fn clone_voice(
        &self,
        name: &str,
        description: &str,
        samples: Vec<AudioData>,
    ) -> Result<String, SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioFormat;

    struct MockSpeechToText {
        available: bool,
    }

    #[async_trait]
    impl SpeechToText for MockSpeechToText {
        async fn transcribe(&self, _audio: AudioData) -> Result<Transcription, SpeechError> {
            Ok(Transcription::new("Mock transcription"))
        }

        async fn is_available(&self) -> bool {
            self.available
        }
    }

    struct MockTextToSpeech {
        voice: String,
    }

    #[async_trait]
    impl TextToSpeech for MockTextToSpeech {
        async fn synthesize(
            &self,
            _text: &str,
            _voice: Option<&str>,
        ) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(vec![0, 1, 2, 3], AudioFormat::Mp3))
        }

        async fn synthesize_with_model(
            &self,
            _text: &str,
            _voice: Option<&str>,
            _model: &str,
        ) -> Result<AudioData, SpeechError> {
            Ok(AudioData::new(vec![0, 1, 2, 3], AudioFormat::Mp3))
        }

        async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
            Ok(vec![VoiceInfo::new("21m00Tcm4TlvDq8ikWAM", "Rachel")])
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "eleven_monolingual_v1"
        }

        fn long_form_model_name(&self) -> &str {
            "eleven_multilingual_v2"
        }

        fn default_voice(&self) -> &str {
            &self.voice
        }
    }

    #[tokio::test]
    async fn mock_stt_transcribes() {
        let stt = MockSpeechToText { available: true };

        let audio = AudioData::new(vec![0, 1, 2], AudioFormat::Wav);
        let result = stt.transcribe(audio).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().text, "Mock transcription");
    }

    #[tokio::test]
    async fn mock_stt_availability() {
        let available = MockSpeechToText { available: true };
        let unavailable = MockSpeechToText { available: false };

        assert!(available.is_available().await);
        assert!(!unavailable.is_available().await);
    }

    #[tokio::test]
    async fn mock_tts_synthesizes() {
        let tts = MockTextToSpeech {
            voice: "21m00Tcm4TlvDq8ikWAM".to_string(),
        };

        let result = tts.synthesize("Hello", None).await;

        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mock_tts_lists_voices() {
        let tts = MockTextToSpeech {
            voice: "21m00Tcm4TlvDq8ikWAM".to_string(),
        };

        let voices = tts.list_voices().await.unwrap();

        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].name, "Rachel");
    }

    #[test]
    fn mock_tts_default_voice() {
        let tts = MockTextToSpeech {
            voice: "custom".to_string(),
        };

        assert_eq!(tts.default_voice(), "custom");
    }
}
