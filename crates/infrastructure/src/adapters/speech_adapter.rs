//! Speech adapter - Implements SpeechPort using the ai_speech crate
//!
//! Bridges the application port to the ElevenLabs provider (synthesis,
//! voices, cloning) and the web speech recognizer (transcription).

use std::sync::Arc;

use ai_speech::{
    AudioData, AudioFormat, ElevenLabsProvider, RecognizerConfig, SpeechConfig, SpeechError,
    SpeechToText, TextToSpeech, VoiceCloning, WebSpeechRecognizer,
};
use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult, TranscriptionResult, VoiceSummary};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for speech services using the ai_speech crate
pub struct SpeechAdapter {
    provider: Arc<ElevenLabsProvider>,
    recognizer: Arc<WebSpeechRecognizer>,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("provider", &"ElevenLabsProvider")
            .field("recognizer", &"WebSpeechRecognizer")
            .finish()
    }
}

impl SpeechAdapter {
    /// Create a new speech adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the provider or recognizer fails to initialize.
    pub fn new(
        speech: SpeechConfig,
        recognizer: RecognizerConfig,
    ) -> Result<Self, ApplicationError> {
        let provider = ElevenLabsProvider::new(speech)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;
        let recognizer = WebSpeechRecognizer::new(recognizer)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self {
            provider: Arc::new(provider),
            recognizer: Arc::new(recognizer),
        })
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::NotRecognized => ApplicationError::SpeechNotRecognized,
            SpeechError::RateLimited => ApplicationError::RateLimited,
            SpeechError::InvalidAudio(e) => {
                ApplicationError::Validation(format!("Invalid audio: {e}"))
            },
            SpeechError::VoiceNotFound(v) => {
                ApplicationError::Validation(format!("Voice not found: {v}"))
            },
            other => ApplicationError::Speech(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, audio_wav), fields(data_size = audio_wav.len()))]
    async fn transcribe(
        &self,
        audio_wav: Vec<u8>,
    ) -> Result<TranscriptionResult, ApplicationError> {
        let audio = AudioData::new(audio_wav, AudioFormat::Wav);

        let transcription = self
            .recognizer
            .transcribe(audio)
            .await
            .map_err(Self::map_error)?;

        debug!(
            text_len = transcription.text.len(),
            confidence = ?transcription.confidence,
            "Transcription complete"
        );

        Ok(TranscriptionResult {
            text: transcription.text,
            confidence: transcription.confidence,
        })
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text, voice)
            .await
            .map_err(Self::map_error)?;

        debug!(audio_size = audio.size_bytes(), "Synthesis complete");

        Ok(SynthesisResult::mpeg(audio.into_data()))
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize_long_form(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesisResult, ApplicationError> {
        let model = self.provider.long_form_model_name().to_string();
        let audio = self
            .provider
            .synthesize_with_model(text, voice, &model)
            .await
            .map_err(Self::map_error)?;

        Ok(SynthesisResult::mpeg(audio.into_data()))
    }

    async fn list_voices(&self) -> Result<Vec<VoiceSummary>, ApplicationError> {
        let voices = self.provider.list_voices().await.map_err(Self::map_error)?;

        Ok(voices
            .into_iter()
            .map(|v| VoiceSummary {
                id: v.id,
                name: v.name,
                category: v.category,
            })
            .collect())
    }

    #[instrument(skip(self, samples), fields(sample_count = samples.len()))]
    async fn clone_voice(
        &self,
        name: &str,
        description: &str,
        samples: Vec<Vec<u8>>,
    ) -> Result<String, ApplicationError> {
        let samples: Vec<AudioData> = samples
            .into_iter()
            .map(|data| AudioData::new(data, AudioFormat::Mp3))
            .collect();

        self.provider
            .clone_voice(name, description, samples)
            .await
            .map_err(Self::map_error)
    }

    async fn is_available(&self) -> bool {
        <ElevenLabsProvider as TextToSpeech>::is_available(&self.provider).await
    }

    fn default_voice(&self) -> String {
        <ElevenLabsProvider as TextToSpeech>::default_voice(&self.provider).to_string()
    }
}
