//! ElevenLabs Speech Provider
//!
//! Implements `TextToSpeech` and `VoiceCloning` against the ElevenLabs API.
//!
//! Synthesis returns MPEG audio. Conversational and narration synthesis use
//! `eleven_monolingual_v1`; long-form reading uses `eleven_multilingual_v2`.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{TextToSpeech, VoiceCloning};
use crate::types::{AudioData, AudioFormat, VoiceInfo, VoiceSettings};

/// ElevenLabs provider implementing TTS and voice cloning
#[derive(Debug, Clone)]
pub struct ElevenLabsProvider {
    client: Client,
    config: SpeechConfig,
}

impl ElevenLabsProvider {
    /// Create a new ElevenLabs provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the synthesis endpoint URL for a voice
    fn tts_url(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{voice_id}", self.config.base_url)
    }

    /// Build the voice listing endpoint URL
    fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.config.base_url)
    }

    /// Build the voice cloning endpoint URL
    fn voice_add_url(&self) -> String {
        format!("{}/v1/voices/add", self.config.base_url)
    }

    async fn synthesize_inner(
        &self,
        text: &str,
        voice: Option<&str>,
        model: &str,
    ) -> Result<AudioData, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        let voice = voice.unwrap_or(&self.config.default_voice);

        let request = TtsRequest {
            text,
            model_id: model,
            voice_settings: self.config.voice_settings.clone(),
        };

        let response = self
            .client
            .post(self.tts_url(voice))
            .header("xi-api-key", self.api_key())
            .header("Accept", "audio/mpeg")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, voice = %voice, "Synthesis request failed");

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.detail.status.as_deref() {
                    Some("voice_not_found") => Err(SpeechError::VoiceNotFound(voice.to_string())),
                    Some("too_many_concurrent_requests" | "rate_limit_exceeded") => {
                        Err(SpeechError::RateLimited)
                    },
                    Some("model_not_found") => {
                        Err(SpeechError::ModelNotAvailable(model.to_string()))
                    },
                    _ => Err(SpeechError::SynthesisFailed(api_error.detail.message)),
                };
            }

            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(AudioData::new(audio_bytes.to_vec(), AudioFormat::Mp3))
    }
}

/// ElevenLabs TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs voice listing response
#[derive(Debug, Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Vec<VoiceEntry>,
}

#[derive(Debug, Deserialize)]
struct VoiceEntry {
    voice_id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
}

/// ElevenLabs voice cloning response
#[derive(Debug, Deserialize)]
struct VoiceAddResponse {
    voice_id: String,
}

/// ElevenLabs API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    detail: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    status: Option<String>,
    message: String,
}

#[async_trait]
impl TextToSpeech for ElevenLabsProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<AudioData, SpeechError> {
        debug!("Synthesizing speech with ElevenLabs");
        self.synthesize_inner(text, voice, &self.config.tts_model)
            .await
    }

    #[instrument(skip(self, text), fields(text_len = text.len(), model = %model))]
    async fn synthesize_with_model(
        &self,
        text: &str,
        voice: Option<&str>,
        model: &str,
    ) -> Result<AudioData, SpeechError> {
        debug!("Synthesizing speech with explicit model");
        self.synthesize_inner(text, voice, model).await
    }

    #[instrument(skip(self))]
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        let response = self
            .client
            .get(self.voices_url())
            .header("xi-api-key", self.api_key())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let voices_response: VoicesResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse voices: {e}")))?;

        debug!(count = voices_response.voices.len(), "Listed voices");

        Ok(voices_response
            .voices
            .into_iter()
            .map(|v| VoiceInfo {
                id: v.voice_id,
                name: v.name,
                category: v.category,
            })
            .collect())
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(self.voices_url())
            .header("xi-api-key", self.api_key())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("ElevenLabs availability check failed: {}", e);
                false
            },
        }
    }

    fn model_name(&self) -> &str {
        &self.config.tts_model
    }

    fn long_form_model_name(&self) -> &str {
        &self.config.long_form_model
    }

    fn default_voice(&self) -> &str {
        &self.config.default_voice
    }
}

#[async_trait]
impl VoiceCloning for ElevenLabsProvider {
    #[instrument(skip(self, samples), fields(name = %name, sample_count = samples.len()))]
    async fn clone_voice(
        &self,
        name: &str,
        description: &str,
        samples: Vec<AudioData>,
    ) -> Result<String, SpeechError> {
        if name.trim().is_empty() {
            return Err(SpeechError::CloningFailed(
                "Voice name cannot be empty".to_string(),
            ));
        }

        if samples.is_empty() {
            return Err(SpeechError::CloningFailed(
                "At least one audio sample is required".to_string(),
            ));
        }

        let mut form = Form::new()
            .text("name", name.to_string())
            .text("description", description.to_string());

        for (i, sample) in samples.into_iter().enumerate() {
            if sample.is_empty() {
                return Err(SpeechError::InvalidAudio(format!(
                    "Sample {i} contains no data"
                )));
            }

            let mime_type = sample.mime_type();
            let part = Part::bytes(sample.into_data())
                .file_name(format!("sample_{i}.mp3"))
                .mime_str(mime_type)
                .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

            form = form.part("files", part);
        }

        let response = self
            .client
            .post(self.voice_add_url())
            .header("xi-api-key", self.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Voice cloning request failed");

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return Err(SpeechError::CloningFailed(api_error.detail.message));
            }

            return Err(SpeechError::CloningFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let add_response: VoiceAddResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        debug!(voice_id = %add_response.voice_id, "Voice clone created");

        Ok(add_response.voice_id)
    }
}
