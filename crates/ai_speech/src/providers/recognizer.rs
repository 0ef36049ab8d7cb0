//! Web Speech recognizer
//!
//! Implements `SpeechToText` against a Google Web Speech-style `recognize`
//! endpoint. The endpoint accepts a raw WAV body and answers with
//! newline-delimited JSON; the first line with a non-empty `result` array
//! carries the transcript alternatives.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::RecognizerConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, AudioFormat, Transcription};

/// Speech recognizer posting WAV audio to a recognize endpoint
#[derive(Debug, Clone)]
pub struct WebSpeechRecognizer {
    client: Client,
    config: RecognizerConfig,
}

impl WebSpeechRecognizer {
    /// Create a new recognizer
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: RecognizerConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the recognize URL with language and optional key
    fn recognize_url(&self) -> String {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => format!(
                "{}?lang={}&key={}",
                self.config.endpoint, self.config.language, key
            ),
            _ => format!("{}?lang={}", self.config.endpoint, self.config.language),
        }
    }

    /// Extract the best transcript from a newline-delimited JSON body
    fn parse_transcript(body: &str) -> Option<Transcription> {
        for line in body.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Ok(response) = serde_json::from_str::<RecognizeResponse>(line) else {
                continue;
            };

            // The endpoint emits an empty {"result":[]} line before the
            // real result; keep scanning until a line carries alternatives.
            let Some(alternative) = response
                .result
                .into_iter()
                .find_map(|r| r.alternative.into_iter().next())
            else {
                continue;
            };

            if alternative.transcript.trim().is_empty() {
                continue;
            }

            let mut transcription = Transcription::new(alternative.transcript);
            if let Some(confidence) = alternative.confidence {
                transcription = transcription.with_confidence(confidence);
            }
            return Some(transcription);
        }

        None
    }
}

/// One line of the recognize response stream
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Debug, Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<RecognizeAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognizeAlternative {
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

#[async_trait]
impl SpeechToText for WebSpeechRecognizer {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        debug!("Recognizing speech");

        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        if audio.format() != AudioFormat::Wav {
            return Err(SpeechError::InvalidAudio(format!(
                "Recognizer accepts WAV audio, got {:?}",
                audio.format()
            )));
        }

        let response = self
            .client
            .post(self.recognize_url())
            .header("Content-Type", "audio/wav")
            .body(audio.into_data())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Recognition request failed");
            return Err(SpeechError::TranscriptionFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read body: {e}")))?;

        let transcription = Self::parse_transcript(&body).ok_or(SpeechError::NotRecognized)?;

        debug!(
            text_len = transcription.text.len(),
            confidence = ?transcription.confidence,
            "Recognition complete"
        );

        Ok(transcription)
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(&self.config.endpoint)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            // Any HTTP answer means the endpoint is reachable
            Ok(_) => true,
            Err(e) => {
                warn!("Recognizer availability check failed: {}", e);
                false
            },
        }
    }
}
