//! Reader service - Long-document reading
//!
//! Chunks the document, synthesizes every chunk sequentially with the
//! long-form model, concatenates the audio, and asks the LLM for a reading
//! analysis of the opening excerpt. A failed chunk aborts the whole reading.

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{InferencePort, SpeechPort, SynthesisResult},
    services::agent_mode::{AgentMode, build_prompt},
    services::text_chunker::TextChunker,
};

/// Characters of the document sent to the LLM for analysis
const ANALYSIS_EXCERPT_CHARS: usize = 500;

/// Words per minute assumed for the reading-time estimate
const READING_WORDS_PER_MINUTE: f64 = 150.0;

/// A completed document reading
#[derive(Debug)]
pub struct Reading {
    /// Concatenated audio of all chunks
    pub audio: SynthesisResult,
    /// Number of chunks synthesized
    pub chunk_count: usize,
    /// Word count of the document
    pub word_count: usize,
    /// Estimated reading time in minutes
    pub estimated_minutes: f64,
    /// LLM reading analysis of the opening excerpt
    pub analysis: String,
}

/// Service for reading long documents aloud
pub struct ReaderService {
    inference: Arc<dyn InferencePort>,
    speech: Arc<dyn SpeechPort>,
    chunker: TextChunker,
}

impl fmt::Debug for ReaderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderService")
            .field("chunk_budget", &self.chunker.budget())
            .finish_non_exhaustive()
    }
}

impl ReaderService {
    /// Create a new reader service
    pub fn new(inference: Arc<dyn InferencePort>, speech: Arc<dyn SpeechPort>) -> Self {
        Self {
            inference,
            speech,
            chunker: TextChunker::new(),
        }
    }

    /// Read a document aloud
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for empty documents, or the
    /// first vendor error encountered (nothing partial is returned).
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn read(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<Reading, ApplicationError> {
        let chunks = self.chunker.chunk(text);
        if chunks.is_empty() {
            return Err(ApplicationError::Validation(
                "Text cannot be empty".to_string(),
            ));
        }

        debug!(chunk_count = chunks.len(), "Reading document");

        let mut audio_data = Vec::new();
        for chunk in &chunks {
            let segment = self.speech.synthesize_long_form(chunk, voice).await?;
            audio_data.extend_from_slice(&segment.audio_data);
        }

        let word_count = text.split_whitespace().count();
        #[allow(clippy::cast_precision_loss)]
        let estimated_minutes = word_count as f64 / READING_WORDS_PER_MINUTE;

        let excerpt: String = text.chars().take(ANALYSIS_EXCERPT_CHARS).collect();
        let question = format!("Provide reading tips and summary for this text: {excerpt}...");
        let prompt = build_prompt(AgentMode::Reader, &[], &question);

        let analysis = self.inference.generate(&prompt).await?;

        debug!(
            audio_size = audio_data.len(),
            word_count,
            "Reading complete"
        );

        Ok(Reading {
            audio: SynthesisResult::mpeg(audio_data),
            chunk_count: chunks.len(),
            word_count,
            estimated_minutes,
            analysis: analysis.content,
        })
    }
}
