//! Chat service - Voice conversation handling
//!
//! Orchestrates the chat loop: resolve the conversation, assemble the prompt
//! from the context window, generate a reply, record the turn, and synthesize
//! the spoken response. The turn is recorded before synthesis, so a TTS
//! failure still leaves the exchange in history.

use std::{fmt, sync::Arc};

use domain::{ConversationId, ConversationTurn};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{InferencePort, SpeechPort, SynthesisResult},
    services::agent_mode::{AgentMode, build_prompt},
    services::conversation_registry::ConversationRegistry,
};

/// Text spoken when previewing a voice
const PREVIEW_TEXT: &str = "Hello! This is how I sound. How can I help you today?";

/// A generated chat reply with its spoken form
#[derive(Debug)]
pub struct ChatReply {
    /// Conversation this reply belongs to
    pub conversation_id: ConversationId,
    /// Generated reply text
    pub reply: String,
    /// Synthesized reply audio
    pub audio: SynthesisResult,
    /// Model that generated the reply
    pub model: String,
}

/// A chat reply produced from a voice message
#[derive(Debug)]
pub struct VoiceChatReply {
    /// What the recognizer heard
    pub transcription: String,
    /// The generated reply
    pub reply: ChatReply,
}

/// Service for handling voice chat conversations
pub struct ChatService {
    inference: Arc<dyn InferencePort>,
    speech: Arc<dyn SpeechPort>,
    registry: Arc<ConversationRegistry>,
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("conversations", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl ChatService {
    /// Create a new chat service
    pub fn new(
        inference: Arc<dyn InferencePort>,
        speech: Arc<dyn SpeechPort>,
        registry: Arc<ConversationRegistry>,
    ) -> Self {
        Self {
            inference,
            speech,
            registry,
        }
    }

    /// Respond to a text message within a conversation
    ///
    /// `voice` selects the reply voice; `None` uses the configured default.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn respond(
        &self,
        message: &str,
        conversation_id: Option<ConversationId>,
        voice: Option<&str>,
    ) -> Result<ChatReply, ApplicationError> {
        if message.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "Message cannot be empty".to_string(),
            ));
        }

        let id = self.registry.resolve(conversation_id);
        let window = self.registry.context_window(id);
        let prompt = build_prompt(AgentMode::Conversational, &window, message);

        let result = self.inference.generate(&prompt).await?;

        debug!(
            conversation_id = %id,
            model = %result.model,
            tokens = ?result.tokens_used,
            "Chat reply generated"
        );

        // Recorded before synthesis: a TTS failure keeps the exchange
        self.registry.record_turn(id, message, &result.content)?;

        let audio = self.speech.synthesize(&result.content, voice).await?;

        Ok(ChatReply {
            conversation_id: id,
            reply: result.content,
            audio,
            model: result.model,
        })
    }

    /// Respond to a voice message (WAV) within a conversation
    #[instrument(skip(self, audio_wav), fields(audio_size = audio_wav.len()))]
    pub async fn respond_to_voice(
        &self,
        audio_wav: Vec<u8>,
        conversation_id: Option<ConversationId>,
        voice: Option<&str>,
    ) -> Result<VoiceChatReply, ApplicationError> {
        let transcription = self.speech.transcribe(audio_wav).await?;

        if transcription.text.trim().is_empty() {
            return Err(ApplicationError::SpeechNotRecognized);
        }

        let reply = self
            .respond(&transcription.text, conversation_id, voice)
            .await?;

        Ok(VoiceChatReply {
            transcription: transcription.text,
            reply,
        })
    }

    /// Synthesize a short preview of a voice
    #[instrument(skip(self))]
    pub async fn preview_voice(
        &self,
        voice: Option<&str>,
    ) -> Result<SynthesisResult, ApplicationError> {
        self.speech.synthesize(PREVIEW_TEXT, voice).await
    }

    /// Get the full history of a conversation
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the conversation does not exist.
    pub fn history(&self, id: ConversationId) -> Result<Vec<ConversationTurn>, ApplicationError> {
        self.registry.history(id)
    }

    /// Clear the history of a conversation
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the conversation does not exist.
    pub fn clear_history(&self, id: ConversationId) -> Result<(), ApplicationError> {
        self.registry.clear(id)
    }

    /// Check if the underlying inference is healthy
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    /// Check if the speech vendor is reachable
    pub async fn speech_available(&self) -> bool {
        self.speech.is_available().await
    }

    /// Get the current model name
    pub fn current_model(&self) -> String {
        self.inference.current_model()
    }
}
