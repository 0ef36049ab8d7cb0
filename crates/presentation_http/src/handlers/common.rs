//! Shared helper functions for HTTP handlers

use application::ports::SynthesisResult;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use domain::ConversationId;
use serde::Serialize;

use crate::error::ApiError;

/// Audio payload serialized into a JSON response
#[derive(Debug, Clone, Serialize)]
pub struct AudioPayload {
    /// Base64-encoded audio bytes
    pub audio_base64: String,
    /// MIME type of the audio
    pub mime_type: String,
}

impl From<SynthesisResult> for AudioPayload {
    fn from(result: SynthesisResult) -> Self {
        Self {
            audio_base64: STANDARD.encode(&result.audio_data),
            mime_type: result.mime_type,
        }
    }
}

/// Decode a base64 audio field, rejecting malformed input
pub fn decode_audio(encoded: &str) -> Result<Vec<u8>, ApiError> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| ApiError::BadRequest(format!("Invalid base64 audio: {e}")))
}

/// Parse a conversation ID from an optional request field
pub fn parse_conversation_id(raw: Option<&str>) -> Result<Option<ConversationId>, ApiError> {
    raw.map(|s| {
        ConversationId::parse(s)
            .map_err(|e| ApiError::BadRequest(format!("Invalid conversation id: {e}")))
    })
    .transpose()
}
