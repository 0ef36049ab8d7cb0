//! Chat handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use domain::{ConversationId, ConversationTurn};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    error::ApiError,
    handlers::common::{AudioPayload, decode_audio, parse_conversation_id},
    state::AppState,
};

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message
    pub message: String,
    /// Optional conversation ID for context
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Voice for the spoken reply (default voice if omitted)
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Conversation this exchange belongs to
    pub conversation_id: String,
    /// Assistant reply text
    pub reply: String,
    /// Synthesized reply audio
    #[serde(flatten)]
    pub audio: AudioPayload,
    /// Model used
    pub model: String,
}

/// Handle a text chat request
#[instrument(skip(state, request), fields(message_len = request.message.len()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let conversation_id = parse_conversation_id(request.conversation_id.as_deref())?;

    let reply = state
        .chat_service
        .respond(
            &request.message,
            conversation_id,
            request.voice_id.as_deref(),
        )
        .await?;

    Ok(Json(ChatResponse {
        conversation_id: reply.conversation_id.to_string(),
        reply: reply.reply,
        audio: reply.audio.into(),
        model: reply.model,
    }))
}

/// Voice chat request body
#[derive(Debug, Deserialize)]
pub struct VoiceChatRequest {
    /// Base64-encoded WAV audio
    pub audio_wav_base64: String,
    /// Optional conversation ID for context
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Voice for the spoken reply (default voice if omitted)
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Voice chat response body
#[derive(Debug, Serialize)]
pub struct VoiceChatResponse {
    /// What the recognizer heard
    pub transcription: String,
    /// Conversation this exchange belongs to
    pub conversation_id: String,
    /// Assistant reply text
    pub reply: String,
    /// Synthesized reply audio
    #[serde(flatten)]
    pub audio: AudioPayload,
    /// Model used
    pub model: String,
}

/// Handle a voice chat request (WAV in, transcription + reply out)
#[instrument(skip(state, request))]
pub async fn voice_chat(
    State(state): State<AppState>,
    Json(request): Json<VoiceChatRequest>,
) -> Result<Json<VoiceChatResponse>, ApiError> {
    let conversation_id = parse_conversation_id(request.conversation_id.as_deref())?;
    let audio_wav = decode_audio(&request.audio_wav_base64)?;

    let voice_reply = state
        .chat_service
        .respond_to_voice(audio_wav, conversation_id, request.voice_id.as_deref())
        .await?;

    let reply = voice_reply.reply;

    Ok(Json(VoiceChatResponse {
        transcription: voice_reply.transcription,
        conversation_id: reply.conversation_id.to_string(),
        reply: reply.reply,
        audio: reply.audio.into(),
        model: reply.model,
    }))
}

/// Voice preview request body
#[derive(Debug, Default, Deserialize)]
pub struct PreviewRequest {
    /// Voice to preview (default voice if omitted)
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Synthesize a short voice preview, returned as raw audio
#[instrument(skip(state, request))]
pub async fn preview_voice(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Response, ApiError> {
    let audio = state
        .chat_service
        .preview_voice(request.voice_id.as_deref())
        .await?;

    Ok((
        [(header::CONTENT_TYPE, audio.mime_type)],
        audio.audio_data,
    )
        .into_response())
}

/// A single conversation turn in a history response
#[derive(Debug, Serialize)]
pub struct TurnDto {
    /// What the user said
    pub human: String,
    /// What the assistant answered
    pub ai: String,
    /// When the turn was recorded
    pub created_at: DateTime<Utc>,
}

impl From<ConversationTurn> for TurnDto {
    fn from(turn: ConversationTurn) -> Self {
        Self {
            human: turn.human,
            ai: turn.ai,
            created_at: turn.created_at,
        }
    }
}

/// History response body
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Conversation ID
    pub conversation_id: String,
    /// All recorded turns, oldest first
    pub turns: Vec<TurnDto>,
}

/// Get the full history of a conversation
#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let id = ConversationId::from_uuid(conversation_id);
    let turns = state.chat_service.history(id)?;

    Ok(Json(HistoryResponse {
        conversation_id: id.to_string(),
        turns: turns.into_iter().map(TurnDto::from).collect(),
    }))
}

/// Clear the history of a conversation
#[instrument(skip(state))]
pub async fn clear_history(
    State(state): State<AppState>,
    Path(conversation_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let id = ConversationId::from_uuid(conversation_id);
    state.chat_service.clear_history(id)?;

    Ok(StatusCode::NO_CONTENT)
}
