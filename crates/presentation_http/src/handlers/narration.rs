//! Narration handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::AudioPayload, state::AppState};

/// Narration request body
#[derive(Debug, Deserialize)]
pub struct NarrationRequest {
    /// Script to narrate
    pub script: String,
    /// Voice to narrate with (default voice if omitted)
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Narration response body
#[derive(Debug, Serialize)]
pub struct NarrationResponse {
    /// Narrated script audio
    #[serde(flatten)]
    pub audio: AudioPayload,
    /// Dubbing direction notes for the script
    pub direction: String,
    /// Model that produced the direction
    pub model: String,
}

/// Narrate a script and return audio plus dubbing direction
#[instrument(skip(state, request), fields(script_len = request.script.len()))]
pub async fn narrate(
    State(state): State<AppState>,
    Json(request): Json<NarrationRequest>,
) -> Result<Json<NarrationResponse>, ApiError> {
    let narration = state
        .narration_service
        .narrate(&request.script, request.voice_id.as_deref())
        .await?;

    Ok(Json(NarrationResponse {
        audio: narration.audio.into(),
        direction: narration.direction,
        model: narration.model,
    }))
}
