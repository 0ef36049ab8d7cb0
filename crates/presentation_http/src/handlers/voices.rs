//! Voice listing and cloning handlers

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use domain::{CloneStatus, ClonedVoice};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// A voice available for synthesis
#[derive(Debug, Serialize)]
pub struct VoiceDto {
    /// Voice identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Vendor category (premade, cloned, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Voice list response body
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    /// Available voices
    pub voices: Vec<VoiceDto>,
}

/// List the voices available for synthesis
#[instrument(skip(state))]
pub async fn list_voices(
    State(state): State<AppState>,
) -> Result<Json<VoicesResponse>, ApiError> {
    let voices = state.cloning_service.available_voices().await?;

    Ok(Json(VoicesResponse {
        voices: voices
            .into_iter()
            .map(|v| VoiceDto {
                id: v.id,
                name: v.name,
                category: v.category,
            })
            .collect(),
    }))
}

/// A cloned-voice record
#[derive(Debug, Serialize)]
pub struct ClonedVoiceDto {
    /// Voice name
    pub name: String,
    /// Vendor-assigned voice ID
    pub voice_id: String,
    /// Clone status
    pub status: CloneStatus,
    /// When the clone was created
    pub created_at: DateTime<Utc>,
}

impl From<ClonedVoice> for ClonedVoiceDto {
    fn from(voice: ClonedVoice) -> Self {
        Self {
            name: voice.name,
            voice_id: voice.voice_id.into_inner(),
            status: voice.status,
            created_at: voice.created_at,
        }
    }
}

/// Cloned voices response body
#[derive(Debug, Serialize)]
pub struct ClonedVoicesResponse {
    /// Voices cloned during this session
    pub voices: Vec<ClonedVoiceDto>,
}

/// List the voices cloned during this session
#[instrument(skip(state))]
pub async fn list_cloned_voices(State(state): State<AppState>) -> Json<ClonedVoicesResponse> {
    let voices = state.cloning_service.cloned_voices();

    Json(ClonedVoicesResponse {
        voices: voices.into_iter().map(ClonedVoiceDto::from).collect(),
    })
}

/// Clone a voice from uploaded audio samples
///
/// Expects a multipart form with a `name` text field and one or more file
/// fields containing the audio samples.
#[instrument(skip(state, multipart))]
pub async fn clone_voice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ClonedVoiceDto>), ApiError> {
    let mut name: Option<String> = None;
    let mut samples: Vec<Vec<u8>> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("name") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid name field: {e}")))?;
                name = Some(value);
            },
            _ => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid file field: {e}")))?;
                samples.push(data.to_vec());
            },
        }
    }

    let name = name.ok_or_else(|| ApiError::BadRequest("Missing name field".to_string()))?;

    let record = state.cloning_service.clone_voice(&name, samples).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::VoiceId;

    #[test]
    fn voice_dto_serialize() {
        let dto = VoiceDto {
            id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            name: "Rachel".to_string(),
            category: Some("premade".to_string()),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("Rachel"));
        assert!(json.contains("premade"));
    }

    #[test]
    fn voice_dto_omits_missing_category() {
        let dto = VoiceDto {
            id: "abc".to_string(),
            name: "Custom".to_string(),
            category: None,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("category"));
    }

    #[test]
    fn cloned_voice_dto_from_record() {
        let record =
            ClonedVoice::ready("My Voice", VoiceId::new("abc123").unwrap()).unwrap();
        let dto = ClonedVoiceDto::from(record);
        assert_eq!(dto.name, "My Voice");
        assert_eq!(dto.voice_id, "abc123");
        assert_eq!(dto.status, CloneStatus::Ready);
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"status\":\"ready\""));
    }

    #[test]
    fn cloned_voices_response_serialize() {
        let record = ClonedVoice::ready("Voice", VoiceId::new("xyz").unwrap()).unwrap();
        let response = ClonedVoicesResponse {
            voices: vec![record.into()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"voices\""));
        assert!(json.contains("xyz"));
    }
}
