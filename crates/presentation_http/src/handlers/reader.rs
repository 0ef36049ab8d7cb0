//! Long-document reader handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::AudioPayload, state::AppState};

/// Reader request body
#[derive(Debug, Deserialize)]
pub struct ReaderRequest {
    /// Document text to read aloud
    pub text: String,
    /// Voice to read with (default voice if omitted)
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Reader response body
#[derive(Debug, Serialize)]
pub struct ReaderResponse {
    /// Concatenated document audio
    #[serde(flatten)]
    pub audio: AudioPayload,
    /// Number of chunks the document was split into
    pub chunk_count: usize,
    /// Whitespace-delimited word count
    pub word_count: usize,
    /// Estimated reading time in minutes
    pub estimated_minutes: f64,
    /// LLM reading tips and summary
    pub analysis: String,
}

/// Read a document aloud and return audio plus reading metrics
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn read_document(
    State(state): State<AppState>,
    Json(request): Json<ReaderRequest>,
) -> Result<Json<ReaderResponse>, ApiError> {
    let reading = state
        .reader_service
        .read(&request.text, request.voice_id.as_deref())
        .await?;

    Ok(Json(ReaderResponse {
        audio: reading.audio.into(),
        chunk_count: reading.chunk_count,
        word_count: reading.word_count,
        estimated_minutes: reading.estimated_minutes,
        analysis: reading.analysis,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::ports::SynthesisResult;

    #[test]
    fn reader_request_deserialize() {
        let json = r#"{"text": "A long document."}"#;
        let request: ReaderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.text, "A long document.");
        assert!(request.voice_id.is_none());
    }

    #[test]
    fn reader_response_serialize() {
        let response = ReaderResponse {
            audio: SynthesisResult::mpeg(vec![5, 5]).into(),
            chunk_count: 3,
            word_count: 300,
            estimated_minutes: 2.0,
            analysis: "Read at a steady pace.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"chunk_count\":3"));
        assert!(json.contains("\"word_count\":300"));
        assert!(json.contains("\"estimated_minutes\":2.0"));
        assert!(json.contains("steady pace"));
    }
}
