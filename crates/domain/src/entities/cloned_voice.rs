//! Cloned voice entity - A voice registered from user-submitted samples

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::VoiceId;

/// Status of a cloned voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloneStatus {
    /// The vendor accepted the samples and the voice is usable
    Ready,
}

/// A voice cloned from user-submitted audio samples.
///
/// Records are appended on a successful clone call and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClonedVoice {
    /// User-chosen display name
    pub name: String,
    /// Identifier assigned by the TTS vendor
    pub voice_id: VoiceId,
    /// Clone status
    pub status: CloneStatus,
    /// When the clone completed
    pub created_at: DateTime<Utc>,
}

impl ClonedVoice {
    /// Create a ready cloned-voice record
    pub fn ready(name: impl Into<String>, voice_id: VoiceId) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidVoiceName(name));
        }
        Ok(Self {
            name,
            voice_id,
            status: CloneStatus::Ready,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_creates_record() {
        let voice_id = VoiceId::new("v-123").unwrap();
        let voice = ClonedVoice::ready("My Voice", voice_id.clone()).unwrap();

        assert_eq!(voice.name, "My Voice");
        assert_eq!(voice.voice_id, voice_id);
        assert_eq!(voice.status, CloneStatus::Ready);
    }

    #[test]
    fn ready_rejects_blank_name() {
        let voice_id = VoiceId::new("v-123").unwrap();
        let result = ClonedVoice::ready("   ", voice_id);
        assert!(matches!(result, Err(DomainError::InvalidVoiceName(_))));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CloneStatus::Ready).unwrap();
        assert_eq!(json, "\"ready\"");
    }

    #[test]
    fn record_roundtrips_through_json() {
        let voice =
            ClonedVoice::ready("Narrator", VoiceId::new("v-9").unwrap()).unwrap();
        let json = serde_json::to_string(&voice).unwrap();
        let parsed: ClonedVoice = serde_json::from_str(&json).unwrap();
        assert_eq!(voice, parsed);
    }
}
