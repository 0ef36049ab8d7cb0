//! Voice identifier assigned by the TTS vendor

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A vendor-assigned identifier selecting a synthetic voice.
///
/// Voice IDs are opaque strings minted by the TTS provider; the only
/// invariant enforced here is that they are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    /// Create a voice ID, rejecting empty or whitespace-only values
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidVoiceId(id));
        }
        Ok(Self(id))
    }

    /// Get the raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the raw identifier
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VoiceId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
