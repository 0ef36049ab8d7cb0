//! Cloning service - Voice cloning and session-scoped clone records
//!
//! Cloned-voice records live in memory for the lifetime of the process; the
//! vendor keeps the actual voice.

use std::{fmt, sync::Arc};

use domain::{ClonedVoice, VoiceId};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{SpeechPort, VoiceSummary},
};

/// Service for cloning voices and tracking the clones made this session
pub struct CloningService {
    speech: Arc<dyn SpeechPort>,
    cloned: RwLock<Vec<ClonedVoice>>,
}

impl fmt::Debug for CloningService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloningService")
            .field("cloned_count", &self.cloned.read().len())
            .finish_non_exhaustive()
    }
}

impl CloningService {
    /// Create a new cloning service
    pub fn new(speech: Arc<dyn SpeechPort>) -> Self {
        Self {
            speech,
            cloned: RwLock::new(Vec::new()),
        }
    }

    /// Clone a voice from audio samples
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for empty names or missing
    /// samples, or the propagated vendor error.
    #[instrument(skip(self, samples), fields(name = %name, sample_count = samples.len()))]
    pub async fn clone_voice(
        &self,
        name: &str,
        samples: Vec<Vec<u8>>,
    ) -> Result<ClonedVoice, ApplicationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApplicationError::Validation(
                "Voice name cannot be empty".to_string(),
            ));
        }

        if samples.is_empty() || samples.iter().all(Vec::is_empty) {
            return Err(ApplicationError::Validation(
                "At least one audio sample is required".to_string(),
            ));
        }

        let description = format!("Cloned voice: {name}");
        let voice_id = self
            .speech
            .clone_voice(name, &description, samples)
            .await?;

        let record = ClonedVoice::ready(name, VoiceId::new(voice_id)?)?;

        debug!(voice_id = %record.voice_id, "Voice clone recorded");

        self.cloned.write().push(record.clone());
        Ok(record)
    }

    /// List the voices cloned during this session
    #[must_use]
    pub fn cloned_voices(&self) -> Vec<ClonedVoice> {
        self.cloned.read().clone()
    }

    /// List the voices the vendor currently offers
    ///
    /// # Errors
    ///
    /// Returns the propagated vendor error.
    pub async fn available_voices(&self) -> Result<Vec<VoiceSummary>, ApplicationError> {
        self.speech.list_voices().await
    }
}
