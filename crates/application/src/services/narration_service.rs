//! Narration service - Script dubbing
//!
//! Produces direction notes for a script via the LLM in dubbing mode, then
//! synthesizes the script itself.

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{InferencePort, SpeechPort, SynthesisResult},
    services::agent_mode::{AgentMode, build_prompt},
};

/// A narrated script with dubbing direction
#[derive(Debug)]
pub struct Narration {
    /// Synthesized script audio
    pub audio: SynthesisResult,
    /// Dubbing direction notes from the LLM
    pub direction: String,
    /// Model that produced the direction
    pub model: String,
}

/// Service for script narration and dubbing direction
pub struct NarrationService {
    inference: Arc<dyn InferencePort>,
    speech: Arc<dyn SpeechPort>,
}

impl fmt::Debug for NarrationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrationService").finish_non_exhaustive()
    }
}

impl NarrationService {
    /// Create a new narration service
    pub fn new(inference: Arc<dyn InferencePort>, speech: Arc<dyn SpeechPort>) -> Self {
        Self { inference, speech }
    }

    /// Narrate a script and produce dubbing direction for it
    ///
    /// Direction comes first; each dubbing request is standalone, so no
    /// conversation history is involved.
    #[instrument(skip(self, script), fields(script_len = script.len()))]
    pub async fn narrate(
        &self,
        script: &str,
        voice: Option<&str>,
    ) -> Result<Narration, ApplicationError> {
        if script.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "Script cannot be empty".to_string(),
            ));
        }

        let question = format!("Provide dubbing direction for this script: {script}");
        let prompt = build_prompt(AgentMode::Dubbing, &[], &question);

        let direction = self.inference.generate(&prompt).await?;

        debug!(model = %direction.model, "Dubbing direction generated");

        let audio = self.speech.synthesize(script, voice).await?;

        Ok(Narration {
            audio,
            direction: direction.content,
            model: direction.model,
        })
    }
}
