//! Application state shared across handlers

use std::{fmt, sync::Arc};

use application::{ChatService, CloningService, NarrationService, ReaderService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Chat service for conversational voice exchanges
    pub chat_service: Arc<ChatService>,
    /// Narration service for dubbing scripts
    pub narration_service: Arc<NarrationService>,
    /// Cloning service for custom voices
    pub cloning_service: Arc<CloningService>,
    /// Reader service for long documents
    pub reader_service: Arc<ReaderService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use application::{
        ConversationRegistry,
        error::ApplicationError,
        ports::{
            InferencePort, InferenceResult, SpeechPort, SynthesisResult, TranscriptionResult,
            VoiceSummary,
        },
    };

    struct NullInference;

    #[async_trait::async_trait]
    impl InferencePort for NullInference {
        async fn generate(&self, _prompt: &str) -> Result<InferenceResult, ApplicationError> {
            Err(ApplicationError::Internal("unused".to_string()))
        }

        async fn is_healthy(&self) -> bool {
            false
        }

        fn current_model(&self) -> String {
            String::new()
        }
    }

    struct NullSpeech;

    #[async_trait::async_trait]
    impl SpeechPort for NullSpeech {
        async fn transcribe(
            &self,
            _audio_wav: Vec<u8>,
        ) -> Result<TranscriptionResult, ApplicationError> {
            Err(ApplicationError::Internal("unused".to_string()))
        }

        async fn synthesize(
            &self,
            _text: &str,
            _voice: Option<&str>,
        ) -> Result<SynthesisResult, ApplicationError> {
            Err(ApplicationError::Internal("unused".to_string()))
        }

        async fn synthesize_long_form(
            &self,
            _text: &str,
            _voice: Option<&str>,
        ) -> Result<SynthesisResult, ApplicationError> {
            Err(ApplicationError::Internal("unused".to_string()))
        }

        async fn list_voices(&self) -> Result<Vec<VoiceSummary>, ApplicationError> {
            Ok(Vec::new())
        }

        async fn clone_voice(
            &self,
            _name: &str,
            _description: &str,
            _samples: Vec<Vec<u8>>,
        ) -> Result<String, ApplicationError> {
            Err(ApplicationError::Internal("unused".to_string()))
        }

        async fn is_available(&self) -> bool {
            false
        }

        fn default_voice(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn debug_output_omits_services() {
        let inference: Arc<dyn InferencePort> = Arc::new(NullInference);
        let speech: Arc<dyn SpeechPort> = Arc::new(NullSpeech);
        let state = AppState {
            chat_service: Arc::new(ChatService::new(
                Arc::clone(&inference),
                Arc::clone(&speech),
                Arc::new(ConversationRegistry::new()),
            )),
            narration_service: Arc::new(NarrationService::new(
                Arc::clone(&inference),
                Arc::clone(&speech),
            )),
            cloning_service: Arc::new(CloningService::new(Arc::clone(&speech))),
            reader_service: Arc::new(ReaderService::new(inference, speech)),
            config: Arc::new(AppConfig::default()),
        };

        let debug = format!("{state:?}");
        assert!(debug.starts_with("AppState"));
        assert!(debug.contains("environment"));
    }
}
