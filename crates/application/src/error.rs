//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Speech processing error
    #[error("Speech error: {0}")]
    Speech(String),

    /// The recognizer could not extract a transcript
    #[error("Speech not recognized")]
    SpeechNotRecognized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::ValidationError("bad".to_string()));
        assert_eq!(err.to_string(), "Validation error: bad");
    }

    #[test]
    fn inference_error_message() {
        let err = ApplicationError::Inference("model unavailable".to_string());
        assert_eq!(err.to_string(), "Inference error: model unavailable");
    }

    #[test]
    fn speech_not_recognized_message() {
        assert_eq!(
            ApplicationError::SpeechNotRecognized.to_string(),
            "Speech not recognized"
        );
    }
}
