//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod inference_port;
mod speech_port;

pub use inference_port::{InferencePort, InferenceResult};
pub use speech_port::{SpeechPort, SynthesisResult, TranscriptionResult, VoiceSummary};
