//! Hand-rolled port doubles shared by the service tests.
//!
//! Each double records its calls so tests can assert on prompts, synthesis
//! voices, and clone arguments after the fact.

use parking_lot::Mutex;

use crate::error::ApplicationError;
use crate::ports::{
    InferencePort, InferenceResult, SpeechPort, SynthesisResult, TranscriptionResult, VoiceSummary,
};

type GenerateFn = dyn Fn(&str) -> Result<InferenceResult, ApplicationError> + Send + Sync;
type SynthesizeFn =
    dyn Fn(usize, &str, Option<&str>) -> Result<SynthesisResult, ApplicationError> + Send + Sync;
type CloneVoiceFn = dyn Fn(usize, &str) -> Result<String, ApplicationError> + Send + Sync;

/// Inference double that records every prompt it is handed.
pub struct FakeInference {
    on_generate: Box<GenerateFn>,
    pub prompts: Mutex<Vec<String>>,
    healthy: bool,
}

impl FakeInference {
    pub fn with(
        f: impl Fn(&str) -> Result<InferenceResult, ApplicationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            on_generate: Box::new(f),
            prompts: Mutex::new(Vec::new()),
            healthy: true,
        }
    }

    /// Always answer with the same content.
    pub fn replying(content: &str) -> Self {
        let content = content.to_string();
        Self::with(move |_| {
            Ok(InferenceResult {
                content: content.clone(),
                model: "gemini-2.0-flash-exp".to_string(),
                tokens_used: Some(42),
            })
        })
    }

    /// Panic if generate is ever called.
    pub fn unused() -> Self {
        Self::with(|prompt| panic!("unexpected generate call: {prompt}"))
    }

    pub fn healthy(mut self, healthy: bool) -> Self {
        self.healthy = healthy;
        self
    }
}

#[async_trait::async_trait]
impl InferencePort for FakeInference {
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        self.prompts.lock().push(prompt.to_string());
        (self.on_generate)(prompt)
    }

    async fn is_healthy(&self) -> bool {
        self.healthy
    }

    fn current_model(&self) -> String {
        "gemini-2.0-flash-exp".to_string()
    }
}

/// Speech double recording synthesis and cloning calls.
///
/// The synthesis and cloning closures receive the zero-based call index, so
/// tests can script per-call behavior without interior mutability of their own.
pub struct FakeSpeech {
    on_synthesize: Box<SynthesizeFn>,
    on_synthesize_long_form: Box<SynthesizeFn>,
    on_clone_voice: Box<CloneVoiceFn>,
    transcription: Mutex<Option<Result<TranscriptionResult, ApplicationError>>>,
    voices: Vec<VoiceSummary>,
    available: bool,
    pub synthesize_calls: Mutex<Vec<(String, Option<String>)>>,
    pub long_form_calls: Mutex<Vec<(String, Option<String>)>>,
    pub clone_calls: Mutex<Vec<(String, String, usize)>>,
}

impl FakeSpeech {
    pub fn new() -> Self {
        Self {
            on_synthesize: Box::new(|_, _, _| Ok(SynthesisResult::mpeg(vec![1, 2, 3]))),
            on_synthesize_long_form: Box::new(|_, _, _| Ok(SynthesisResult::mpeg(vec![0]))),
            on_clone_voice: Box::new(|_, _| Ok("cloned-voice-id".to_string())),
            transcription: Mutex::new(None),
            voices: Vec::new(),
            available: true,
            synthesize_calls: Mutex::new(Vec::new()),
            long_form_calls: Mutex::new(Vec::new()),
            clone_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on_synthesize(
        mut self,
        f: impl Fn(usize, &str, Option<&str>) -> Result<SynthesisResult, ApplicationError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.on_synthesize = Box::new(f);
        self
    }

    pub fn on_synthesize_long_form(
        mut self,
        f: impl Fn(usize, &str, Option<&str>) -> Result<SynthesisResult, ApplicationError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.on_synthesize_long_form = Box::new(f);
        self
    }

    pub fn on_clone_voice(
        mut self,
        f: impl Fn(usize, &str) -> Result<String, ApplicationError> + Send + Sync + 'static,
    ) -> Self {
        self.on_clone_voice = Box::new(f);
        self
    }

    /// Script the next transcribe call.
    pub fn transcribing(self, text: &str, confidence: Option<f32>) -> Self {
        *self.transcription.lock() = Some(Ok(TranscriptionResult {
            text: text.to_string(),
            confidence,
        }));
        self
    }

    pub fn with_voices(mut self, voices: Vec<VoiceSummary>) -> Self {
        self.voices = voices;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

impl Default for FakeSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SpeechPort for FakeSpeech {
    async fn transcribe(
        &self,
        _audio_wav: Vec<u8>,
    ) -> Result<TranscriptionResult, ApplicationError> {
        self.transcription
            .lock()
            .take()
            .unwrap_or_else(|| panic!("unexpected transcribe call"))
    }

    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesisResult, ApplicationError> {
        let index = {
            let mut calls = self.synthesize_calls.lock();
            calls.push((text.to_string(), voice.map(str::to_string)));
            calls.len() - 1
        };
        (self.on_synthesize)(index, text, voice)
    }

    async fn synthesize_long_form(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesisResult, ApplicationError> {
        let index = {
            let mut calls = self.long_form_calls.lock();
            calls.push((text.to_string(), voice.map(str::to_string)));
            calls.len() - 1
        };
        (self.on_synthesize_long_form)(index, text, voice)
    }

    async fn list_voices(&self) -> Result<Vec<VoiceSummary>, ApplicationError> {
        Ok(self.voices.clone())
    }

    async fn clone_voice(
        &self,
        name: &str,
        description: &str,
        samples: Vec<Vec<u8>>,
    ) -> Result<String, ApplicationError> {
        let index = {
            let mut calls = self.clone_calls.lock();
            calls.push((name.to_string(), description.to_string(), samples.len()));
            calls.len() - 1
        };
        (self.on_clone_voice)(index, name)
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    fn default_voice(&self) -> String {
        "21m00Tcm4TlvDq8ikWAM".to_string()
    }
}
