//! Application configuration
//!
//! Layers, in increasing precedence: built-in defaults, `config/default.toml`,
//! an optional file named by `CADENZA_CONFIG`, and `CADENZA__`-prefixed
//! environment variables (e.g. `CADENZA__SERVER__PORT`).

use std::fmt;

use ai_core::InferenceConfig;
use ai_speech::{RecognizerConfig, SpeechConfig};
use serde::{Deserialize, Serialize};

mod server;

pub use server::ServerConfig;

pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("Unknown environment: {other}")),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// TTS / voices / cloning configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Speech recognition configuration
    #[serde(default)]
    pub recognizer: RecognizerConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a named file cannot be read or the
    /// merged configuration does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name("config/default").required(false));

        if let Ok(path) = std::env::var("CADENZA_CONFIG") {
            builder = builder.add_source(config::File::with_name(&path).required(true));
        }

        let builder = builder.add_source(
            config::Environment::with_prefix("CADENZA")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure message.
    pub fn validate(&self) -> Result<(), String> {
        self.inference.validate()?;
        self.speech.validate()?;
        self.recognizer.validate()?;
        Ok(())
    }
}
