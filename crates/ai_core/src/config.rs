//! Configuration for the inference client

use serde::{Deserialize, Serialize};

/// Configuration for the Gemini inference client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// API key for the hosted LLM
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the inference API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_max_output_tokens() -> u32 {
    2048
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl InferenceConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("Gemini API key is required".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = InferenceConfig::default();

        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.default_model, "gemini-2.0-flash-exp");
        assert_eq!(config.timeout_ms, 60000);
        assert_eq!(config.max_output_tokens, 2048);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn validate_fails_without_api_key() {
        let config = InferenceConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_succeeds_with_api_key() {
        let config = InferenceConfig::test();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_fails_with_invalid_temperature() {
        let mut config = InferenceConfig::test();
        config.temperature = 3.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_zero_timeout() {
        let mut config = InferenceConfig::test();
        config.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            api_key = "test"
            default_model = "gemini-2.0-flash-exp"
            timeout_ms = 30000
            temperature = 0.5
            max_output_tokens = 1024
        "#;

        let config: InferenceConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.api_key, Some("test".to_string()));
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_output_tokens, 1024);
        assert!((config.temperature - 0.5).abs() < f32::EPSILON);
    }
}
