use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;

use crate::assistant::DEFAULT_SYSTEM_PROMPT;
use crate::monitor::{LogFormat, DEFAULT_LOG_FILE};
use crate::rates::{DEFAULT_RATES_BASE_URL, DEFAULT_RATES_TIMEOUT_SECONDS};

use super::error::ConfigError;

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const DEFAULT_LLM_TIMEOUT_SECONDS: u64 = 60;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

/// Everything the assistant needs, built once at startup.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    pub api_key: Option<SecretString>,
    /// Environment variable consulted for the API key
    pub api_key_env: String,
    pub openai_base_url: Option<String>,
    pub llm_timeout_seconds: u64,
    pub rates_base_url: String,
    pub rates_timeout_seconds: u64,
    /// Interaction log written after every exchange
    pub log_file: PathBuf,
    pub log_format: LogFormat,
    pub system_prompt: String,
    pub logging: LoggingConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            openai_base_url: None,
            llm_timeout_seconds: DEFAULT_LLM_TIMEOUT_SECONDS,
            rates_base_url: DEFAULT_RATES_BASE_URL.to_string(),
            rates_timeout_seconds: DEFAULT_RATES_TIMEOUT_SECONDS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_format: LogFormat::default(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AssistantConfig {
    pub fn require_api_key(&self) -> Result<&SecretString, ConfigError> {
        self.api_key
            .as_ref()
            .ok_or_else(|| ConfigError::MissingApiKey(self.api_key_env.clone()))
    }
}

/// Diagnostics log of the binary, kept apart from the interaction log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}
