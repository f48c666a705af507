use std::io;

use crate::error::LLMError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing home directory for config paths")]
    MissingHome,
    #[error("no API key configured; set {0} or api_key in the config file")]
    MissingApiKey(String),
    #[error("chat provider setup failed: {0}")]
    Provider(#[from] LLMError),
}
