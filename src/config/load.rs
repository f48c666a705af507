use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use secrecy::SecretString;

use super::error::ConfigError;
use super::paths::ConfigPaths;
use super::types::AssistantConfig;

const MODEL_ENV: &str = "FXCHAT_MODEL";

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AssistantConfig,
    pub paths: ConfigPaths,
    pub config_exists: bool,
    /// Outcome of `.env` loading, reported once logging is up
    pub env_file: Result<PathBuf, dotenvy::Error>,
}

/// Loads `.env`, the TOML config file and environment overrides.
///
/// A missing config file yields defaults.
pub fn load_config(path_override: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let env_file = dotenvy::dotenv();
    let paths = ConfigPaths::resolve(path_override)?;
    let (mut config, config_exists) = read_config(&paths.config_file)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(LoadedConfig {
        config,
        paths,
        config_exists,
        env_file,
    })
}

fn read_config(path: &Path) -> Result<(AssistantConfig, bool), ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok((toml::from_str(&contents)?, true)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok((AssistantConfig::default(), false)),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

/// Environment wins over the file for the API key and the model.
pub fn apply_env_overrides<F>(config: &mut AssistantConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(&config.api_key_env).filter(|k| !k.trim().is_empty()) {
        config.api_key = Some(SecretString::new(key));
    }
    if let Some(model) = lookup(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
        config.model = model;
    }
}
