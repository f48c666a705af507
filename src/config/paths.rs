use std::path::PathBuf;

use super::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl ConfigPaths {
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = config_override {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .ok_or(ConfigError::MissingHome)?;
            return Ok(Self {
                config_file: path,
                config_dir: dir,
                logs_dir: default_logs_dir()?,
            });
        }
        let config_dir = default_config_dir()?;
        Ok(Self {
            config_file: config_dir.join("config.toml"),
            config_dir,
            logs_dir: default_logs_dir()?,
        })
    }
}

fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
    Ok(home.join(".config").join("fxchat"))
}

fn default_logs_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
    Ok(home.join(".local").join("share").join("fxchat").join("logs"))
}
