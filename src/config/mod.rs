//! Assistant configuration: an optional TOML file plus environment overrides.

mod error;
mod load;
mod paths;
mod types;

pub use error::ConfigError;
pub use load::{apply_env_overrides, load_config, LoadedConfig};
pub use paths::ConfigPaths;
pub use types::{AssistantConfig, LoggingConfig};
