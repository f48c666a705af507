use std::path::PathBuf;

use flexi_logger::{detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use fxchat::config::{ConfigPaths, LoadedConfig, LoggingConfig};

const LOG_FILE_NAME: &str = "fxchat.log";

/// Starts the diagnostics logger; the REPL owns stdout, so everything goes
/// to a rotating file. Lines are flushed when the returned handle drops.
pub fn init_logging(
    config: &LoggingConfig,
    paths: &ConfigPaths,
) -> anyhow::Result<LoggerHandle> {
    let log_path = log_file(config, paths);
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(FileSpec::try_from(log_path.clone())?)
        .format_for_files(detailed_format)
        .append()
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    log::info!(
        "fxchat {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );
    Ok(handle)
}

/// Reports what startup did before the logger existed.
pub fn log_startup(loaded: &LoadedConfig) {
    match &loaded.env_file {
        Ok(path) => log::debug!("environment loaded from {}", path.display()),
        Err(err) if err.not_found() => log::debug!("no .env file found"),
        Err(err) => log::warn!("failed to load .env file: {err}"),
    }
    if loaded.config_exists {
        log::debug!("config loaded from {}", loaded.paths.config_file.display());
    } else {
        log::debug!(
            "config file {} not found, using defaults",
            loaded.paths.config_file.display()
        );
    }
    log::info!("model {}", loaded.config.model);
}

fn log_file(config: &LoggingConfig, paths: &ConfigPaths) -> PathBuf {
    config
        .path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| paths.logs_dir.join(LOG_FILE_NAME))
}
