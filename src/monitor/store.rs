use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entry::{LogEntry, ResponseRecord};
use super::error::MonitorError;

pub const DEFAULT_LOG_FILE: &str = "response_log.json";

/// On-disk layout of the interaction log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// A single pretty-printed JSON array, rewritten on every append
    #[default]
    JsonArray,
    /// One compact JSON object per line, appended in place
    JsonLines,
}

/// Appends [`LogEntry`] records to a single file.
///
/// Not safe for concurrent writers.
#[derive(Debug, Clone)]
pub struct ResponseMonitor {
    path: PathBuf,
    format: LogFormat,
}

impl ResponseMonitor {
    pub fn new(path: impl Into<PathBuf>, format: LogFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Builds an entry for a completed exchange and persists it.
    pub fn record(
        &self,
        instructions: Option<&str>,
        input: &str,
        response: &ResponseRecord,
    ) -> Result<LogEntry, MonitorError> {
        let entry = LogEntry::new(instructions, input, response);
        self.append(&entry)?;
        log::info!("Response recorded in {}", self.path.display());
        Ok(entry)
    }

    pub fn append(&self, entry: &LogEntry) -> Result<(), MonitorError> {
        ensure_parent(&self.path)?;
        match self.format {
            LogFormat::JsonArray => self.append_array(entry),
            LogFormat::JsonLines => self.append_line(entry),
        }
    }

    /// All entries in append order; a missing file holds none.
    pub fn entries(&self) -> Result<Vec<LogEntry>, MonitorError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        match self.format {
            LogFormat::JsonArray if data.trim().is_empty() => Ok(Vec::new()),
            LogFormat::JsonArray => Ok(serde_json::from_str(&data)?),
            LogFormat::JsonLines => data
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| serde_json::from_str(line).map_err(MonitorError::from))
                .collect(),
        }
    }

    fn append_array(&self, entry: &LogEntry) -> Result<(), MonitorError> {
        // Existing records are kept as raw JSON so fields we do not model survive.
        let mut records = self.read_raw_array()?;
        records.push(serde_json::to_value(entry)?);
        let payload = serde_json::to_vec_pretty(&records)?;

        let tmp = temp_path(&self.path);
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn read_raw_array(&self) -> Result<Vec<Value>, MonitorError> {
        match fs::read(&self.path) {
            Ok(data) if data.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn append_line(&self, entry: &LogEntry) -> Result<(), MonitorError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<(), MonitorError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
