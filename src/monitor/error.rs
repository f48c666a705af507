use std::io;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("interaction log IO error: {0}")]
    Io(#[from] io::Error),
    #[error("interaction log serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
