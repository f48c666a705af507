//! Durable record of completed exchanges.

mod entry;
mod error;
mod store;

pub use entry::{LogEntry, ResponseRecord, TokenCounts};
pub use error::MonitorError;
pub use store::{LogFormat, ResponseMonitor, DEFAULT_LOG_FILE};
