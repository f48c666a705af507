use thiserror::Error;

use crate::monitor::MonitorError;

/// Error types that can occur when interacting with the LLM provider.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Invalid request parameters or format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
}

/// Converts reqwest HTTP errors into LlmErrors
impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        LLMError::HttpError(err.to_string())
    }
}

/// Errors that abort a single exchange of the assistant.
///
/// Rate lookup failures are not represented here: they are folded into the
/// conversion result text and handed back to the model.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The chat provider failed (auth, network, bad response)
    #[error(transparent)]
    Llm(#[from] LLMError),
    /// The model produced tool arguments that are not valid for the tool
    #[error("invalid tool arguments: {0}")]
    ToolArguments(#[source] serde_json::Error),
    /// The interaction log could not be written
    #[error(transparent)]
    Monitor(#[from] MonitorError),
}
