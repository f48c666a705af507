use secrecy::{ExposeSecret, SecretString};

use crate::backends::openai::OpenAI;
use crate::error::LLMError;

use super::state::BuilderState;

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Builder for configuring and instantiating the chat provider.
#[derive(Default)]
pub struct LLMBuilder {
    pub(super) state: BuilderState,
}

impl LLMBuilder {
    /// Creates a new empty builder instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.state.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the base URL for API requests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.state.base_url = Some(url.into());
        self
    }

    /// Sets the model identifier to use.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.state.model = Some(model.into());
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.state.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Builds the OpenAI chat provider.
    pub fn build(mut self) -> Result<OpenAI, LLMError> {
        let Some(key) = self.state.api_key.take() else {
            return Err(LLMError::InvalidRequest(
                "No API key provided for OpenAI".to_string(),
            ));
        };
        let timeout = self
            .state
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        log::debug!(
            "Building chat provider. model={:?} base_url={:?} timeout={timeout}s",
            self.state.model,
            self.state.base_url,
        );
        OpenAI::new(
            key.expose_secret().clone(),
            self.state.base_url.take(),
            self.state.model.take(),
            Some(timeout),
        )
    }
}
