//! OpenAI chat-completions client
//!
//! Speaks the `/chat/completions` wire format, including function tools and
//! the `tool` role used to return tool output to the model.

mod request;
mod response;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::chat::{ChatMessage, ChatProvider, ChatResponse, Tool, ToolChoice};
use crate::error::LLMError;

pub use request::{build_chat_request, OpenAIChatMessage, OpenAIChatRequest};
pub use response::{OpenAIChatChoice, OpenAIChatResponse, OpenAIResponseMessage};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Client for the OpenAI chat-completions API
pub struct OpenAI {
    api_key: SecretString,
    base_url: reqwest::Url,
    model: String,
    timeout_seconds: Option<u64>,
    client: reqwest::Client,
}

impl OpenAI {
    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `base_url` - API root, defaults to `https://api.openai.com/v1/`
    /// * `model` - Model to use (defaults to "gpt-4o")
    /// * `timeout_seconds` - Request timeout in seconds
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, LLMError> {
        let api_key_str = api_key.into();
        if api_key_str.is_empty() {
            return Err(LLMError::AuthError("Missing OpenAI API key".to_string()));
        }
        let base_url = parse_base_url(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        Ok(OpenAI {
            api_key: SecretString::new(api_key_str),
            base_url,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_seconds,
            client: reqwest::Client::new(),
        })
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn completions_url(&self) -> Result<reqwest::Url, LLMError> {
        self.base_url
            .join("chat/completions")
            .map_err(|e| LLMError::HttpError(e.to_string()))
    }

    fn apply_timeout(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout_seconds {
            Some(timeout) => request.timeout(Duration::from_secs(timeout)),
            None => request,
        }
    }

    fn log_request_payload<T: Serialize>(&self, label: &str, body: &T) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        if let Ok(json) = serde_json::to_string(body) {
            log::trace!("{label}: {json}");
        }
    }

    async fn ensure_success_response(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, LLMError> {
        log::debug!("{context} HTTP status: {}", response.status());
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().await?;
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LLMError::AuthError(error_text));
        }
        Err(LLMError::ResponseFormatError {
            message: format!("{context} returned error status: {status}"),
            raw_response: error_text,
        })
    }

    async fn send_and_parse(
        &self,
        body: &OpenAIChatRequest<'_>,
        context: &str,
    ) -> Result<OpenAIChatResponse, LLMError> {
        let url = self.completions_url()?;
        self.log_request_payload(context, body);
        let request = self
            .client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(body);
        let response = self.apply_timeout(request).send().await?;
        let response = self.ensure_success_response(response, context).await?;
        let resp_text = response.text().await?;
        serde_json::from_str(&resp_text).map_err(|e| LLMError::ResponseFormatError {
            message: format!("Failed to decode {context} response: {e}"),
            raw_response: resp_text,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAI {
    async fn chat_with_tools(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[Tool]>,
        tool_choice: ToolChoice,
    ) -> Result<Box<dyn ChatResponse>, LLMError> {
        let body = build_chat_request(&self.model, messages, tools, tool_choice);
        let response = self.send_and_parse(&body, "OpenAI chat completions").await?;
        Ok(Box::new(response))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn parse_base_url(raw: &str) -> Result<reqwest::Url, LLMError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    reqwest::Url::parse(&normalized)
        .map_err(|e| LLMError::InvalidRequest(format!("invalid base URL {raw}: {e}")))
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::tools::currency_tool;

    fn client_for(server: &mockito::ServerGuard) -> OpenAI {
        OpenAI::new("sk-test", Some(server.url()), None, Some(5)).unwrap()
    }

    #[test]
    fn empty_api_key_is_an_auth_error() {
        let err = OpenAI::new("", None, None, None).err();
        assert!(matches!(err, Some(LLMError::AuthError(_))));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = OpenAI::new("sk", Some("http://localhost:9/v1".into()), None, None).unwrap();
        assert_eq!(
            client.completions_url().unwrap().as_str(),
            "http://localhost:9/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn chat_with_tools_posts_and_parses_tool_calls() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "tool_choice": "auto",
                "messages": [{"role": "user", "content": "10 USD to EUR"}],
                "tools": [{"type": "function", "function": {"name": "convert_currency"}}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "model": "gpt-4o-2024-08-06",
                    "choices": [{
                        "index": 0,
                        "message": {
                            "role": "assistant",
                            "content": null,
                            "tool_calls": [{
                                "id": "call_abc",
                                "type": "function",
                                "function": {
                                    "name": "convert_currency",
                                    "arguments": "{\"amount\":10,\"from_currency\":\"USD\",\"to_currency\":\"EUR\"}"
                                }
                            }]
                        },
                        "finish_reason": "tool_calls"
                    }],
                    "usage": {"prompt_tokens": 80, "completion_tokens": 20, "total_tokens": 100}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let messages = [ChatMessage::user().content("10 USD to EUR").build()];
        let tools = [currency_tool()];
        let response = client
            .chat_with_tools(&messages, Some(&tools), ToolChoice::Auto)
            .await
            .unwrap();

        mock.assert_async().await;
        let calls = response.tool_calls().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call_abc");
        assert_eq!(calls[0].function.name, "convert_currency");
        assert_eq!(response.model().as_deref(), Some("gpt-4o-2024-08-06"));
        assert_eq!(response.usage().map(|u| u.total_tokens), Some(100));
        assert_eq!(response.text(), None);
    }

    #[tokio::test]
    async fn error_status_surfaces_raw_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let client = client_for(&server);
        let messages = [ChatMessage::user().content("hi").build()];
        let err = client
            .chat_with_tools(&messages, None, ToolChoice::Auto)
            .await
            .unwrap_err();
        match err {
            LLMError::ResponseFormatError { raw_response, .. } => {
                assert_eq!(raw_response, "upstream exploded")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_status_is_an_auth_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body("{\"error\":{\"message\":\"Incorrect API key\"}}")
            .create_async()
            .await;

        let client = client_for(&server);
        let messages = [ChatMessage::user().content("hi").build()];
        let err = client
            .chat_with_tools(&messages, None, ToolChoice::Auto)
            .await
            .unwrap_err();
        assert!(matches!(err, LLMError::AuthError(_)));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_format_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server);
        let messages = [ChatMessage::user().content("hi").build()];
        let err = client
            .chat_with_tools(&messages, None, ToolChoice::Auto)
            .await
            .unwrap_err();
        assert!(matches!(err, LLMError::ResponseFormatError { .. }));
    }
}
