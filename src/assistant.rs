//! Single-turn tool-calling exchange.
//!
//! One user request costs one model call when the model answers directly, and
//! two when it asks for `convert_currency`: the tool output goes back to the
//! model with tool use disabled so it can phrase the final answer.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde_json::Value;

use crate::builder::LLMBuilder;
use crate::chat::{ChatMessage, ChatProvider, ChatResponse, Tool, ToolChoice};
use crate::config::{AssistantConfig, ConfigError};
use crate::error::AssistantError;
use crate::monitor::{ResponseMonitor, ResponseRecord};
use crate::rates::RateClient;
use crate::tools::{default_tools, ConversionRequest, CONVERT_CURRENCY};
use crate::{FunctionCall, ToolCall};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful currency conversion assistant. \
When the user asks to convert one currency to another, \
always use the `convert_currency` tool to get the live rate. \
Then respond with only that result in a natural and helpful tone.";

pub const TOOL_NOT_IMPLEMENTED: &str = "❌ Tool not implemented.";

pub struct Assistant {
    provider: Arc<dyn ChatProvider>,
    rates: RateClient,
    monitor: ResponseMonitor,
    tools: Vec<Tool>,
    system_prompt: String,
}

impl Assistant {
    pub fn new(provider: Arc<dyn ChatProvider>, rates: RateClient, monitor: ResponseMonitor) -> Self {
        Self {
            provider,
            rates,
            monitor,
            tools: default_tools(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Wires the OpenAI provider, rate client and monitor from configuration.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, ConfigError> {
        let mut builder = LLMBuilder::new()
            .api_key(config.require_api_key()?.expose_secret().clone())
            .model(&config.model)
            .timeout_seconds(config.llm_timeout_seconds);
        if let Some(base_url) = &config.openai_base_url {
            builder = builder.base_url(base_url);
        }
        let provider = builder.build()?;
        let rates = RateClient::new(&config.rates_base_url, config.rates_timeout_seconds);
        let monitor = ResponseMonitor::new(&config.log_file, config.log_format);
        Ok(Self::new(Arc::new(provider), rates, monitor)
            .with_system_prompt(&config.system_prompt))
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub fn monitor(&self) -> &ResponseMonitor {
        &self.monitor
    }

    /// Answers one user request.
    ///
    /// Only the first tool call of a reply is executed. A request for an
    /// unknown tool short-circuits without a second model call and without a
    /// log entry.
    pub async fn respond(&self, user_input: &str) -> Result<String, AssistantError> {
        let messages = [
            ChatMessage::system().content(&self.system_prompt).build(),
            ChatMessage::user().content(user_input).build(),
        ];
        let reply = self
            .provider
            .chat_with_tools(&messages, Some(self.tools.as_slice()), ToolChoice::Auto)
            .await?;

        match reply.tool_calls().filter(|calls| !calls.is_empty()) {
            Some(calls) => self.answer_with_tool(user_input, reply.as_ref(), calls).await,
            None => {
                self.record(user_input, reply.as_ref())?;
                Ok(reply.text().unwrap_or_default())
            }
        }
    }

    async fn answer_with_tool(
        &self,
        user_input: &str,
        reply: &dyn ChatResponse,
        calls: Vec<ToolCall>,
    ) -> Result<String, AssistantError> {
        let call = calls[0].clone();
        if calls.len() > 1 {
            log::warn!(
                "model requested {} tool calls; only {} is executed",
                calls.len(),
                call.id
            );
        }
        log::info!("Tool call detected: {call}");

        let arguments: Value = serde_json::from_str(&call.function.arguments)
            .map_err(AssistantError::ToolArguments)?;
        let Some(output) = self.run_tool(&call.function.name, arguments).await? else {
            log::warn!("model requested unknown tool {}", call.function.name);
            return Ok(TOOL_NOT_IMPLEMENTED.to_string());
        };
        log::info!("Tool output: {output}");

        let follow_up = [
            ChatMessage::user().content(user_input).build(),
            ChatMessage::assistant()
                .content(reply.text().unwrap_or_default())
                .tool_use(calls)
                .build(),
            ChatMessage::tool()
                .tool_result(vec![ToolCall {
                    id: call.id,
                    call_type: call.call_type,
                    function: FunctionCall {
                        name: call.function.name,
                        arguments: output.clone(),
                    },
                }])
                .build(),
        ];
        let final_reply = self
            .provider
            .chat_with_tools(&follow_up, Some(self.tools.as_slice()), ToolChoice::None)
            .await?;

        self.record(user_input, final_reply.as_ref())?;
        Ok(final_reply
            .text()
            .filter(|text| !text.is_empty())
            .unwrap_or(output))
    }

    /// Runs a known tool; `None` when no tool has that name.
    async fn run_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<Option<String>, AssistantError> {
        match name {
            CONVERT_CURRENCY => {
                let request: ConversionRequest =
                    serde_json::from_value(arguments).map_err(AssistantError::ToolArguments)?;
                let result = self
                    .rates
                    .convert(request.amount, &request.from_currency, &request.to_currency)
                    .await;
                if let Some(kind) = result.error_kind() {
                    log::warn!("conversion failed ({kind:?}): {result}");
                }
                Ok(Some(result.to_string()))
            }
            _ => Ok(None),
        }
    }

    fn record(
        &self,
        user_input: &str,
        response: &dyn ChatResponse,
    ) -> Result<(), AssistantError> {
        let record = ResponseRecord::from_response(response);
        self.monitor.record(None, user_input, &record)?;
        Ok(())
    }
}
