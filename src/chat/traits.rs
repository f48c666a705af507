use async_trait::async_trait;

use crate::error::LLMError;
use crate::ToolCall;

use super::message::ChatMessage;
use super::tool::{Tool, ToolChoice};
use super::usage::Usage;

pub trait ChatResponse: std::fmt::Debug + std::fmt::Display + Send + Sync {
    fn text(&self) -> Option<String>;
    fn tool_calls(&self) -> Option<Vec<ToolCall>>;
    fn usage(&self) -> Option<Usage> {
        None
    }
    /// Model identifier reported by the provider for this response.
    fn model(&self) -> Option<String> {
        None
    }
}

/// Trait for providers that support chat-style interactions.
#[async_trait]
pub trait ChatProvider: Sync + Send {
    async fn chat_with_tools(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[Tool]>,
        tool_choice: ToolChoice,
    ) -> Result<Box<dyn ChatResponse>, LLMError>;

    /// Model identifier requests are sent with.
    fn model(&self) -> &str;
}
