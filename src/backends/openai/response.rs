use serde::Deserialize;

use crate::chat::{ChatResponse, Usage};
use crate::ToolCall;

#[derive(Debug, Deserialize)]
pub struct OpenAIChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<OpenAIChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIChatChoice {
    pub message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl OpenAIChatResponse {
    fn first_message(&self) -> Option<&OpenAIResponseMessage> {
        self.choices.first().map(|choice| &choice.message)
    }
}

impl std::fmt::Display for OpenAIChatResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut wrote = false;
        if let Some(tool_calls) = self.tool_calls() {
            for tool_call in tool_calls {
                write!(f, "{tool_call}")?;
            }
            wrote = true;
        }
        if let Some(text) = self.text() {
            write!(f, "{text}")?;
            wrote = true;
        }
        if !wrote {
            write!(f, "No response content")?;
        }
        Ok(())
    }
}

impl ChatResponse for OpenAIChatResponse {
    fn text(&self) -> Option<String> {
        self.first_message()?.content.clone()
    }

    fn tool_calls(&self) -> Option<Vec<ToolCall>> {
        self.first_message()?
            .tool_calls
            .clone()
            .filter(|calls| !calls.is_empty())
    }

    fn usage(&self) -> Option<Usage> {
        self.usage
    }

    fn model(&self) -> Option<String> {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests;
