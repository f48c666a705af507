use serde::Serialize;

use crate::chat::{ChatMessage, MessageType, Tool, ToolChoice};
use crate::ToolCall;

#[derive(Serialize, Debug)]
pub struct OpenAIChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<OpenAIChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<&'a [Tool]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    pub stream: bool,
}

/// One message of the chat-completions `messages` array.
#[derive(Serialize, Debug, PartialEq)]
pub struct OpenAIChatMessage<'a> {
    pub role: &'static str,
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<&'a [ToolCall]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<&'a str>,
}

pub fn build_chat_request<'a>(
    model: &'a str,
    messages: &'a [ChatMessage],
    tools: Option<&'a [Tool]>,
    tool_choice: ToolChoice,
) -> OpenAIChatRequest<'a> {
    let tools = tools.filter(|t| !t.is_empty());
    OpenAIChatRequest {
        model,
        messages: messages.iter().flat_map(map_message).collect(),
        tool_choice: tools.map(|_| tool_choice),
        tools,
        stream: false,
    }
}

fn map_message(message: &ChatMessage) -> Vec<OpenAIChatMessage<'_>> {
    match &message.message_type {
        MessageType::Text => vec![OpenAIChatMessage {
            role: message.role.as_str(),
            content: Some(message.content.as_str()),
            tool_calls: None,
            tool_call_id: None,
        }],
        MessageType::ToolUse(calls) => vec![OpenAIChatMessage {
            role: "assistant",
            content: Some(message.content.as_str()).filter(|c| !c.is_empty()),
            tool_calls: Some(calls.as_slice()),
            tool_call_id: None,
        }],
        MessageType::ToolResult(results) => results
            .iter()
            .map(|result| OpenAIChatMessage {
                role: "tool",
                content: Some(result.function.arguments.as_str()),
                tool_calls: None,
                tool_call_id: Some(result.id.as_str()),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests;
