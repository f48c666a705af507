//! Currency conversion assistant built on LLM tool calling.
//!
//! A user request goes to a chat model together with the `convert_currency`
//! tool schema. When the model asks for the tool, the request is answered
//! against the Frankfurter exchange-rate API and the result is handed back to
//! the model for a final phrasing. Every completed exchange is appended to an
//! interaction log.

use serde::{Deserialize, Serialize};

pub mod assistant;
pub mod backends;
pub mod builder;
pub mod chat;
pub mod config;
pub mod error;
pub mod monitor;
pub mod rates;
pub mod tools;

pub use assistant::Assistant;
pub use error::{AssistantError, LLMError};

/// Tool call requested by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// The ID of the tool call.
    pub id: String,
    /// The type of the tool call (usually "function").
    #[serde(rename = "type")]
    pub call_type: String,
    /// The function to call.
    pub function: FunctionCall,
}

impl std::fmt::Display for ToolCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => write!(f, "{}({})", self.function.name, self.function.arguments),
        }
    }
}

/// Function name and raw JSON arguments of a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// The name of the function to call.
    pub name: String,
    /// The arguments to pass to the function, JSON encoded.
    pub arguments: String,
}
