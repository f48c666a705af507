use super::*;
use crate::chat::FunctionTool;
use crate::FunctionCall;
use serde_json::json;

fn sample_tool() -> Tool {
    Tool {
        tool_type: "function".to_string(),
        function: FunctionTool {
            name: "convert_currency".to_string(),
            description: "Convert".to_string(),
            parameters: json!({"type": "object"}),
        },
    }
}

fn sample_call(arguments: &str) -> ToolCall {
    ToolCall {
        id: "call_1".to_string(),
        call_type: "function".to_string(),
        function: FunctionCall {
            name: "convert_currency".to_string(),
            arguments: arguments.to_string(),
        },
    }
}

#[test]
fn text_messages_keep_role_and_content() {
    let messages = vec![
        ChatMessage::system().content("be brief").build(),
        ChatMessage::user().content("hello").build(),
    ];
    let request = build_chat_request("gpt-4o", &messages, None, ToolChoice::Auto);
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hello"}
            ],
            "stream": false
        })
    );
}

#[test]
fn tool_choice_is_only_sent_with_tools() {
    let messages = vec![ChatMessage::user().content("hello").build()];
    let tools = vec![sample_tool()];

    let with_tools = build_chat_request("m", &messages, Some(&tools), ToolChoice::None);
    assert_eq!(with_tools.tool_choice, Some(ToolChoice::None));

    let empty: Vec<Tool> = Vec::new();
    let without = build_chat_request("m", &messages, Some(&empty), ToolChoice::None);
    assert!(without.tools.is_none());
    assert!(without.tool_choice.is_none());
}

#[test]
fn tool_use_and_results_map_to_assistant_and_tool_roles() {
    let messages = vec![
        ChatMessage::user().content("10 USD in EUR?").build(),
        ChatMessage::assistant()
            .tool_use(vec![sample_call("{\"amount\":10}")])
            .build(),
        ChatMessage::tool()
            .tool_result(vec![sample_call("10 USD is 9.2 EUR at the current rate.")])
            .build(),
    ];
    let tools = vec![sample_tool()];
    let request = build_chat_request("gpt-4o", &messages, Some(&tools), ToolChoice::None);
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["tool_choice"], "none");
    assert_eq!(
        body["messages"][1],
        json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_1",
                "type": "function",
                "function": {"name": "convert_currency", "arguments": "{\"amount\":10}"}
            }]
        })
    );
    assert_eq!(
        body["messages"][2],
        json!({
            "role": "tool",
            "content": "10 USD is 9.2 EUR at the current rate.",
            "tool_call_id": "call_1"
        })
    );
}

#[test]
fn tool_use_keeps_assistant_text() {
    let messages = vec![ChatMessage::assistant()
        .content("Let me check.")
        .tool_use(vec![sample_call("{}")])
        .build()];
    let request = build_chat_request("m", &messages, None, ToolChoice::Auto);
    assert_eq!(request.messages[0].content, Some("Let me check."));
}
