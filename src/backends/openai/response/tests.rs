use super::*;
use serde_json::json;

fn parse(value: serde_json::Value) -> OpenAIChatResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn text_comes_from_first_choice() {
    let response = parse(json!({
        "model": "gpt-4o",
        "choices": [
            {"message": {"role": "assistant", "content": "First"}},
            {"message": {"role": "assistant", "content": "Second"}}
        ]
    }));

    assert_eq!(response.text().as_deref(), Some("First"));
    assert!(response.tool_calls().is_none());
    assert!(response.usage().is_none());
}

#[test]
fn empty_tool_call_list_reads_as_none() {
    let response = parse(json!({
        "choices": [{"message": {"content": "hi", "tool_calls": []}}]
    }));

    assert!(response.tool_calls().is_none());
    assert!(response.model().is_none());
}

#[test]
fn missing_choices_yield_no_text() {
    let response = parse(json!({"model": "gpt-4o", "choices": []}));

    assert!(response.text().is_none());
    assert_eq!(format!("{response}"), "No response content");
}

#[test]
fn usage_ignores_detail_fields() {
    let response = parse(json!({
        "choices": [],
        "usage": {
            "prompt_tokens": 12,
            "completion_tokens": 3,
            "total_tokens": 15,
            "prompt_tokens_details": {"cached_tokens": 0}
        }
    }));

    let usage = response.usage().unwrap();
    assert_eq!(usage.prompt_tokens, 12);
    assert_eq!(usage.completion_tokens, 3);
    assert_eq!(usage.total_tokens, 15);
}

#[test]
fn display_shows_tool_calls_without_text() {
    let response = parse(json!({
        "choices": [{"message": {
            "content": null,
            "tool_calls": [{
                "id": "call_1",
                "type": "function",
                "function": {"name": "convert_currency", "arguments": "{}"}
            }]
        }}]
    }));

    let rendered = format!("{response}");
    assert!(rendered.contains("\"name\": \"convert_currency\""));
}
