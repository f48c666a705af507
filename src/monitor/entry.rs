use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

use crate::chat::{ChatResponse, Usage};

const UNKNOWN_MODEL: &str = "unknown";

/// What the monitor needs to know about a model reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseRecord {
    pub model: Option<String>,
    pub text: Option<String>,
    pub usage: Option<Usage>,
}

impl ResponseRecord {
    pub fn from_response(response: &dyn ChatResponse) -> Self {
        Self {
            model: response.model(),
            text: response.text(),
            usage: response.usage(),
        }
    }
}

/// Token counters of one exchange, `null` when the provider sent no usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

impl From<Option<Usage>> for TokenCounts {
    fn from(usage: Option<Usage>) -> Self {
        match usage {
            Some(usage) => Self {
                input_tokens: Some(usage.prompt_tokens),
                output_tokens: Some(usage.completion_tokens),
                total_tokens: Some(usage.total_tokens),
            },
            None => Self::default(),
        }
    }
}

/// One persisted exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// UTC, ISO-8601 with a trailing `Z`
    pub timestamp: String,
    pub input: String,
    pub instructions: Option<String>,
    pub model: String,
    /// Older logs hold `null` here for tool-only replies; it reads back as `""`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub output: String,
    pub tokens: TokenCounts,
}

impl LogEntry {
    pub fn new(instructions: Option<&str>, input: &str, record: &ResponseRecord) -> Self {
        Self {
            timestamp: utc_timestamp(),
            input: input.to_string(),
            instructions: instructions.map(str::to_string),
            model: record
                .model
                .clone()
                .unwrap_or_else(|| UNKNOWN_MODEL.to_string()),
            output: record.text.clone().unwrap_or_default(),
            tokens: TokenCounts::from(record.usage),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_response_fields() {
        let entry = LogEntry::new(None, "hi", &ResponseRecord::default());

        assert_eq!(entry.model, "unknown");
        assert_eq!(entry.output, "");
        assert_eq!(entry.tokens, TokenCounts::default());
        assert!(entry.instructions.is_none());
    }

    #[test]
    fn usage_maps_to_token_counts() {
        let record = ResponseRecord {
            model: Some("gpt-4o".to_string()),
            text: Some("Done".to_string()),
            usage: Some(Usage {
                prompt_tokens: 7,
                completion_tokens: 3,
                total_tokens: 10,
            }),
        };
        let entry = LogEntry::new(Some("be nice"), "hi", &record);

        assert_eq!(entry.instructions.as_deref(), Some("be nice"));
        assert_eq!(entry.tokens.input_tokens, Some(7));
        assert_eq!(entry.tokens.output_tokens, Some(3));
        assert_eq!(entry.tokens.total_tokens, Some(10));
    }

    #[test]
    fn timestamp_is_utc_iso8601() {
        let entry = LogEntry::new(None, "hi", &ResponseRecord::default());

        assert!(entry.timestamp.ends_with('Z'));
        let parsed = chrono::NaiveDateTime::parse_from_str(
            entry.timestamp.trim_end_matches('Z'),
            "%Y-%m-%dT%H:%M:%S%.f",
        );
        assert!(parsed.is_ok(), "bad timestamp {}", entry.timestamp);
    }

    #[test]
    fn serialized_shape_uses_null_for_absent_values() {
        let entry = LogEntry {
            timestamp: "2026-10-18T09:00:00.000000Z".to_string(),
            input: "hi".to_string(),
            instructions: None,
            model: "unknown".to_string(),
            output: String::new(),
            tokens: TokenCounts::default(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "timestamp": "2026-10-18T09:00:00.000000Z",
                "input": "hi",
                "instructions": null,
                "model": "unknown",
                "output": "",
                "tokens": {"input_tokens": null, "output_tokens": null, "total_tokens": null}
            })
        );
    }

    #[test]
    fn null_output_reads_back_as_empty() {
        let entry: LogEntry = serde_json::from_value(serde_json::json!({
            "timestamp": "2025-06-01T12:00:00.000000Z",
            "input": "10 USD to EUR",
            "instructions": null,
            "model": "gpt-4o-2024-08-06",
            "output": null,
            "tokens": {"input_tokens": 81, "output_tokens": 20, "total_tokens": 101}
        }))
        .unwrap();

        assert_eq!(entry.output, "");
        assert_eq!(entry.tokens.total_tokens, Some(101));
    }
}
