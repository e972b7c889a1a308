//! Normalization of untrusted model output into [`EnrichmentData`].
//!
//! Model text is stripped of an optional ```` ```json ```` fence, parsed, and
//! every field is coerced to its expected shape. Instead of defaulting fields
//! silently, [`normalize_response`] reports which ones fell back, so callers
//! can log a degraded answer.

use serde_json::Value;

use crate::model::{EnrichmentData, Source};
use crate::{Result, ScoutError};

/// Placeholder used when the model gives no usable summary.
pub const NO_SUMMARY: &str = "No summary found.";

/// A field of [`EnrichmentData`] that can fall back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentField {
    Summary,
    WhatTheyDo,
    Keywords,
    DerivedSignals,
}

impl EnrichmentField {
    /// JSON key of the field in model output.
    pub fn key(self) -> &'static str {
        match self {
            EnrichmentField::Summary => "summary",
            EnrichmentField::WhatTheyDo => "whatTheyDo",
            EnrichmentField::Keywords => "keywords",
            EnrichmentField::DerivedSignals => "derivedSignals",
        }
    }
}

/// Normalized enrichment plus the fields that were defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub data: EnrichmentData,
    pub defaulted: Vec<EnrichmentField>,
}

impl Normalized {
    pub fn is_complete(&self) -> bool {
        self.defaulted.is_empty()
    }
}

/// Strips a leading ```` ```json ```` and a trailing ```` ``` ```` fence.
///
/// Each side is optional and independent; text without fences is returned
/// trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed.strip_prefix("```json").map(str::trim_start).unwrap_or(trimmed);
    without_open.strip_suffix("```").map(str::trim_end).unwrap_or(without_open)
}

/// Parses model text and coerces it into [`EnrichmentData`] for `url`.
///
/// Invalid JSON and a bare `null` are [`ScoutError::MalformedResponse`]. Any
/// other JSON normalizes: arrays and scalars simply default every field. One
/// source record for `url` stamped with the current time is always appended.
pub fn normalize_response(raw: &str, url: &str) -> Result<Normalized> {
    let value: Value = serde_json::from_str(strip_code_fence(raw)).map_err(ScoutError::MalformedResponse)?;
    if value.is_null() {
        return Err(ScoutError::MalformedResponse(serde::de::Error::custom("expected a JSON object, found null")));
    }
    Ok(normalize_value(&value, Source::now(url)))
}

fn normalize_value(value: &Value, source: Source) -> Normalized {
    let mut defaulted = Vec::new();

    let summary = match value.get("summary") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => {
            defaulted.push(EnrichmentField::Summary);
            NO_SUMMARY.to_string()
        }
    };

    let mut list = |field: EnrichmentField| -> Vec<String> {
        match value.get(field.key()) {
            Some(Value::Array(items)) => items.iter().filter_map(item_to_string).collect(),
            _ => {
                defaulted.push(field);
                Vec::new()
            }
        }
    };

    let what_they_do = list(EnrichmentField::WhatTheyDo);
    let keywords = list(EnrichmentField::Keywords);
    let derived_signals = list(EnrichmentField::DerivedSignals);

    Normalized {
        data: EnrichmentData { summary, what_they_do, keywords, derived_signals, sources: vec![source] },
        defaulted,
    }
}

fn item_to_string(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FULL: &str = r#"{
        "summary": "Acme sells rockets.",
        "whatTheyDo": ["Builds rockets", "Launches satellites"],
        "keywords": ["aerospace", "launch"],
        "derivedSignals": ["Hiring active"]
    }"#;

    #[test]
    fn test_full_response_is_complete() {
        let normalized = normalize_response(FULL, "https://acme.dev").unwrap();
        assert!(normalized.is_complete());
        assert_eq!(normalized.data.summary, "Acme sells rockets.");
        assert_eq!(normalized.data.what_they_do.len(), 2);
        assert_eq!(normalized.data.sources.len(), 1);
        assert_eq!(normalized.data.sources[0].url, "https://acme.dev");
    }

    #[test]
    fn test_fenced_equals_unfenced() {
        let fenced = format!("```json\n{FULL}\n```");
        let a = normalize_response(FULL, "https://acme.dev").unwrap();
        let b = normalize_response(&fenced, "https://acme.dev").unwrap();
        assert_eq!(a.data.summary, b.data.summary);
        assert_eq!(a.data.what_they_do, b.data.what_they_do);
        assert_eq!(a.data.keywords, b.data.keywords);
        assert_eq!(a.data.derived_signals, b.data.derived_signals);
        assert_eq!(a.defaulted, b.defaulted);
    }

    #[rstest]
    #[case("```json\n{}\n```", "{}")]
    #[case("```json{}```", "{}")]
    #[case("  {} ", "{}")]
    #[case("```json\n{}", "{}")]
    #[case("{}\n```", "{}")]
    #[case("```\n{}\n```", "```\n{}")]
    fn test_strip_code_fence(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(strip_code_fence(raw), expected);
    }

    #[test]
    fn test_missing_keywords_defaults_to_empty_list() {
        let raw = r#"{"summary":"s","whatTheyDo":["a"],"derivedSignals":["b"]}"#;
        let normalized = normalize_response(raw, "https://acme.dev").unwrap();
        assert!(normalized.data.keywords.is_empty());
        assert_eq!(normalized.defaulted, vec![EnrichmentField::Keywords]);

        let json = serde_json::to_value(&normalized.data).unwrap();
        assert_eq!(json["keywords"], serde_json::json!([]));
    }

    #[test]
    fn test_wrong_shapes_are_defaulted() {
        let raw = r#"{"summary":"","whatTheyDo":"not a list","keywords":null,"derivedSignals":{"a":1}}"#;
        let normalized = normalize_response(raw, "https://acme.dev").unwrap();
        assert_eq!(normalized.data.summary, NO_SUMMARY);
        assert_eq!(
            normalized.defaulted,
            vec![
                EnrichmentField::Summary,
                EnrichmentField::WhatTheyDo,
                EnrichmentField::Keywords,
                EnrichmentField::DerivedSignals
            ]
        );
    }

    #[rstest]
    #[case("[1, 2, 3]")]
    #[case("42")]
    #[case("\"just text\"")]
    fn test_non_object_json_defaults_everything(#[case] raw: &str) {
        let normalized = normalize_response(raw, "https://acme.dev").unwrap();
        assert_eq!(normalized.defaulted.len(), 4);
        assert_eq!(normalized.data.sources.len(), 1);
    }

    #[rstest]
    #[case("null")]
    #[case("```json\nnull\n```")]
    fn test_null_reply_is_malformed(#[case] raw: &str) {
        let result = normalize_response(raw, "https://acme.dev");
        assert!(matches!(result, Err(ScoutError::MalformedResponse(_))));
    }

    #[test]
    fn test_array_items_are_coerced() {
        let raw = r#"{"summary":"s","whatTheyDo":[],"keywords":["ai", 42, true, null, {"x":1}],"derivedSignals":[]}"#;
        let normalized = normalize_response(raw, "https://acme.dev").unwrap();
        assert_eq!(normalized.data.keywords, vec!["ai", "42", "true"]);
        assert!(normalized.is_complete());
    }

    #[test]
    fn test_malformed_json_is_typed_error() {
        let result = normalize_response(r#"{"summary": "cut off"#, "https://acme.dev");
        assert!(matches!(result, Err(ScoutError::MalformedResponse(_))));
    }
}
