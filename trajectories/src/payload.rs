//! Defensive readers for untyped JSON payloads.
//!
//! Payload fields may be absent, null, or of an unexpected JSON type. These
//! helpers turn such values into display text without ever failing.

use serde_json::Value;

/// String field, only when the value is a JSON string.
#[must_use]
pub fn str_at<'a>(value: Option<&'a Value>) -> Option<&'a str> {
    value.and_then(Value::as_str)
}

/// Display text for any present, non-null value.
///
/// Strings are returned verbatim, scalars via `Display`, and structured values
/// as compact JSON.
#[must_use]
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Formats a value for a parameter/result block.
///
/// `null` renders as the literal `null`, objects and arrays as 2-space pretty
/// JSON, everything else as plain text.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => pretty_json(value),
        other => other.to_string(),
    }
}

/// 2-space indented JSON, falling back to compact output.
#[must_use]
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Whether a payload object has at least one entry.
#[must_use]
pub fn has_entries(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        _ => false,
    }
}

/// Whether a tool result carries anything worth showing.
///
/// Empty objects and arrays do not count; an empty string does.
#[must_use]
pub fn has_result(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Object(_) | Value::Array(_)) => has_entries(value),
        Some(_) => true,
    }
}

/// `key: value` pairs of an object payload in payload order.
#[must_use]
pub fn entries(value: Option<&Value>) -> Vec<(String, String)> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, v)| (key.clone(), format_value(v)))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
