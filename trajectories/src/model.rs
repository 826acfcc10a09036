//! Wire model for a single trajectory record.
//!
//! Records arrive as camelCase JSON from the agent's trajectory store. Every
//! field other than the discriminant is optional, and the untyped payloads
//! stay as [`serde_json::Value`] until a renderer reads them through
//! [`crate::steps`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One recorded step of an agent's execution history.
///
/// Every field decodes leniently: `null` or a value of the wrong JSON type
/// falls back to the field's default, so one malformed field never rejects
/// the record (or the list around it).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trajectory {
    #[serde(deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(deserialize_with = "lenient_integer")]
    pub session_id: Option<i64>,
    /// ISO-8601 creation timestamp.
    #[serde(deserialize_with = "lenient")]
    pub created: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub updated: Option<String>,
    /// Record discriminant, e.g. `"user_query"` or `"tool_execution"`.
    #[serde(deserialize_with = "lenient")]
    pub record_type: String,
    /// Tool discriminant for records that represent a tool call.
    #[serde(deserialize_with = "lenient")]
    pub tool_name: Option<String>,
    pub tool_parameters: Option<Value>,
    pub tool_result: Option<Value>,
    /// Payload whose shape depends on `record_type` / `tool_name`.
    pub step_data: Option<Value>,
    /// Title override supplied by the recorder.
    #[serde(deserialize_with = "lenient")]
    pub display_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_error: bool,
    #[serde(deserialize_with = "lenient")]
    pub error_message: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub error_type: Option<String>,
    pub error_details: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub current_cost: Option<f64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub input_tokens: Option<u64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub output_tokens: Option<u64>,
}

impl Trajectory {
    /// Tool name, with absent and empty names treated the same.
    #[must_use]
    pub fn tool(&self) -> &str {
        self.tool_name.as_deref().unwrap_or_default()
    }

    /// Field of `stepData`, if the payload is an object carrying it.
    #[must_use]
    pub fn step_field(&self, key: &str) -> Option<&Value> {
        self.step_data.as_ref().and_then(|data| data.get(key))
    }

    /// Field of `toolParameters`, if present.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.tool_parameters.as_ref().and_then(|params| params.get(key))
    }

    /// Field of `toolResult`, if the result is an object carrying it.
    #[must_use]
    pub fn result_field(&self, key: &str) -> Option<&Value> {
        self.tool_result.as_ref().and_then(|result| result.get(key))
    }
}

/// Decodes `T`, or `T::default()` when the value has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Integer field that also accepts integral floats such as `12.0`.
fn lenient_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer(&value).and_then(|int| T::try_from(int).ok()))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_integer(deserializer)?.unwrap_or_default())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    number
        .as_f64()
        .filter(|float| {
            float.is_finite() && float.fract() == 0.0 && *float >= i64::MIN as f64 && *float <= i64::MAX as f64
        })
        .map(|float| float as i64)
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
