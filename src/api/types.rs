//! API request and response types

use crate::session::{RequestType, ResponseType, SessionInput, SessionOutput};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request posted by the aggregator on every turn.
///
/// Decoding is lenient: a field of an unexpected JSON type is coerced or
/// dropped rather than failing the whole request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UssdRequest {
    #[serde(rename = "Type", deserialize_with = "lenient_text")]
    pub request_type: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub sequence: Option<i64>,
    #[serde(deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub client_state: Option<String>,

    // Informational, only used for log context
    #[serde(deserialize_with = "lenient_text")]
    pub mobile: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub session_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub service_code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub operator: Option<String>,
}

impl UssdRequest {
    /// Decode a raw body. Returns `None` for anything the responder should
    /// treat as an absent request: no body, malformed JSON, a scalar, or an
    /// empty object or array. A non-empty array has no fields, so it decodes
    /// as a request of unrecognized type.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        match &value {
            Value::Object(fields) if !fields.is_empty() => serde_json::from_value(value).ok(),
            Value::Array(items) if !items.is_empty() => Some(Self::default()),
            _ => None,
        }
    }

    pub fn to_session_input(&self) -> SessionInput {
        // A missing Type is not one we recognize
        let request_type = RequestType::parse(self.request_type.as_deref().unwrap_or_default());
        SessionInput {
            request_type,
            sequence: self.sequence,
            message: self.message.clone().unwrap_or_default(),
            client_state: self.client_state.clone(),
        }
    }
}

/// Response returned to the aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UssdResponse {
    pub message: String,
    #[serde(rename = "Type")]
    pub response_type: ResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
}

impl From<SessionOutput> for UssdResponse {
    fn from(output: SessionOutput) -> Self {
        let (message, response_type, client_state) = output.into_parts();
        Self {
            message,
            response_type,
            client_state,
        }
    }
}

/// Response for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Strings stay strings, numbers and booleans become their JSON text,
/// anything else is treated as missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Only integral JSON numbers are sequences. `2` and `2.0` are both step 2;
/// `"2"` or `2.5` are not a step.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| value.as_f64().and_then(integral_f64)))
}

// Exact comparison is intended; the bound is 2^63, exactly representable.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_f64(n: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (n.fract() == 0.0 && (-LIMIT..LIMIT).contains(&n)).then_some(n as i64)
}
