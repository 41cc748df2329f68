//! Raw request payload and the required-field validators.

use serde_json::{Map, Value};

use crate::services::{ServiceError, ServiceResult};

/// Untyped field mapping received from the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestPayload(Map<String, Value>);

impl RequestPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON object; any other value yields an empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Nested mapping stored under `name`, or an empty payload when absent.
    pub fn field(&self, name: &str) -> RequestPayload {
        match self.0.get(name) {
            Some(Value::Object(fields)) => Self(fields.clone()),
            _ => Self::default(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for RequestPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Returns the field as a string, failing with `Empty {field}` when it is
/// absent, null or blank after trimming.
pub fn require_non_empty_string(field: &str, payload: &RequestPayload) -> ServiceResult<String> {
    payload
        .get(field)
        .and_then(coerce_to_string)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation(format!("Empty {field}")))
}

/// Like [`require_non_empty_string`] followed by a permissive integer cast:
/// the leading numeric part is used and non-numeric text becomes `0`.
pub fn require_integer(field: &str, payload: &RequestPayload) -> ServiceResult<i64> {
    require_non_empty_string(field, payload).map(|value| loose_integer(&value))
}

fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Casts the leading numeric part of `raw`, scanned once from the left.
///
/// Accepts an optional sign, digits, a fraction and an exponent. Values
/// outside the `i64` range saturate; text without a leading number is `0`.
fn loose_integer(raw: &str) -> i64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut is_float = false;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = leading_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            is_float = true;
        }
    }
    if !is_float && int_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
            is_float = true;
        }
    }

    let number = &text[..end];
    let exact = if is_float {
        None
    } else {
        number.parse::<i64>().ok()
    };

    // Float to integer casts truncate and saturate at the i64 bounds.
    exact.unwrap_or_else(|| number.parse::<f64>().map_or(0, |value| value as i64))
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
