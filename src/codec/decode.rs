use serde_json::{Map, Value};
use tracing::debug;

use super::keys;
use super::MatcherError;
use crate::domain::{Numeric, ValueMatcher};

/// Decode a matcher from its canonical payload.
///
/// Exactly one key group may be populated inside `value`: the range bounds
/// (`at_least` and/or `at_most`), `equals`, or `is_present`. Unrecognized
/// keys are ignored. Values are never coerced between types.
pub fn from_json(json: &Value) -> Result<ValueMatcher, MatcherError> {
    let result = decode(json);
    if let Err(ref e) = result {
        debug!(error = %e, "rejected matcher payload");
    }
    result
}

fn decode(json: &Value) -> Result<ValueMatcher, MatcherError> {
    let inner = json
        .get(keys::VALUE)
        .and_then(Value::as_object)
        .ok_or_else(|| MatcherError::invalid("missing or malformed 'value' object"))?;

    let groups = (
        inner.get(keys::AT_LEAST),
        inner.get(keys::AT_MOST),
        inner.get(keys::EQUALS),
        inner.get(keys::IS_PRESENT),
    );

    match groups {
        (None, None, None, None) => Err(MatcherError::invalid(format!(
            "no matcher keys found, expected one of {}, {}, {}, {}",
            keys::AT_LEAST,
            keys::AT_MOST,
            keys::EQUALS,
            keys::IS_PRESENT
        ))),
        (Some(lo), None, None, None) => {
            require_number(keys::AT_LEAST, lo).map(ValueMatcher::at_least)
        }
        (None, Some(hi), None, None) => {
            require_number(keys::AT_MOST, hi).map(ValueMatcher::at_most)
        }
        (Some(lo), Some(hi), None, None) => Ok(ValueMatcher::between(
            require_number(keys::AT_LEAST, lo)?,
            require_number(keys::AT_MOST, hi)?,
        )),
        (None, None, Some(expected), None) => match expected {
            Value::Number(n) => Numeric::from_json(n)
                .map(ValueMatcher::number_equals)
                .ok_or_else(|| MatcherError::invalid("'equals' is not a representable number")),
            Value::String(s) => Ok(ValueMatcher::string_equals(s.as_str())),
            other => Err(MatcherError::invalid(format!(
                "'{}' must be a number or string, found {}",
                keys::EQUALS,
                type_name(other)
            ))),
        },
        (None, None, None, Some(flag)) => match flag {
            Value::Bool(b) => Ok(ValueMatcher::present(*b)),
            other => Err(MatcherError::invalid(format!(
                "'{}' must be a boolean, found {}",
                keys::IS_PRESENT,
                type_name(other)
            ))),
        },
        _ => Err(MatcherError::invalid(format!(
            "conflicting matcher keys: {}",
            present_keys(inner).join(", ")
        ))),
    }
}

fn require_number(key: &str, value: &Value) -> Result<Numeric, MatcherError> {
    let number = match value {
        Value::Number(n) => Numeric::from_json(n),
        _ => None,
    };
    number.ok_or_else(|| {
        MatcherError::invalid(format!("'{key}' must be a number, found {}", type_name(value)))
    })
}

fn present_keys(inner: &Map<String, Value>) -> Vec<&'static str> {
    [keys::AT_LEAST, keys::AT_MOST, keys::EQUALS, keys::IS_PRESENT]
        .into_iter()
        .filter(|k| inner.contains_key(*k))
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for ValueMatcher {
    type Error = MatcherError;

    fn try_from(json: Value) -> Result<Self, Self::Error> {
        from_json(&json)
    }
}
