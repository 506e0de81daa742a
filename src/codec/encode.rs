use serde_json::{Map, Value};

use super::keys;
use crate::domain::ValueMatcher;

/// Encode a matcher into its canonical payload.
pub fn to_json(matcher: &ValueMatcher) -> Value {
    let mut inner = Map::new();

    match matcher {
        ValueMatcher::NumberRange(range) => {
            if let Some(lo) = range.at_least() {
                inner.insert(keys::AT_LEAST.to_string(), lo.to_json());
            }
            if let Some(hi) = range.at_most() {
                inner.insert(keys::AT_MOST.to_string(), hi.to_json());
            }
        }
        ValueMatcher::NumberEquals { expected } => {
            inner.insert(keys::EQUALS.to_string(), expected.to_json());
        }
        ValueMatcher::StringEquals { expected } => {
            inner.insert(keys::EQUALS.to_string(), Value::String(expected.clone()));
        }
        ValueMatcher::Presence { must_be_present } => {
            inner.insert(keys::IS_PRESENT.to_string(), Value::Bool(*must_be_present));
        }
    }

    let mut outer = Map::new();
    outer.insert(keys::VALUE.to_string(), Value::Object(inner));
    Value::Object(outer)
}

impl From<ValueMatcher> for Value {
    fn from(matcher: ValueMatcher) -> Self {
        to_json(&matcher)
    }
}
