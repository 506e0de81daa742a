use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Numeric;

/// Inclusive numeric range with at least one bound.
///
/// Bounds are not reordered: a range whose lower bound exceeds its upper
/// bound is kept as given and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    at_least: Option<Numeric>,
    at_most: Option<Numeric>,
}

impl NumberRange {
    /// Lower bound, if any.
    pub fn at_least(&self) -> Option<Numeric> {
        self.at_least
    }

    /// Upper bound, if any.
    pub fn at_most(&self) -> Option<Numeric> {
        self.at_most
    }

    /// Check whether `n` lies within both bounds (inclusive).
    #[inline]
    pub fn contains(&self, n: Numeric) -> bool {
        self.at_least.map_or(true, |lo| lo <= n) && self.at_most.map_or(true, |hi| n <= hi)
    }
}

/// A predicate over a single decoded JSON value.
///
/// Serializes to and from the canonical payload
/// `{"value": {"at_least": .., "at_most": .., "equals": .., "is_present": ..}}`,
/// see [`crate::codec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub enum ValueMatcher {
    /// Number within an inclusive range
    NumberRange(NumberRange),
    /// Number equal to `expected`
    NumberEquals { expected: Numeric },
    /// String equal to `expected` (case-sensitive, no normalization)
    StringEquals { expected: String },
    /// Value presence (non-null) equal to `must_be_present`
    Presence { must_be_present: bool },
}

impl ValueMatcher {
    /// Matcher for a number that is at least `n`.
    pub fn at_least(n: impl Into<Numeric>) -> Self {
        ValueMatcher::NumberRange(NumberRange {
            at_least: Some(n.into()),
            at_most: None,
        })
    }

    /// Matcher for a number that is at most `n`.
    pub fn at_most(n: impl Into<Numeric>) -> Self {
        ValueMatcher::NumberRange(NumberRange {
            at_least: None,
            at_most: Some(n.into()),
        })
    }

    /// Matcher for a number in `[lower, upper]`.
    pub fn between(lower: impl Into<Numeric>, upper: impl Into<Numeric>) -> Self {
        ValueMatcher::NumberRange(NumberRange {
            at_least: Some(lower.into()),
            at_most: Some(upper.into()),
        })
    }

    /// Matcher for an exact number.
    pub fn number_equals(n: impl Into<Numeric>) -> Self {
        ValueMatcher::NumberEquals { expected: n.into() }
    }

    /// Matcher for an exact string.
    pub fn string_equals(s: impl Into<String>) -> Self {
        ValueMatcher::StringEquals { expected: s.into() }
    }

    /// Matcher for the presence (`true`) or absence (`false`) of a value.
    pub fn present(must_be_present: bool) -> Self {
        ValueMatcher::Presence { must_be_present }
    }

    /// Evaluate a possibly absent value.
    ///
    /// `None` and `Value::Null` are both treated as absent. Type mismatches
    /// evaluate to `false`; there is no coercion between strings and numbers.
    pub fn evaluate(&self, value: Option<&Value>) -> bool {
        match self {
            ValueMatcher::NumberRange(range) => {
                as_number(value).is_some_and(|n| range.contains(n))
            }
            ValueMatcher::NumberEquals { expected } => {
                as_number(value).is_some_and(|n| n == *expected)
            }
            ValueMatcher::StringEquals { expected } => {
                matches!(value, Some(Value::String(s)) if s == expected)
            }
            ValueMatcher::Presence { must_be_present } => {
                let present = !matches!(value, None | Some(Value::Null));
                present == *must_be_present
            }
        }
    }

    /// Evaluate a value that is known to exist (it may still be `null`).
    #[inline]
    pub fn matches(&self, value: &Value) -> bool {
        self.evaluate(Some(value))
    }

    /// The canonical JSON payload of this matcher.
    pub fn payload(&self) -> Value {
        crate::codec::to_json(self)
    }
}

fn as_number(value: Option<&Value>) -> Option<Numeric> {
    match value {
        Some(Value::Number(n)) => Numeric::from_json(n),
        _ => None,
    }
}
