use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ValueMatcher;

/// Versioned collection of field rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Document version identifier
    pub version: String,

    /// Rule definitions
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

/// Definition of a single field rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDef {
    /// Unique rule identifier
    pub id: String,

    /// Key of the value inside the innermost scope object.
    /// When absent the scoped object itself is matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Object keys walked from the document root before `key`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,

    /// Matcher applied to the resolved value
    pub matcher: ValueMatcher,
}

impl RuleDef {
    /// Resolve the value this rule inspects.
    ///
    /// Returns `None` when any key along the path is missing or an
    /// intermediate value is not an object.
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        self.scope
            .iter()
            .chain(self.key.iter())
            .try_fold(document, |current, key| current.as_object()?.get(key))
    }
}
