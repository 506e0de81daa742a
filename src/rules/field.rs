use serde_json::Value;

use crate::domain::{RuleDef, ValueMatcher};
use crate::rules::traits::Rule;

/// Applies a [`ValueMatcher`] to the value found at a key path.
///
/// A missing path resolves to an absent value, so only presence matchers
/// with `is_present: false` accept it.
#[derive(Debug, Clone)]
pub struct FieldRule {
    def: RuleDef,
}

impl FieldRule {
    /// Create a rule matching the value under `key` at the document root.
    pub fn new(id: impl Into<String>, key: impl Into<String>, matcher: ValueMatcher) -> Self {
        FieldRule {
            def: RuleDef {
                id: id.into(),
                key: Some(key.into()),
                scope: Vec::new(),
                matcher,
            },
        }
    }

    /// Nest the key lookup under a path of object keys.
    pub fn with_scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.def.scope = scope.into_iter().map(Into::into).collect();
        self
    }
}

impl From<RuleDef> for FieldRule {
    fn from(def: RuleDef) -> Self {
        FieldRule { def }
    }
}

impl Rule for FieldRule {
    fn id(&self) -> &str {
        &self.def.id
    }

    fn evaluate(&self, document: &Value) -> bool {
        self.def.matcher.evaluate(self.def.resolve(document))
    }
}
