pub mod field;
pub mod stream;
pub mod traits;

pub use field::FieldRule;
pub use stream::{evaluate_stream, StreamError};
pub use traits::Rule;

use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{Outcome, RuleDocument};

/// Collection of rules ready for evaluation.
#[derive(Debug)]
pub struct RuleSet {
    pub rules: Vec<Arc<dyn Rule>>,
    pub version: String,
}

impl RuleSet {
    /// Build rules from a rule document.
    pub fn from_document(document: &RuleDocument) -> Self {
        let rules = document
            .rules
            .iter()
            .map(|def| Arc::new(FieldRule::from(def.clone())) as Arc<dyn Rule>)
            .collect();

        RuleSet {
            rules,
            version: document.version.clone(),
        }
    }

    /// Create an empty rule set.
    pub fn empty() -> Self {
        RuleSet {
            rules: Vec::new(),
            version: "0.0.0".to_string(),
        }
    }

    /// Add a rule.
    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Arc::new(rule));
    }

    /// Evaluate every rule against a document, in declaration order.
    pub fn evaluate(&self, document: &Value) -> Outcome {
        let mut outcome = Outcome::default();
        for rule in &self.rules {
            let hit = rule.evaluate(document);
            debug!(rule_id = rule.id(), hit, "rule evaluated");
            outcome.record(rule.id(), hit);
        }
        outcome
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
