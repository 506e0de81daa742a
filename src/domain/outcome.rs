use serde::{Deserialize, Serialize};

/// Result of evaluating a rule set against one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Ids of rules whose matcher accepted the resolved value
    pub matched: Vec<String>,

    /// Ids of rules whose matcher rejected the resolved value
    pub unmatched: Vec<String>,
}

impl Outcome {
    /// Record a single rule result.
    pub fn record(&mut self, rule_id: &str, hit: bool) {
        if hit {
            self.matched.push(rule_id.to_string());
        } else {
            self.unmatched.push(rule_id.to_string());
        }
    }

    /// Whether the rule with `rule_id` matched.
    pub fn is_match(&self, rule_id: &str) -> bool {
        self.matched.iter().any(|id| id == rule_id)
    }

    /// Total number of rules evaluated.
    pub fn len(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
