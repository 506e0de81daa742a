use serde_json::Value;
use std::fmt::Debug;

/// A named predicate over a whole JSON document.
///
/// Rules are stateless and evaluated synchronously; implementations must
/// not retain the document past the call.
pub trait Rule: Send + Sync + Debug {
    /// Unique identifier for this rule.
    fn id(&self) -> &str;

    /// Evaluate the rule against a document.
    fn evaluate(&self, document: &Value) -> bool;
}
