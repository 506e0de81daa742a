//! Canonical JSON encoding of [`ValueMatcher`](crate::domain::ValueMatcher).
//!
//! ```text
//! { "value": { "at_least": <number>, "at_most": <number>,
//!              "equals": <number>|<string>, "is_present": <boolean> } }
//! ```

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::from_json;
pub use encode::to_json;
pub use error::MatcherError;

/// Payload key names.
pub mod keys {
    pub const VALUE: &str = "value";
    pub const AT_LEAST: &str = "at_least";
    pub const AT_MOST: &str = "at_most";
    pub const EQUALS: &str = "equals";
    pub const IS_PRESENT: &str = "is_present";
}
