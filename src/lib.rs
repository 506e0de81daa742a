pub mod codec;
pub mod config;
pub mod domain;
pub mod observability;
pub mod policy;
pub mod rules;

pub use codec::{from_json, to_json, MatcherError};
pub use config::Config;
pub use domain::{NumberRange, Numeric, Outcome, ValueMatcher};
pub use rules::{FieldRule, Rule, RuleSet};
