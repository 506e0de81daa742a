pub mod matcher;
pub mod number;
pub mod outcome;
pub mod policy;

pub use matcher::{NumberRange, ValueMatcher};
pub use number::Numeric;
pub use outcome::Outcome;
pub use policy::{RuleDef, RuleDocument};
