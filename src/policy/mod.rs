pub mod loader;

pub use loader::{load_document, PolicyError, RuleLoader};
