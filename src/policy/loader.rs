use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::domain::RuleDocument;
use crate::rules::RuleSet;

/// Errors that can occur during rule document loading.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Load a rule document from a YAML or JSON file.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_document(path: impl AsRef<Path>) -> Result<RuleDocument, PolicyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let document: RuleDocument = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_document(&document)?;

    Ok(document)
}

/// Validate rule document structure.
fn validate_document(document: &RuleDocument) -> Result<(), PolicyError> {
    if document.version.is_empty() {
        return Err(PolicyError::Validation(
            "Document version cannot be empty".to_string(),
        ));
    }

    if document.rules.is_empty() {
        return Err(PolicyError::Validation(
            "Document must define at least one rule".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for rule in &document.rules {
        if rule.id.is_empty() {
            return Err(PolicyError::Validation("Rule ID cannot be empty".to_string()));
        }
        if !seen_ids.insert(&rule.id) {
            return Err(PolicyError::Validation(format!(
                "Duplicate rule ID: {}",
                rule.id
            )));
        }
    }

    Ok(())
}

/// Loads a rule document from disk and compiles it into a [`RuleSet`].
pub struct RuleLoader {
    path: PathBuf,
}

impl RuleLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RuleLoader { path: path.into() }
    }

    /// Load the document, returning it alongside its compiled rules.
    pub fn load(&self) -> Result<(RuleDocument, RuleSet), PolicyError> {
        let document = load_document(&self.path)?;
        let ruleset = RuleSet::from_document(&document);

        info!(
            path = %self.path.display(),
            version = %document.version,
            rules = ruleset.len(),
            "Loaded rule document"
        );

        Ok((document, ruleset))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
