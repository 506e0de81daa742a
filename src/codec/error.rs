use thiserror::Error;

/// Errors produced when decoding a matcher payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    #[error("invalid matcher JSON: {0}")]
    InvalidJson(String),
}

impl MatcherError {
    /// Error domain shared by all matcher decoding failures.
    pub const DOMAIN: &'static str = "valmatch.matcher";

    /// Numeric code for [`MatcherError::InvalidJson`].
    pub const CODE_INVALID_JSON: i64 = 0;

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        MatcherError::InvalidJson(message.into())
    }

    /// Numeric error code.
    pub fn code(&self) -> i64 {
        match self {
            MatcherError::InvalidJson(_) => Self::CODE_INVALID_JSON,
        }
    }

    /// Human-readable description of the offending key or type.
    pub fn message(&self) -> &str {
        match self {
            MatcherError::InvalidJson(message) => message,
        }
    }
}
