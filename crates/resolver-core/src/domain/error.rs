//! Error taxonomy for employer resolution.

/// A raw display name that could not be split into first and last name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot split name {raw:?} into first/last ({tokens} tokens)")]
pub struct NameParseError {
    pub raw: String,
    pub tokens: usize,
}

/// Failures surfaced by a [`crate::ProfileSource`] lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Rate limit or quota exhausted. Ends the run.
    #[error("profile source throttled: {0}")]
    Throttled(String),

    /// Any other lookup failure. The record is skipped.
    #[error("profile lookup failed: {0}")]
    Failed(String),
}

impl LookupError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, LookupError::Throttled(_))
    }
}

/// Errors that abort a resolution run.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("throttle limit reached while processing {name}: {reason}")]
    Throttled { name: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;
