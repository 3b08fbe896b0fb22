//! Resolver tunables.

use serde::{Deserialize, Serialize};

use crate::domain::{ResolverError, Result, UNKNOWN_EMPLOYER};
use crate::headline::{AtAnchor, ExtractionMode};

/// Default edit-distance cutoff below which a headline employer counts as a match.
pub const DEFAULT_EDIT_DISTANCE_THRESHOLD: usize = 5;

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Distances strictly below this are a POSITIVE match
    pub edit_distance_threshold: usize,
    /// Whether headline captures are trimmed before comparison
    pub extraction: ExtractionMode,
    /// Which ` at ` in a headline starts the employer capture
    #[serde(default)]
    pub at_anchor: AtAnchor,
    /// Employer placeholder for input lines without an employer column
    pub unknown_employer: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            edit_distance_threshold: DEFAULT_EDIT_DISTANCE_THRESHOLD,
            extraction: ExtractionMode::Raw,
            at_anchor: AtAnchor::Last,
            unknown_employer: UNKNOWN_EMPLOYER.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Defaults overridden by `RESOLVER_EDIT_DISTANCE_THRESHOLD`,
    /// `RESOLVER_TRIM_EXTRACTED` and `RESOLVER_AT_ANCHOR` (`first` / `last`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("RESOLVER_EDIT_DISTANCE_THRESHOLD") {
            config.edit_distance_threshold = raw.trim().parse().map_err(|_| {
                ResolverError::Config(format!(
                    "RESOLVER_EDIT_DISTANCE_THRESHOLD must be a non-negative integer, got {raw:?}"
                ))
            })?;
        }

        if let Some(raw) = lookup("RESOLVER_TRIM_EXTRACTED") {
            config.extraction = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => ExtractionMode::Trimmed,
                "0" | "false" | "no" | "" => ExtractionMode::Raw,
                other => {
                    return Err(ResolverError::Config(format!(
                        "RESOLVER_TRIM_EXTRACTED must be a boolean, got {other:?}"
                    )))
                }
            };
        }

        if let Some(raw) = lookup("RESOLVER_AT_ANCHOR") {
            config.at_anchor = match raw.trim().to_ascii_lowercase().as_str() {
                "last" | "" => AtAnchor::Last,
                "first" => AtAnchor::First,
                other => {
                    return Err(ResolverError::Config(format!(
                        "RESOLVER_AT_ANCHOR must be `first` or `last`, got {other:?}"
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.edit_distance_threshold = threshold;
        self
    }

    pub fn with_extraction(mut self, mode: ExtractionMode) -> Self {
        self.extraction = mode;
        self
    }

    pub fn with_at_anchor(mut self, anchor: AtAnchor) -> Self {
        self.at_anchor = anchor;
        self
    }
}
