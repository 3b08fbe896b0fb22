//! Employer match classification.
//!
//! A pure decision table over the candidate count and, for a single
//! candidate, the employer text pulled from its headline:
//!
//! | candidates | headline employer                          | result      |
//! |------------|--------------------------------------------|-------------|
//! | 0          | -                                          | `NotFound`  |
//! | > 1        | -                                          | `Multiple`  |
//! | 1          | none                                       | `Weak`      |
//! | 1          | contains expected, or distance < threshold | `Positive`  |
//! | 1          | otherwise                                  | `Negative`  |

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::distance::edit_distance;
use crate::domain::CandidateProfile;
use crate::headline::{extract_employer, AtAnchor, ExtractionMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchKind {
    NotFound,
    Positive,
    Negative,
    Weak,
    Multiple,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::NotFound => "NOT_FOUND",
            MatchKind::Positive => "POSITIVE",
            MatchKind::Negative => "NEGATIVE",
            MatchKind::Weak => "WEAK",
            MatchKind::Multiple => "MULTIPLE",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one record's candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: MatchKind,
    /// The expected employer the decision was made against.
    pub employer: String,
    /// Headline employer text, when a single candidate had one.
    pub extracted: Option<String>,
    /// Edit distance between `employer` and `extracted`, when computed.
    pub distance: Option<usize>,
}

impl Classification {
    fn bare(kind: MatchKind, employer: &str) -> Self {
        Self {
            kind,
            employer: employer.to_string(),
            extracted: None,
            distance: None,
        }
    }
}

/// Classifies candidate sets against an expected employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchClassifier {
    threshold: usize,
    mode: ExtractionMode,
    anchor: AtAnchor,
}

impl Default for MatchClassifier {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

impl MatchClassifier {
    pub fn new(threshold: usize, mode: ExtractionMode) -> Self {
        Self {
            threshold,
            mode,
            anchor: AtAnchor::default(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.edit_distance_threshold, config.extraction).with_anchor(config.at_anchor)
    }

    pub fn with_anchor(mut self, anchor: AtAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn classify(&self, expected_employer: &str, candidates: &[CandidateProfile]) -> Classification {
        let candidate = match candidates {
            [] => return Classification::bare(MatchKind::NotFound, expected_employer),
            [only] => only,
            _ => return Classification::bare(MatchKind::Multiple, expected_employer),
        };

        let headline = candidate.headline.as_deref();
        let Some(extracted) = extract_employer(headline, self.mode, self.anchor) else {
            return Classification::bare(MatchKind::Weak, expected_employer);
        };

        let distance = edit_distance(expected_employer, extracted);
        let kind = if extracted.contains(expected_employer) || distance < self.threshold {
            MatchKind::Positive
        } else {
            MatchKind::Negative
        };

        Classification {
            kind,
            employer: expected_employer.to_string(),
            extracted: Some(extracted.to_string()),
            distance: Some(distance),
        }
    }
}

/// Classify with the default threshold and raw extraction.
pub fn classify(expected_employer: &str, candidates: &[CandidateProfile]) -> Classification {
    MatchClassifier::default().classify(expected_employer, candidates)
}
