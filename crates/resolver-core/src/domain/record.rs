//! Input records, parsed names and candidate profiles.

use serde::{Deserialize, Serialize};

/// Employer placeholder used when an input line has no employer column.
pub const UNKNOWN_EMPLOYER: &str = "Unknown";

/// One line of tab-delimited input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub raw_name: String,
    pub expected_employer: String,
}

impl InputRecord {
    pub fn new(raw_name: impl Into<String>, expected_employer: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            expected_employer: expected_employer.into(),
        }
    }

    /// A record whose employer column was missing.
    pub fn without_employer(raw_name: impl Into<String>) -> Self {
        Self::new(raw_name, UNKNOWN_EMPLOYER)
    }

    /// The employer to narrow a lookup with, or `None` when it is `sentinel`.
    pub fn search_employer(&self, sentinel: &str) -> Option<&str> {
        if self.expected_employer == sentinel {
            None
        } else {
            Some(&self.expected_employer)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub first_name: String,
    pub last_name: String,
}

/// A profile returned by a people search.
///
/// Field names accept both snake_case and the camelCase used by
/// people-search payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "profileUrl", alias = "publicProfileUrl")]
    pub profile_url: String,
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}

impl CandidateProfile {
    pub fn new(
        id: impl Into<String>,
        profile_url: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            profile_url: profile_url.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            headline: None,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }
}

/// Candidates for one query, most relevant first.
pub type CandidateSet = Vec<CandidateProfile>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_employer_is_not_searched() {
        let record = InputRecord::without_employer("Paul Codding");
        assert_eq!(record.expected_employer, UNKNOWN_EMPLOYER);
        assert_eq!(record.search_employer(UNKNOWN_EMPLOYER), None);

        let record = InputRecord::new("Paul Codding", "Hortonworks");
        assert_eq!(record.search_employer(UNKNOWN_EMPLOYER), Some("Hortonworks"));
        assert_eq!(record.search_employer("Hortonworks"), None);
    }

    #[test]
    fn test_candidate_deserializes_camel_case() {
        let json = r#"{
            "id": "abc",
            "publicProfileUrl": "https://profiles.example/pcodding",
            "firstName": "Paul",
            "lastName": "Codding",
            "headline": "Solutions Engineer at Hortonworks"
        }"#;
        let candidate: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.profile_url, "https://profiles.example/pcodding");
        assert_eq!(candidate.first_name, "Paul");
        assert_eq!(
            candidate.headline.as_deref(),
            Some("Solutions Engineer at Hortonworks")
        );
    }

    #[test]
    fn test_candidate_missing_headline_is_none() {
        let json = r#"{"id": "x", "firstName": "A", "lastName": "B"}"#;
        let candidate: CandidateProfile = serde_json::from_str(json).unwrap();
        assert!(candidate.headline.is_none());
        assert!(candidate.profile_url.is_empty());
    }
}
