//! JSON fixture profile source
//!
//! The fixture is an array of entries:
//!
//! ```json
//! [
//!   {
//!     "firstName": "Paul",
//!     "lastName": "Codding",
//!     "employer": "Hortonworks",
//!     "candidates": [
//!       { "id": "p1", "profileUrl": "https://...", "firstName": "Paul",
//!         "lastName": "Codding", "headline": "Solutions Engineer at Hortonworks" }
//!     ]
//!   }
//! ]
//! ```

use std::path::Path;

use async_trait::async_trait;
use resolver_core::{CandidateProfile, CandidateSet, LookupResult, ProfileSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Result;

/// One canned search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureEntry {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    /// When set, only lookups narrowed by this employer (or not narrowed at all) match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
}

impl FixtureEntry {
    fn matches(&self, first: &str, last: &str, employer: Option<&str>) -> bool {
        if self.first_name != first || self.last_name != last {
            return false;
        }
        match (self.employer.as_deref(), employer) {
            (Some(expected), Some(query)) => expected == query,
            _ => true,
        }
    }
}

/// Profile source answering from an in-memory list of fixture entries.
#[derive(Debug, Clone, Default)]
pub struct FixtureProfileSource {
    entries: Vec<FixtureEntry>,
}

impl FixtureProfileSource {
    pub fn new(entries: Vec<FixtureEntry>) -> Self {
        FixtureProfileSource { entries }
    }

    /// Load entries from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let source = Self::from_json(&content)?;
        info!(
            "Loaded {} fixture entries from {}",
            source.entries.len(),
            path.display()
        );
        Ok(source)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<FixtureEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ProfileSource for FixtureProfileSource {
    async fn lookup(
        &self,
        first_name: &str,
        last_name: &str,
        employer: Option<&str>,
    ) -> LookupResult<CandidateSet> {
        let candidates = self
            .entries
            .iter()
            .find(|entry| entry.matches(first_name, last_name, employer))
            .map(|entry| entry.candidates.clone())
            .unwrap_or_default();

        debug!(
            first_name = %first_name,
            last_name = %last_name,
            results = candidates.len(),
            "fixture lookup"
        );
        Ok(candidates)
    }
}
