//! In-memory fakes for the profile source (testing only)
//!
//! `MemoryProfileSource` answers lookups from a scripted table and records
//! every call so tests can assert on what the driver asked for.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{CandidateProfile, CandidateSet, LookupError};
use crate::source::{LookupResult, ProfileSource};

/// One recorded `lookup` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCall {
    pub first_name: String,
    pub last_name: String,
    pub employer: Option<String>,
}

/// Profile source backed by a `HashMap<(first, last), scripted response>`.
///
/// Names with no scripted response return an empty candidate set.
#[derive(Debug, Default)]
pub struct MemoryProfileSource {
    responses: Mutex<HashMap<(String, String), LookupResult<CandidateSet>>>,
    calls: Mutex<Vec<LookupCall>>,
}

impl MemoryProfileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups for `first last` with `candidates`.
    pub fn with_candidates(self, first: &str, last: &str, candidates: Vec<CandidateProfile>) -> Self {
        self.insert(first, last, Ok(candidates));
        self
    }

    /// Fail lookups for `first last` with `error`.
    pub fn with_error(self, first: &str, last: &str, error: LookupError) -> Self {
        self.insert(first, last, Err(error));
        self
    }

    fn insert(&self, first: &str, last: &str, response: LookupResult<CandidateSet>) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert((first.to_string(), last.to_string()), response);
    }

    /// Every lookup made so far, in call order.
    pub fn calls(&self) -> Vec<LookupCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileSource for MemoryProfileSource {
    async fn lookup(
        &self,
        first_name: &str,
        last_name: &str,
        employer: Option<&str>,
    ) -> LookupResult<CandidateSet> {
        self.calls.lock().unwrap().push(LookupCall {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            employer: employer.map(str::to_string),
        });

        let responses = self.responses.lock().unwrap();
        responses
            .get(&(first_name.to_string(), last_name.to_string()))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
