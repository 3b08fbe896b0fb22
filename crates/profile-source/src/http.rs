//! People-search HTTP client
//!
//! Issues one `GET {base_url}/people-search` per lookup, sorted by
//! relevance, and maps the response onto the resolver's lookup contract:
//!
//! - 2xx with `{ "people": [...] }` → candidates (capped at `max_results`)
//! - 429, or any error body mentioning `Throttle` → `LookupError::Throttled`
//! - anything else → `LookupError::Failed`

use std::time::Duration;

use async_trait::async_trait;
use resolver_core::{CandidateProfile, CandidateSet, LookupError, LookupResult, ProfileSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SourceError;
use crate::Result;

const THROTTLE_MARKER: &str = "Throttle";
const DEFAULT_MAX_RESULTS: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSourceConfig {
    /// Base URL of the people-search API
    pub base_url: String,
    /// Bearer token (optional for open endpoints)
    pub token: Option<String>,
    /// Maximum candidates kept per lookup
    pub max_results: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpSourceConfig {
    /// Create config for a specific server
    pub fn new(base_url: &str) -> Self {
        HttpSourceConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            max_results: DEFAULT_MAX_RESULTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `PROFILE_SOURCE_URL`, `PROFILE_SOURCE_TOKEN`,
    /// `PROFILE_SOURCE_MAX_RESULTS` and `PROFILE_SOURCE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PROFILE_SOURCE_URL")
            .map_err(|_| SourceError::Config("PROFILE_SOURCE_URL not set".to_string()))?;
        let mut config = Self::new(&base_url);
        config.token = std::env::var("PROFILE_SOURCE_TOKEN").ok();

        if let Ok(raw) = std::env::var("PROFILE_SOURCE_MAX_RESULTS") {
            config.max_results = raw.parse().map_err(|_| {
                SourceError::Config(format!("PROFILE_SOURCE_MAX_RESULTS is not a number: {raw}"))
            })?;
        }
        if let Ok(raw) = std::env::var("PROFILE_SOURCE_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|_| {
                SourceError::Config(format!("PROFILE_SOURCE_TIMEOUT_SECS is not a number: {raw}"))
            })?;
        }

        Ok(config)
    }

    /// Set authentication token
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Search response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub people: Vec<CandidateProfile>,
}

/// People-search client
pub struct HttpProfileSource {
    config: HttpSourceConfig,
    http_client: reqwest::Client,
}

impl HttpProfileSource {
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("employer-resolver/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(HttpProfileSource {
            config,
            http_client,
        })
    }

    /// Create client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(HttpSourceConfig::from_env()?)
    }

    fn search_url(&self) -> String {
        format!("{}/people-search", self.config.base_url)
    }
}

/// Map a status code and body onto the lookup contract.
pub(crate) fn interpret_response(
    status: u16,
    body: &str,
    max_results: usize,
) -> LookupResult<CandidateSet> {
    if status == 429 {
        return Err(LookupError::Throttled(format!("HTTP 429: {}", snippet(body))));
    }
    if !(200..300).contains(&status) {
        if body.contains(THROTTLE_MARKER) {
            return Err(LookupError::Throttled(snippet(body).to_string()));
        }
        return Err(LookupError::Failed(format!("HTTP {}: {}", status, snippet(body))));
    }

    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::Failed(format!("invalid search response: {e}")))?;

    let mut people = response.people;
    people.truncate(max_results);
    Ok(people)
}

fn snippet(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn lookup(
        &self,
        first_name: &str,
        last_name: &str,
        employer: Option<&str>,
    ) -> LookupResult<CandidateSet> {
        info!(
            "Searching for user with firstName: {} and lastName: {}",
            first_name, last_name
        );

        let count = self.config.max_results.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("first-name", first_name),
            ("last-name", last_name),
            ("sort", "relevance"),
            ("count", count.as_str()),
        ];
        if let Some(company) = employer {
            query.push(("company-name", company));
        }

        let mut request = self.http_client.get(self.search_url()).query(&query);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LookupError::Failed(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Failed(e.to_string()))?;
        debug!(status = status, bytes = body.len(), "search response");

        let people = interpret_response(status, &body, self.config.max_results)?;

        info!("Total search result: {}", people.len());
        for person in &people {
            if person.id.is_empty() || person.profile_url.is_empty() {
                warn!(
                    "Don't have access to this profile: {}|{}",
                    person.id, person.profile_url
                );
            } else {
                debug!(
                    "{}|{}|{} {}|{}",
                    person.id,
                    person.profile_url,
                    person.first_name,
                    person.last_name,
                    person.headline.as_deref().unwrap_or("null")
                );
            }
        }

        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_strips_trailing_slash() {
        let config = HttpSourceConfig::new("https://search.example/v1/");
        assert_eq!(config.base_url, "https://search.example/v1");
        assert_eq!(config.max_results, 10);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = HttpSourceConfig::new("https://search.example")
            .with_token("secret")
            .with_max_results(3);
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.max_results, 3);
    }

    #[test]
    fn test_429_is_throttled() {
        let err = interpret_response(429, "slow down", 10).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_throttle_marker_in_error_body() {
        let body = r#"{"message": "Throttle limit for calls to this resource is reached."}"#;
        let err = interpret_response(403, body, 10).unwrap_err();
        assert!(matches!(err, LookupError::Throttled(_)));
    }

    #[test]
    fn test_other_errors_are_not_fatal() {
        let err = interpret_response(500, "internal error", 10).unwrap_err();
        assert!(matches!(err, LookupError::Failed(ref msg) if msg.contains("500")));
    }

    #[test]
    fn test_success_is_capped() {
        let body = r#"{"people": [
            {"id": "1", "firstName": "A", "lastName": "B"},
            {"id": "2", "firstName": "A", "lastName": "B"},
            {"id": "3", "firstName": "A", "lastName": "B"}
        ]}"#;
        let people = interpret_response(200, body, 2).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].id, "2");
    }

    #[test]
    fn test_empty_people_is_empty_set() {
        assert!(interpret_response(200, "{}", 10).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body_is_failure() {
        let err = interpret_response(200, "<html>", 10).unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let long = "é".repeat(300);
        assert_eq!(snippet(&long).chars().count(), 200);
        assert_eq!(snippet("short"), "short");
    }
}
