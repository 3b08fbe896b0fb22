//! The profile lookup seam.
//!
//! The resolver never talks to a people-search service directly. It is
//! handed a [`ProfileSource`] and asks it for candidates one record at a
//! time. In-memory fakes live in [`crate::fakes`]; fixture and HTTP
//! implementations live in the `profile-source` crate.

use async_trait::async_trait;

use crate::domain::{CandidateSet, LookupError};

/// Result type for profile lookups
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// A searchable source of candidate profiles.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Search by first and last name, optionally narrowed by employer.
    ///
    /// Candidates come back most relevant first. Rate limiting must be
    /// reported as [`LookupError::Throttled`] so the caller can stop.
    async fn lookup(
        &self,
        first_name: &str,
        last_name: &str,
        employer: Option<&str>,
    ) -> LookupResult<CandidateSet>;
}
