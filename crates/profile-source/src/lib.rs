//! Profile-Source: people-search backends for the employer resolver
//!
//! Two [`resolver_core::ProfileSource`] implementations:
//!
//! - [`FixtureProfileSource`]: answers lookups from a JSON file, for offline
//!   runs and reproducible reports
//! - [`HttpProfileSource`]: queries a people-search HTTP API with a
//!   pre-issued bearer token
//!
//! Both map rate limiting to `LookupError::Throttled` so the resolver can
//! stop the run instead of skipping records.

pub mod error;
pub mod fixture;
pub mod http;

pub use error::SourceError;
pub use fixture::{FixtureEntry, FixtureProfileSource};
pub use http::{HttpProfileSource, HttpSourceConfig, SearchResponse};

/// Result type for profile-source setup
pub type Result<T> = std::result::Result<T, SourceError>;
