//! Domain types for employer resolution.
//!
//! Everything here lives for the duration of one input record and is
//! discarded once that record's report block has been written.

pub mod error;
pub mod record;

pub use error::{LookupError, NameParseError, ResolverError, Result};
pub use record::{CandidateProfile, CandidateSet, InputRecord, ParsedName, UNKNOWN_EMPLOYER};
