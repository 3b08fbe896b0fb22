//! Employer Resolver Core
//!
//! Decides whether a people-search profile confirms, contradicts, or only
//! weakly supports a person's last-known employer.
//!
//! ## Pipeline
//!
//! - [`parse_name`]: split a display name into first/last
//! - [`extract_employer`]: pull the employer out of a profile headline
//! - [`MatchClassifier`]: NOT_FOUND / POSITIVE / NEGATIVE / WEAK / MULTIPLE
//! - [`format_block`]: render the report block for one record
//! - [`ResolutionDriver`]: run all of the above over an input stream

pub mod classify;
pub mod config;
pub mod distance;
pub mod domain;
pub mod driver;
pub mod fakes;
pub mod headline;
pub mod input;
pub mod name;
pub mod obs;
pub mod report;
pub mod source;
pub mod telemetry;

pub use classify::{classify, Classification, MatchClassifier, MatchKind};
pub use config::{ResolverConfig, DEFAULT_EDIT_DISTANCE_THRESHOLD};
pub use distance::edit_distance;
pub use domain::{
    CandidateProfile, CandidateSet, InputRecord, LookupError, NameParseError, ParsedName,
    ResolverError, Result, UNKNOWN_EMPLOYER,
};
pub use driver::{RecordOutcome, ResolutionDriver, RunSummary};
pub use headline::{extract_employer, AtAnchor, ExtractionMode};
pub use input::{parse_line, InputReader, NumberedRecord};
pub use name::parse_name;
pub use obs::{
    emit_lookup_throttled, emit_record_classified, emit_record_skipped, emit_run_finished,
    emit_run_started, record_span,
};
pub use report::{detail_line, format_block, summary_line, write_block, SEPARATOR};
pub use source::{LookupResult, ProfileSource};
pub use telemetry::init_tracing;

/// Resolver version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
