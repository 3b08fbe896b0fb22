//! Structured observability hooks for resolution runs.
//!
//! Every record is processed inside a `resolver.record` span carrying its
//! input line number and raw name. Lifecycle events are emitted with an
//! `event` field so JSON log consumers can filter on it.

use tracing::{info, warn};

use crate::classify::Classification;

/// Span scoping all logs for one input record.
///
/// Attach it to the record's future with `tracing::Instrument` rather than
/// entering it across an `.await`.
pub fn record_span(line: usize, name: &str) -> tracing::Span {
    tracing::info_span!("resolver.record", line = line, name = %name)
}

/// Emit event: run started.
pub fn emit_run_started(input: &str, output: &str) {
    info!(event = "run.started", input = %input, output = %output);
}

/// Emit event: a record was looked up and classified.
pub fn emit_record_classified(name: &str, classification: &Classification, candidates: usize) {
    info!(
        event = "record.classified",
        name = %name,
        employer = %classification.employer,
        kind = %classification.kind,
        candidates = candidates,
        distance = ?classification.distance,
    );
}

/// Emit event: record skipped (unparseable name or failed lookup).
pub fn emit_record_skipped(name: &str, reason: &dyn std::fmt::Display) {
    warn!(event = "record.skipped", name = %name, reason = %reason);
}

/// Emit event: the profile source reported throttling.
pub fn emit_lookup_throttled(name: &str, reason: &dyn std::fmt::Display) {
    tracing::error!(event = "lookup.throttled", name = %name, reason = %reason);
}

/// Emit event: run finished with per-kind totals.
pub fn emit_run_finished(summary: &crate::driver::RunSummary) {
    info!(
        event = "run.finished",
        records = summary.records,
        skipped_names = summary.skipped_names,
        lookup_failures = summary.lookup_failures,
        not_found = summary.not_found,
        positive = summary.positive,
        negative = summary.negative,
        weak = summary.weak,
        multiple = summary.multiple,
    );
}
