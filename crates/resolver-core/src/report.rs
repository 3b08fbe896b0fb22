//! Report block rendering.
//!
//! Each input record produces one block: a summary line, one detail line
//! per candidate (none for NOT_FOUND), and a closing separator.

use std::io::Write;

use crate::classify::{Classification, MatchKind};
use crate::domain::{CandidateProfile, InputRecord};

/// Closes every record block.
pub const SEPARATOR: &str = "-----------------------------------------------------------";

const FIELD_DELIM: char = '|';

/// Rendered in place of a missing headline.
const MISSING_HEADLINE: &str = "null";

/// Summary line for a classification.
pub fn summary_line(record: &InputRecord, classification: &Classification) -> String {
    let name = &record.raw_name;
    let employer = &classification.employer;
    match classification.kind {
        MatchKind::NotFound => format!("Could not find name: {}", name),
        MatchKind::Multiple => format!(
            "Search for name: '{}' with expected employer '{}' returned multiple results:",
            name, employer
        ),
        kind => format!(
            "Search for name: '{}' with expected employer '{}' returned 1 result with a {} match on current employer:{}",
            name, employer, kind, employer
        ),
    }
}

/// Tab-indented `id|url|first last|headline` line.
pub fn detail_line(candidate: &CandidateProfile) -> String {
    format!(
        "\t{id}{d}{url}{d}{first} {last}{d}{headline}",
        id = candidate.id,
        url = candidate.profile_url,
        first = candidate.first_name,
        last = candidate.last_name,
        headline = candidate.headline.as_deref().unwrap_or(MISSING_HEADLINE),
        d = FIELD_DELIM,
    )
}

/// All lines of one record's block, separator included.
pub fn format_block(
    record: &InputRecord,
    classification: &Classification,
    candidates: &[CandidateProfile],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(candidates.len() + 2);
    lines.push(summary_line(record, classification));
    if classification.kind != MatchKind::NotFound {
        lines.extend(candidates.iter().map(detail_line));
    }
    lines.push(SEPARATOR.to_string());
    lines
}

/// Write one block to `out`, newline-terminating every line.
pub fn write_block<W: Write + ?Sized>(
    out: &mut W,
    record: &InputRecord,
    classification: &Classification,
    candidates: &[CandidateProfile],
) -> std::io::Result<()> {
    for line in format_block(record, classification, candidates) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
