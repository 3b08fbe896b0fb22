//! Resolution driver.
//!
//! Walks input records in order: parse the name, look up candidates,
//! classify, and append a report block. Records that cannot be parsed or
//! whose lookup fails are skipped with a warning and leave only a separator
//! line, so every input line maps to exactly one separator in the report.
//! Throttling stops the run after flushing what has been written so far.

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::classify::{Classification, MatchClassifier, MatchKind};
use crate::config::ResolverConfig;
use crate::domain::{
    CandidateSet, InputRecord, LookupError, NameParseError, ResolverError, Result,
};
use crate::input::{InputReader, NumberedRecord};
use crate::name::parse_name;
use crate::obs::{
    emit_lookup_throttled, emit_record_classified, emit_record_skipped, emit_run_finished,
    record_span,
};
use crate::report::{write_block, SEPARATOR};
use crate::source::ProfileSource;

/// What happened to a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Looked up and classified; a block should be written.
    Reported {
        classification: Classification,
        candidates: CandidateSet,
    },
    /// The name could not be split into first/last.
    InvalidName(NameParseError),
    /// The lookup failed for a non-fatal reason.
    LookupFailed(LookupError),
}

/// Per-run totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Records read from input.
    pub records: usize,
    pub skipped_names: usize,
    pub lookup_failures: usize,
    pub not_found: usize,
    pub positive: usize,
    pub negative: usize,
    pub weak: usize,
    pub multiple: usize,
}

impl RunSummary {
    fn count(&mut self, kind: MatchKind) {
        match kind {
            MatchKind::NotFound => self.not_found += 1,
            MatchKind::Positive => self.positive += 1,
            MatchKind::Negative => self.negative += 1,
            MatchKind::Weak => self.weak += 1,
            MatchKind::Multiple => self.multiple += 1,
        }
    }

    /// Records that produced a report block.
    pub fn reported(&self) -> usize {
        self.not_found + self.positive + self.negative + self.weak + self.multiple
    }
}

/// Drives lookups and reporting over a sequence of input records.
pub struct ResolutionDriver {
    source: Arc<dyn ProfileSource>,
    classifier: MatchClassifier,
    config: ResolverConfig,
}

impl ResolutionDriver {
    pub fn new(source: Arc<dyn ProfileSource>, config: ResolverConfig) -> Self {
        Self {
            source,
            classifier: MatchClassifier::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve one record without writing anything.
    ///
    /// Only throttling is returned as an error.
    pub async fn resolve(&self, record: &InputRecord) -> Result<RecordOutcome> {
        let name = match parse_name(&record.raw_name) {
            Ok(name) => name,
            Err(e) => return Ok(RecordOutcome::InvalidName(e)),
        };

        tracing::info!(
            first_name = %name.first_name,
            last_name = %name.last_name,
            employer = %record.expected_employer,
            "looking up candidates"
        );

        let employer = record.search_employer(&self.config.unknown_employer);
        let candidates = match self
            .source
            .lookup(&name.first_name, &name.last_name, employer)
            .await
        {
            Ok(candidates) => candidates,
            Err(LookupError::Throttled(reason)) => {
                emit_lookup_throttled(&record.raw_name, &reason);
                return Err(ResolverError::Throttled {
                    name: record.raw_name.clone(),
                    reason,
                });
            }
            Err(e) => return Ok(RecordOutcome::LookupFailed(e)),
        };

        let classification = self
            .classifier
            .classify(&record.expected_employer, &candidates);
        emit_record_classified(&record.raw_name, &classification, candidates.len());

        Ok(RecordOutcome::Reported {
            classification,
            candidates,
        })
    }

    /// Resolve every record read from `input`, writing blocks to `out`.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        let reader = InputReader::new(input, self.config.unknown_employer.clone());
        self.run_numbered(reader, out).await
    }

    /// Resolve already-parsed records, numbering them from 1.
    pub async fn run_records<I, W>(&self, records: I, out: &mut W) -> Result<RunSummary>
    where
        I: IntoIterator<Item = InputRecord>,
        W: Write + ?Sized,
    {
        let numbered = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Ok::<_, std::io::Error>(NumberedRecord { line: i + 1, record }));
        self.run_numbered(numbered, out).await
    }

    async fn run_numbered<I, W>(&self, records: I, out: &mut W) -> Result<RunSummary>
    where
        I: IntoIterator<Item = std::io::Result<NumberedRecord>>,
        W: Write + ?Sized,
    {
        let mut summary = RunSummary::default();

        for item in records {
            let NumberedRecord { line, record } = item?;
            summary.records += 1;

            let outcome = self
                .resolve(&record)
                .instrument(record_span(line, &record.raw_name))
                .await;

            match outcome {
                Ok(RecordOutcome::Reported {
                    classification,
                    candidates,
                }) => {
                    if classification.kind == MatchKind::NotFound {
                        tracing::warn!(name = %record.raw_name, "search yielded no results");
                    }
                    write_block(&mut *out, &record, &classification, &candidates)?;
                    summary.count(classification.kind);
                }
                Ok(RecordOutcome::InvalidName(e)) => {
                    emit_record_skipped(&record.raw_name, &e);
                    writeln!(out, "{SEPARATOR}")?;
                    summary.skipped_names += 1;
                }
                Ok(RecordOutcome::LookupFailed(e)) => {
                    emit_record_skipped(&record.raw_name, &e);
                    writeln!(out, "{SEPARATOR}")?;
                    summary.lookup_failures += 1;
                }
                Err(e) => {
                    // Keep whatever was already reported.
                    if let Err(flush_err) = out.flush() {
                        tracing::error!(error = %flush_err, "failed to flush partial report");
                    }
                    return Err(e);
                }
            }
        }

        out.flush()?;
        emit_run_finished(&summary);
        Ok(summary)
    }
}
