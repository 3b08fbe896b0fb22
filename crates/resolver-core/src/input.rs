//! Tab-delimited input parsing.

use std::borrow::Cow;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::domain::InputRecord;

/// Parse one `<name>\t<employer>` line.
///
/// A missing or empty employer column becomes `unknown_employer`. Columns
/// past the second are ignored.
pub fn parse_line(line: &str, unknown_employer: &str) -> InputRecord {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut columns = line.split('\t');
    let name = columns.next().unwrap_or_default();
    let employer = match columns.next() {
        Some(employer) if !employer.is_empty() => employer,
        _ => unknown_employer,
    };
    InputRecord::new(name, employer)
}

/// A parsed record with its 1-based input line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedRecord {
    pub line: usize,
    pub record: InputRecord,
}

/// Lazily reads records from a line-oriented reader.
///
/// Lines are read as bytes and decoded lossily, so a line that is not valid
/// UTF-8 still becomes a record (with replacement characters) instead of
/// failing the stream. Blank lines are passed through; they fail name
/// parsing downstream like any other unusable name.
pub struct InputReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    unknown_employer: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R, unknown_employer: impl Into<String>) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
            unknown_employer: unknown_employer.into(),
        }
    }
}

impl<R: BufRead> Iterator for InputReader<R> {
    type Item = std::io::Result<NumberedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }
        self.line_no += 1;

        let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf);
        let line = String::from_utf8_lossy(bytes);
        if matches!(line, Cow::Owned(_)) {
            warn!(line = self.line_no, "input line is not valid UTF-8, decoding lossily");
        }
        debug!(line = self.line_no, raw = %line, "input line");

        Some(Ok(NumberedRecord {
            line: self.line_no,
            record: parse_line(&line, &self.unknown_employer),
        }))
    }
}
