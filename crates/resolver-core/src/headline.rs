//! Employer extraction from profile headlines.
//!
//! Headlines usually read "<Title> at <Employer>". The extractor locates a
//! standalone ` at ` and returns everything after the `at`, leading space
//! included unless [`ExtractionMode::Trimmed`] is selected.
//!
//! By default the last ` at ` wins, so "Engineer at Acme, formerly at
//! Initech" yields " Initech". [`AtAnchor::First`] anchors on the first
//! token instead and captures the whole tail.

use serde::{Deserialize, Serialize};

const AT_TOKEN: &str = " at ";

/// Whether the captured employer text is trimmed before comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Keep the capture exactly as found, including the leading space.
    #[default]
    Raw,
    /// Strip surrounding whitespace from the capture.
    Trimmed,
}

/// Which ` at ` token the capture starts from when there are several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtAnchor {
    /// Last occurrence; the capture is the text after it.
    #[default]
    Last,
    /// First occurrence; the capture runs over any later ` at `.
    First,
}

/// Extract the employer text following a ` at ` in `headline`.
///
/// Returns `None` when the headline is absent or has no ` at ` preceded by
/// at least one character.
pub fn extract_employer(
    headline: Option<&str>,
    mode: ExtractionMode,
    anchor: AtAnchor,
) -> Option<&str> {
    let headline = headline?;

    // Index 0 is skipped: the token needs a non-empty prefix.
    let pos = match anchor {
        AtAnchor::Last => headline
            .rmatch_indices(AT_TOKEN)
            .map(|(idx, _)| idx)
            .find(|&idx| idx > 0)?,
        AtAnchor::First => headline
            .match_indices(AT_TOKEN)
            .map(|(idx, _)| idx)
            .find(|&idx| idx > 0)?,
    };

    // Capture begins right after "at", keeping the trailing space.
    let captured = &headline[pos + AT_TOKEN.len() - 1..];

    Some(match mode {
        ExtractionMode::Raw => captured,
        ExtractionMode::Trimmed => captured.trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headline: &str) -> Option<&str> {
        extract_employer(Some(headline), ExtractionMode::Raw, AtAnchor::Last)
    }

    #[test]
    fn test_raw_capture_keeps_leading_space() {
        assert_eq!(raw("Solutions Engineer at Hortonworks"), Some(" Hortonworks"));
    }

    #[test]
    fn test_trimmed_capture() {
        assert_eq!(
            extract_employer(
                Some("Solutions Engineer at Hortonworks"),
                ExtractionMode::Trimmed,
                AtAnchor::Last
            ),
            Some("Hortonworks")
        );
    }

    #[test]
    fn test_no_at_token() {
        assert_eq!(raw("Solutions Engineer"), None);
    }

    #[test]
    fn test_absent_headline() {
        assert_eq!(
            extract_employer(None, ExtractionMode::Raw, AtAnchor::Last),
            None
        );
        assert_eq!(
            extract_employer(None, ExtractionMode::Raw, AtAnchor::First),
            None
        );
    }

    #[test]
    fn test_last_at_wins_by_default() {
        assert_eq!(
            raw("Architect at Hortonworks, previously at Cloudera"),
            Some(" Cloudera")
        );
    }

    #[test]
    fn test_first_anchor_captures_whole_tail() {
        assert_eq!(
            extract_employer(
                Some("Architect at Hortonworks, previously at Cloudera"),
                ExtractionMode::Raw,
                AtAnchor::First
            ),
            Some(" Hortonworks, previously at Cloudera")
        );
    }

    #[test]
    fn test_anchors_agree_on_single_token() {
        let headline = Some("Head of Data at Acme Corp");
        assert_eq!(
            extract_employer(headline, ExtractionMode::Raw, AtAnchor::First),
            extract_employer(headline, ExtractionMode::Raw, AtAnchor::Last)
        );
    }

    #[test]
    fn test_at_inside_words_is_ignored() {
        assert_eq!(raw("Data Platform Specialist"), None);
        assert_eq!(raw("Head of Data at Acme"), Some(" Acme"));
    }

    #[test]
    fn test_case_sensitive_token() {
        assert_eq!(raw("Engineer AT Hortonworks"), None);
    }

    #[test]
    fn test_leading_token_needs_prefix() {
        assert_eq!(raw(" at Acme"), None);
        assert_eq!(
            extract_employer(Some(" at Acme"), ExtractionMode::Raw, AtAnchor::First),
            None
        );
        assert_eq!(
            extract_employer(
                Some(" at Acme at Initech"),
                ExtractionMode::Raw,
                AtAnchor::First
            ),
            Some(" Initech")
        );
    }

    #[test]
    fn test_trailing_token_yields_blank_capture() {
        assert_eq!(raw("Consultant at "), Some(" "));
        assert_eq!(
            extract_employer(
                Some("Consultant at "),
                ExtractionMode::Trimmed,
                AtAnchor::Last
            ),
            Some("")
        );
    }
}
