//! Display-name splitting.

use crate::domain::{NameParseError, ParsedName};

/// Split a raw display name on single spaces.
///
/// Two tokens give first/last; three tokens drop the middle one. Anything
/// else is rejected.
pub fn parse_name(raw: &str) -> std::result::Result<ParsedName, NameParseError> {
    let tokens: Vec<&str> = raw.split(' ').collect();

    let (first, last) = match tokens.as_slice() {
        [first, last] => (*first, *last),
        [first, _middle, last] => (*first, *last),
        _ => {
            return Err(NameParseError {
                raw: raw.to_string(),
                tokens: tokens.len(),
            })
        }
    };

    Ok(ParsedName {
        first_name: first.to_string(),
        last_name: last.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tokens() {
        let name = parse_name("Paul Codding").unwrap();
        assert_eq!(name.first_name, "Paul");
        assert_eq!(name.last_name, "Codding");
    }

    #[test]
    fn test_middle_name_dropped() {
        let name = parse_name("Paul T Codding").unwrap();
        assert_eq!(name.first_name, "Paul");
        assert_eq!(name.last_name, "Codding");
    }

    #[test]
    fn test_single_token_fails() {
        let err = parse_name("Madonna").unwrap_err();
        assert_eq!(err.tokens, 1);
    }

    #[test]
    fn test_four_tokens_fail() {
        let err = parse_name("Juan Carlos de Borbon").unwrap_err();
        assert_eq!(err.tokens, 4);
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(parse_name("").is_err());
    }

    #[test]
    fn test_double_space_counts_as_token() {
        // "Paul  Codding" splits into ["Paul", "", "Codding"]
        let name = parse_name("Paul  Codding").unwrap();
        assert_eq!(name.first_name, "Paul");
        assert_eq!(name.last_name, "Codding");

        assert!(parse_name("Paul T  Codding").is_err());
    }
}
