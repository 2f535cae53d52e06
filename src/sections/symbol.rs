//! Symbol section - checks for ASCII punctuation.

use super::SectionResult;

/// The fixed punctuation set: every printable ASCII character that is
/// neither alphanumeric nor whitespace.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Checks that the password contains at least one character from
/// [`PUNCTUATION`].
///
/// Non-ASCII symbols and whitespace do not count.
pub fn symbol_section(password: &str) -> SectionResult {
    if password.chars().any(|c| PUNCTUATION.contains(c)) {
        return None;
    }
    Some("Missing: special characters".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_matches_ascii_punctuation() {
        assert_eq!(PUNCTUATION.len(), 32);
        let expected: String = (0u8..=127)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(PUNCTUATION, expected);
    }

    #[test]
    fn test_symbol_section_missing_special() {
        let result = symbol_section("NoSpecial123");
        assert_eq!(result, Some("Missing: special characters".to_string()));
    }

    #[test]
    fn test_symbol_section_every_mark_counts() {
        for c in PUNCTUATION.chars() {
            assert_eq!(symbol_section(&format!("abc{}", c)), None, "{:?}", c);
        }
    }

    #[test]
    fn test_symbol_section_ignores_space_and_non_ascii() {
        assert!(symbol_section("with space").is_some());
        assert!(symbol_section("tab\there").is_some());
        assert!(symbol_section("€£§💪").is_some());
    }
}
