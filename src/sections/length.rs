//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

pub(crate) const LENGTH_HINT: &str = "length should be 8+ characters";

/// Checks that the password has at least [`MIN_LENGTH`] characters.
///
/// Counts Unicode scalar values, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(LENGTH_HINT);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(length_section(&secret("Short1!")), Some(LENGTH_HINT));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("12345678")), None);
    }

    #[test]
    fn test_length_section_empty() {
        assert_eq!(length_section(&secret("")), Some(LENGTH_HINT));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        assert_eq!(length_section(&secret("ééééééé")), Some(LENGTH_HINT));
        assert_eq!(length_section(&secret("éééééééé")), None);
    }
}
