//! Character variety sections - one check per character class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Characters accepted by the special-character check.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

pub(crate) const UPPERCASE_HINT: &str = "missing uppercase letter";
pub(crate) const LOWERCASE_HINT: &str = "missing lowercase letter";
pub(crate) const DIGIT_HINT: &str = "missing number";
pub(crate) const SPECIAL_HINT: &str = "missing special character";

fn require(password: &SecretString, class: impl Fn(char) -> bool, hint: &'static str) -> SectionResult {
    if password.expose_secret().chars().any(class) {
        None
    } else {
        Some(hint)
    }
}

/// Passes when the password contains at least one `A`-`Z`.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    require(password, |c| c.is_ascii_uppercase(), UPPERCASE_HINT)
}

/// Passes when the password contains at least one `a`-`z`.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    require(password, |c| c.is_ascii_lowercase(), LOWERCASE_HINT)
}

/// Passes when the password contains at least one `0`-`9`.
pub fn digit_section(password: &SecretString) -> SectionResult {
    require(password, |c| c.is_ascii_digit(), DIGIT_HINT)
}

/// Passes when the password contains at least one of [`SPECIAL_CHARS`].
pub fn special_section(password: &SecretString) -> SectionResult {
    require(password, |c| SPECIAL_CHARS.contains(c), SPECIAL_HINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_uppercase_section() {
        assert_eq!(uppercase_section(&secret("lowercase123!")), Some(UPPERCASE_HINT));
        assert_eq!(uppercase_section(&secret("lowerCase")), None);
    }

    #[test]
    fn test_lowercase_section() {
        assert_eq!(lowercase_section(&secret("UPPERCASE123!")), Some(LOWERCASE_HINT));
        assert_eq!(lowercase_section(&secret("UPPERcASE")), None);
    }

    #[test]
    fn test_digit_section() {
        assert_eq!(digit_section(&secret("NoNumbers!")), Some(DIGIT_HINT));
        assert_eq!(digit_section(&secret("One1")), None);
    }

    #[test]
    fn test_special_section_accepts_only_fixed_set() {
        for c in SPECIAL_CHARS.chars() {
            assert_eq!(special_section(&secret(&format!("abc{c}"))), None, "{c} should count");
        }
        for other in ["abc-", "abc_", "abc?", "abc ", "abc(", "abc~"] {
            assert_eq!(special_section(&secret(other)), Some(SPECIAL_HINT), "{other}");
        }
    }

    #[test]
    fn test_non_ascii_classes_do_not_count() {
        let pwd = secret("ÉÀßé٣");
        assert_eq!(uppercase_section(&pwd), Some(UPPERCASE_HINT));
        assert_eq!(lowercase_section(&pwd), Some(LOWERCASE_HINT));
        assert_eq!(digit_section(&pwd), Some(DIGIT_HINT));
        assert_eq!(special_section(&pwd), Some(SPECIAL_HINT));
    }

    #[test]
    fn test_position_does_not_matter() {
        for pwd in ["A1!aaaaa", "aaaaaA1!", "aaA1!aaa"] {
            let pwd = secret(pwd);
            assert_eq!(uppercase_section(&pwd), None);
            assert_eq!(digit_section(&pwd), None);
            assert_eq!(special_section(&pwd), None);
        }
    }
}
