//! Case mixing section - level 1.

use secrecy::{ExposeSecret, SecretSlice};
use super::{SectionResult, Violation};

/// Checks that the password holds at least one uppercase and one lowercase
/// ASCII letter.
///
/// # Returns
/// - `Some(Violation::CaseMix)` if either case is missing
/// - `None` otherwise
pub fn case_mix_section(password: &SecretSlice<u8>) -> SectionResult {
    let mut has_upper = false;
    let mut has_lower = false;

    for &byte in password.expose_secret() {
        has_upper |= byte.is_ascii_uppercase();
        has_lower |= byte.is_ascii_lowercase();
        if has_upper && has_lower {
            return None;
        }
    }

    Some(Violation::CaseMix { has_upper, has_lower })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(s: &str) -> SecretSlice<u8> {
        SecretSlice::from(s.as_bytes().to_vec())
    }

    #[test]
    fn test_case_mix_section_mixed() {
        assert_eq!(case_mix_section(&pwd("Abc123")), None);
        assert_eq!(case_mix_section(&pwd("123zZ")), None);
    }

    #[test]
    fn test_case_mix_section_lowercase_only() {
        assert_eq!(
            case_mix_section(&pwd("abc123")),
            Some(Violation::CaseMix { has_upper: false, has_lower: true })
        );
    }

    #[test]
    fn test_case_mix_section_uppercase_only() {
        assert_eq!(
            case_mix_section(&pwd("ABC")),
            Some(Violation::CaseMix { has_upper: true, has_lower: false })
        );
    }

    #[test]
    fn test_case_mix_section_no_letters() {
        assert!(case_mix_section(&pwd("1234!@")).is_some());
        assert!(case_mix_section(&pwd("")).is_some());
    }

    #[test]
    fn test_case_mix_section_ignores_non_ascii_letters() {
        // "Éé" in UTF-8 holds no ASCII letters at all
        assert!(case_mix_section(&pwd("Éé")).is_some());
    }
}
