//! Character class section - level 2.

use secrecy::{ExposeSecret, SecretSlice};
use super::{SectionResult, Violation};

/// Number of character classes a byte can fall into.
pub const CLASS_COUNT: usize = 4;

/// Character classes, tested in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(byte: u8) -> Self {
        if byte.is_ascii_lowercase() {
            CharClass::Lowercase
        } else if byte.is_ascii_uppercase() {
            CharClass::Uppercase
        } else if byte.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Checks that the password uses at least `min(param, 4)` character classes.
///
/// Scanning stops as soon as the required count is reached, so a `param`
/// above 4 behaves exactly like 4.
pub fn character_class_section(password: &SecretSlice<u8>, param: u64) -> SectionResult {
    let required = usize::try_from(param).map_or(CLASS_COUNT, |p| p.min(CLASS_COUNT));

    let mut seen = [false; CLASS_COUNT];
    let mut found = 0;
    for &byte in password.expose_secret() {
        if found >= required {
            break;
        }
        let slot = &mut seen[CharClass::of(byte).index()];
        if !*slot {
            *slot = true;
            found += 1;
        }
    }

    if found >= required {
        None
    } else {
        Some(Violation::ClassCount { found, required })
    }
}
