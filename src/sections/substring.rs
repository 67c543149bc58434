//! Repeated substring section - level 4.

use secrecy::{ExposeSecret, SecretSlice};
use super::{SectionResult, Violation};

/// Rejects a password in which some substring of `width` bytes occurs twice.
///
/// Every pair of start offsets is compared; a `width` longer than the
/// password leaves no offsets and passes.
pub fn repeated_substring_section(password: &SecretSlice<u8>, width: u64) -> SectionResult {
    let bytes = password.expose_secret();
    let Ok(width) = usize::try_from(width) else {
        return None;
    };
    let Some(offsets) = (bytes.len() + 1).checked_sub(width) else {
        return None;
    };

    for first in 0..offsets {
        let needle = &bytes[first..first + width];
        for second in first + 1..offsets {
            if needle == &bytes[second..second + width] {
                return Some(Violation::RepeatedSubstring { first, second, width });
            }
        }
    }

    None
}
