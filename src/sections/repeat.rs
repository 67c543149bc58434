//! Repeated run section - level 3.

use secrecy::{ExposeSecret, SecretSlice};
use super::{SectionResult, Violation};

/// Rejects a run of `run_length` identical bytes.
///
/// From each scan position the next `run_length - 1` bytes are inspected;
/// the scan resumes at the first byte that differs. Looking past the end of
/// the password meets the record terminator, which differs from every byte,
/// so a short trailing run is not a violation. A window that contains no
/// differing byte at all fails, which for `run_length == 1` (an empty
/// window) rejects every non-empty password.
pub fn repeated_run_section(password: &SecretSlice<u8>, run_length: u64) -> SectionResult {
    let bytes = password.expose_secret();
    let window = usize::try_from(run_length).unwrap_or(usize::MAX);

    let mut offset = 0;
    while offset < bytes.len() {
        let current = bytes[offset];
        let end = offset.saturating_add(window);
        match (offset + 1..end).find(|&j| bytes.get(j) != Some(&current)) {
            Some(next) => offset = next,
            None => {
                return Some(Violation::RepeatedRun {
                    offset,
                    length: run_length,
                });
            }
        }
    }

    None
}
