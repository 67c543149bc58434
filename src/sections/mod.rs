//! Policy level sections
//!
//! Each section implements the check of one policy level. Levels are
//! cumulative: the evaluator runs every section up to the configured level.

mod case;
mod classes;
mod repeat;
mod substring;

use std::fmt;

pub use case::case_mix_section;
pub use classes::{character_class_section, CharClass};
pub use repeat::repeated_run_section;
pub use substring::repeated_substring_section;

/// Result type for section evaluation functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Violation>;

/// Why a password was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Level 1: missing an uppercase or a lowercase ASCII letter.
    CaseMix { has_upper: bool, has_lower: bool },
    /// Level 2: too few character classes.
    ClassCount { found: usize, required: usize },
    /// Level 3: a run of `length` identical bytes starting at `offset`.
    RepeatedRun { offset: usize, length: u64 },
    /// Level 4: two identical substrings of `width` bytes.
    RepeatedSubstring { first: usize, second: usize, width: usize },
}

impl Violation {
    /// Policy level whose check produced this violation.
    pub fn level(&self) -> u8 {
        match self {
            Violation::CaseMix { .. } => 1,
            Violation::ClassCount { .. } => 2,
            Violation::RepeatedRun { .. } => 3,
            Violation::RepeatedSubstring { .. } => 4,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::CaseMix { has_upper, has_lower } => {
                let missing = match (has_upper, has_lower) {
                    (false, false) => "uppercase and lowercase letters",
                    (false, true) => "an uppercase letter",
                    _ => "a lowercase letter",
                };
                write!(f, "missing {missing}")
            }
            Violation::ClassCount { found, required } => {
                write!(f, "{found} character classes, {required} required")
            }
            Violation::RepeatedRun { offset, length } => {
                write!(f, "run of {length} identical characters at offset {offset}")
            }
            Violation::RepeatedSubstring { first, second, width } => {
                write!(f, "substring of length {width} repeats at offsets {first} and {second}")
            }
        }
    }
}
