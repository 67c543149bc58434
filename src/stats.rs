//! Statistics accumulated over every password read.

use std::fmt;

use secrecy::{ExposeSecret, SecretSlice};

use crate::config::FIELD_CAPACITY;

const BYTE_VALUES: usize = 256;

/// Running aggregates, updated once per password whatever its verdict.
#[derive(Debug, Clone)]
pub struct Statistics {
    seen: [bool; BYTE_VALUES],
    min_length: usize,
    count: u64,
    length_sum: f64,
}

/// Final figures; length fields are 0 when no byte was ever seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsReport {
    pub distinct_bytes: usize,
    pub min_length: usize,
    pub mean_length: f64,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            seen: [false; BYTE_VALUES],
            min_length: FIELD_CAPACITY,
            count: 0,
            length_sum: 0.0,
        }
    }

    pub fn record(&mut self, password: &SecretSlice<u8>) {
        let bytes = password.expose_secret();
        for &byte in bytes {
            self.seen[usize::from(byte)] = true;
        }
        self.min_length = self.min_length.min(bytes.len());
        self.count += 1;
        self.length_sum += bytes.len() as f64;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn report(&self) -> StatsReport {
        let distinct_bytes = self.seen.iter().filter(|&&seen| seen).count();
        if distinct_bytes == 0 || self.count == 0 {
            return StatsReport {
                distinct_bytes,
                min_length: 0,
                mean_length: 0.0,
            };
        }

        StatsReport {
            distinct_bytes,
            min_length: self.min_length,
            mean_length: self.length_sum / self.count as f64,
        }
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "Distinct characters: {}", self.distinct_bytes)?;
        writeln!(f, "Minimum length: {}", self.min_length)?;
        write!(f, "Average length: {:.1}", self.mean_length)
    }
}
