//! Main control loop: read, evaluate, print, accumulate.

use std::io::{BufRead, Write};

use secrecy::ExposeSecret;

use crate::args::OutputMode;
use crate::config::{PolicyConfig, DEFAULT_MAX_LENGTH};
use crate::error::Error;
use crate::evaluator::evaluate;
use crate::reader::PasswordReader;
use crate::stats::{Statistics, StatsReport};

/// Everything a run needs, fixed before the first password is read.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub config: PolicyConfig,
    pub stats: bool,
    pub output: OutputMode,
    pub max_length: usize,
}

impl RunOptions {
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config,
            stats: false,
            output: OutputMode::Rejected,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub checked: u64,
    pub printed: u64,
    pub report: Option<StatsReport>,
}

/// Checks every password in `input`, writing the selected ones to `output`.
///
/// Output is flushed before returning, also when a fatal error stops the
/// run, so lines already written are kept.
pub fn run<R, W>(input: R, output: &mut W, options: &RunOptions) -> Result<RunSummary, Error>
where
    R: BufRead,
    W: Write,
{
    #[cfg(feature = "tracing")]
    tracing::info!(
        level = options.config.level(),
        param = options.config.param(),
        stats = options.stats,
        "checking passwords"
    );

    let result = check_all(input, output, options);
    let flushed = output.flush();
    let summary = result?;
    flushed?;

    #[cfg(feature = "tracing")]
    tracing::info!(checked = summary.checked, printed = summary.printed, "run finished");

    Ok(summary)
}

fn check_all<R, W>(input: R, output: &mut W, options: &RunOptions) -> Result<RunSummary, Error>
where
    R: BufRead,
    W: Write,
{
    let mut reader = PasswordReader::new(input, options.max_length);
    let mut stats = options.stats.then(Statistics::new);
    let mut checked = 0;
    let mut printed = 0;

    while let Some(password) = reader.next_password()? {
        let passed = evaluate(&password, &options.config).is_pass();
        checked += 1;

        let selected = match options.output {
            OutputMode::Rejected => !passed,
            OutputMode::Accepted => passed,
        };
        if selected {
            output.write_all(password.expose_secret())?;
            output.write_all(b"\n")?;
            printed += 1;
        }

        if let Some(stats) = stats.as_mut() {
            stats.record(&password);
        }
    }

    let report = stats.map(|stats| stats.report());
    if let Some(report) = &report {
        writeln!(output, "{report}")?;
    }

    Ok(RunSummary {
        checked,
        printed,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options(level: i64, param: i64) -> RunOptions {
        RunOptions::new(PolicyConfig::new(level, param).expect("valid config"))
    }

    fn run_str(input: &str, options: &RunOptions) -> (Result<RunSummary, Error>, String) {
        let mut out = Vec::new();
        let result = run(Cursor::new(input.as_bytes().to_vec()), &mut out, options);
        (result, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_run_prints_rejected_in_order() {
        let (result, out) = run_str("Abc123\nabc123\nXYZ\nGood\n", &options(1, 1));
        assert_eq!(out, "abc123\nXYZ\n");
        let summary = result.unwrap();
        assert_eq!(summary.checked, 4);
        assert_eq!(summary.printed, 2);
        assert_eq!(summary.report, None);
    }

    #[test]
    fn test_run_prints_accepted() {
        let mut opts = options(1, 1);
        opts.output = OutputMode::Accepted;
        let (_, out) = run_str("Abc123\nabc123\n", &opts);
        assert_eq!(out, "Abc123\n");
    }

    #[test]
    fn test_run_blank_line_is_rejected_not_end() {
        let (result, out) = run_str("\nabc\nAbc\n", &options(1, 1));
        assert_eq!(out, "\nabc\n");
        assert_eq!(result.unwrap().checked, 3);
    }

    #[test]
    fn test_run_crlf_lines_add_blank_passwords() {
        let mut opts = options(1, 1);
        opts.stats = true;
        let (result, out) = run_str("Abc\r\nXyz\r\n", &opts);
        assert_eq!(
            out,
            "\n\nStatistics:\nDistinct characters: 6\nMinimum length: 0\nAverage length: 1.5\n"
        );
        let summary = result.unwrap();
        assert_eq!(summary.checked, 4);
        assert_eq!(summary.printed, 2);
    }

    #[test]
    fn test_run_with_stats() {
        let mut opts = options(2, 3);
        opts.stats = true;
        let (result, out) = run_str("abc\nabcD3\n", &opts);
        assert_eq!(
            out,
            "abc\nStatistics:\nDistinct characters: 5\nMinimum length: 3\nAverage length: 4.0\n"
        );
        let report = result.unwrap().report.expect("report requested");
        assert_eq!(report.distinct_bytes, 5);
    }

    #[test]
    fn test_run_stats_on_empty_input() {
        let mut opts = options(1, 1);
        opts.stats = true;
        let (_, out) = run_str("", &opts);
        assert_eq!(
            out,
            "Statistics:\nDistinct characters: 0\nMinimum length: 0\nAverage length: 0.0\n"
        );
    }

    #[test]
    fn test_run_stops_at_too_long_password() {
        let mut opts = options(1, 1);
        opts.max_length = 4;
        opts.stats = true;
        let (result, out) = run_str("abcd\nabcde\nxyz\n", &opts);

        assert!(matches!(result, Err(Error::PasswordTooLong { length: 5, .. })));
        // earlier output is kept, no report is written
        assert_eq!(out, "abcd\n");
    }

    #[test]
    fn test_run_writes_bytes_verbatim() {
        let mut out = Vec::new();
        let input = b"p\xe4ss w\tord\n".to_vec();
        run(Cursor::new(input), &mut out, &options(1, 1)).unwrap();
        assert_eq!(out, b"p\xe4ss w\tord\n");
    }
}
