//! Command-line arguments.
//!
//! Grammar: `-l LEVEL`, `-p PARAM`, `--stats`, `--passing`, and up to two
//! bare positive numbers. Bare numbers fill `level` and then `param`,
//! skipping any field already set by its flag.

use thiserror::Error;

use crate::config::{ConfigError, PolicyConfig, Settings};

/// Most bare numbers accepted on the command line.
pub const MAX_UNASSIGNED: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("argument {position}: \"{arg}\" is not recognized")]
    Unrecognized { position: usize, arg: String },
    #[error("argument {position}: \"{arg}\" must be a positive number")]
    NotPositive { position: usize, arg: String },
    #[error("argument {position}: \"{arg}\" is more than {max} bare numbers", max = MAX_UNASSIGNED)]
    TooManyNumbers { position: usize, arg: String },
    #[error("missing value after {flag}")]
    MissingValue { flag: &'static str },
}

/// Which passwords are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Passwords that fail the policy.
    #[default]
    Rejected,
    /// Passwords that pass the policy.
    Accepted,
}

/// Parsed, not yet validated, command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub level: i64,
    pub param: i64,
    pub stats: bool,
    pub output: OutputMode,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            level: 1,
            param: 1,
            stats: false,
            output: OutputMode::Rejected,
        }
    }
}

impl Invocation {
    /// Validates level and param and applies the environment settings.
    pub fn policy(&self, settings: &Settings) -> Result<PolicyConfig, ConfigError> {
        PolicyConfig::new(self.level, self.param)
            .map(|config| config.with_repeat_protection(settings.protect_param_one))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgState {
    Idle,
    AwaitingLevel,
    AwaitingParam,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, ArgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut invocation = Invocation::default();
    let mut state = ArgState::Idle;
    let mut level = None;
    let mut param = None;
    let mut unassigned: Vec<i64> = Vec::with_capacity(MAX_UNASSIGNED);

    for (index, arg) in args.into_iter().enumerate() {
        let arg = arg.as_ref();
        let position = index + 1;

        if let Some(n) = leading_integer(arg) {
            match state {
                ArgState::AwaitingLevel => level = Some(n),
                ArgState::AwaitingParam => param = Some(n),
                ArgState::Idle if n <= 0 => {
                    return Err(ArgError::NotPositive { position, arg: arg.to_string() });
                }
                ArgState::Idle if unassigned.len() == MAX_UNASSIGNED => {
                    return Err(ArgError::TooManyNumbers { position, arg: arg.to_string() });
                }
                ArgState::Idle => unassigned.push(n),
            }
            state = ArgState::Idle;
            continue;
        }

        match arg {
            "-l" => state = ArgState::AwaitingLevel,
            "-p" => state = ArgState::AwaitingParam,
            "--stats" => invocation.stats = true,
            "--passing" => invocation.output = OutputMode::Accepted,
            _ => return Err(ArgError::Unrecognized { position, arg: arg.to_string() }),
        }
    }

    match state {
        ArgState::AwaitingLevel => return Err(ArgError::MissingValue { flag: "-l" }),
        ArgState::AwaitingParam => return Err(ArgError::MissingValue { flag: "-p" }),
        ArgState::Idle => {}
    }

    for n in unassigned {
        if level.is_none() {
            level = Some(n);
        } else if param.is_none() {
            param = Some(n);
        } else {
            break;
        }
    }

    invocation.level = level.unwrap_or(invocation.level);
    invocation.param = param.unwrap_or(invocation.param);
    Ok(invocation)
}

/// Integer prefix of `arg`: optional leading whitespace, optional sign, then
/// digits. Anything after the digits is ignored.
fn leading_integer(arg: &str) -> Option<i64> {
    let s = arg.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
