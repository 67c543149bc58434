//! Fatal errors that abort a run.

use thiserror::Error;

use crate::args::ArgError;
use crate::config::ConfigError;

/// Exit status for invalid configuration, arguments or input.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit status for I/O failures.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgError),
    #[error("the password '{password}' is too long ({length} bytes, limit {limit})")]
    PasswordTooLong {
        password: String,
        length: usize,
        limit: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidConfig(_) | Error::InvalidArgument(_) | Error::PasswordTooLong { .. } => {
                EXIT_INVALID_INPUT
            }
            Error::Io(_) => EXIT_FAILURE,
        }
    }
}
