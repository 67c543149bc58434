//! Graduated password policy checker
//!
//! Reads candidate passwords one per line and reports those that fail a
//! four-level policy, optionally followed by statistics over all input.
//!
//! # Levels
//!
//! Levels are cumulative; `param` tunes each of them:
//!
//! 1. at least one uppercase and one lowercase ASCII letter
//! 2. at least `min(param, 4)` character classes (lowercase, uppercase,
//!    digit, other)
//! 3. no run of `max(param, floor)` identical characters
//! 4. no substring of length `param` occurring twice
//!
//! # Features
//!
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWCHECK_PROTECT_PARAM_ONE`: raise the level 3 floor to 2 (default off)
//! - `PWCHECK_MAX_LENGTH`: strict password length limit (default 100)
//!
//! # Example
//!
//! ```rust
//! use pwcheck::{evaluate, PolicyConfig, Verdict};
//! use secrecy::SecretSlice;
//!
//! let config = PolicyConfig::new(2, 3).expect("valid policy");
//! let password = SecretSlice::from(b"abcD3".to_vec());
//!
//! assert_eq!(evaluate(&password, &config), Verdict::Pass);
//! ```

// Internal modules
mod args;
mod config;
mod error;
mod evaluator;
mod reader;
mod run;
mod sections;
mod stats;

// Public API
pub use args::{parse_args, ArgError, Invocation, OutputMode};
pub use config::{
    ConfigError, PolicyConfig, Settings, DEFAULT_MAX_LENGTH, FIELD_CAPACITY, MAX_LEVEL,
    MIN_LEVEL, MIN_PARAM,
};
pub use error::{Error, EXIT_FAILURE, EXIT_INVALID_INPUT};
pub use evaluator::{evaluate, Verdict};
pub use reader::PasswordReader;
pub use run::{run, RunOptions, RunSummary};
pub use sections::{CharClass, Violation};
pub use stats::{Statistics, StatsReport};
