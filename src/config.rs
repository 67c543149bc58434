//! Policy configuration and environment-driven settings.

use thiserror::Error;

/// Lowest accepted policy level.
pub const MIN_LEVEL: u8 = 1;
/// Highest accepted policy level.
pub const MAX_LEVEL: u8 = 4;
/// Lowest accepted strictness parameter.
pub const MIN_PARAM: u64 = 1;

/// Size of the password field; one byte is reserved, so at most
/// `FIELD_CAPACITY - 1` bytes are usable.
pub const FIELD_CAPACITY: usize = 256;
/// Default strict length limit for a single password.
pub const DEFAULT_MAX_LENGTH: usize = 100;

pub const PROTECT_PARAM_ONE_VAR: &str = "PWCHECK_PROTECT_PARAM_ONE";
pub const MAX_LENGTH_VAR: &str = "PWCHECK_MAX_LENGTH";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "level out of range: must be between {min} and {max}; received {level}",
        min = MIN_LEVEL,
        max = MAX_LEVEL
    )]
    LevelOutOfRange { level: i64 },
    #[error("param too small: must be at least {min}; received {param}", min = MIN_PARAM)]
    ParamTooSmall { param: i64 },
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Validated `{level, param}` pair, read-only for the rest of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    level: u8,
    param: u64,
    repeat_floor: u64,
}

impl PolicyConfig {
    /// Validates raw, already-parsed integers.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::LevelOutOfRange`] if `level` is outside `[1, 4]`
    /// - [`ConfigError::ParamTooSmall`] if `param` is below 1
    pub fn new(level: i64, param: i64) -> Result<Self, ConfigError> {
        let level = u8::try_from(level)
            .ok()
            .filter(|l| (MIN_LEVEL..=MAX_LEVEL).contains(l))
            .ok_or(ConfigError::LevelOutOfRange { level })?;
        let param = u64::try_from(param)
            .ok()
            .filter(|p| *p >= MIN_PARAM)
            .ok_or(ConfigError::ParamTooSmall { param })?;

        Ok(Self {
            level,
            param,
            repeat_floor: 1,
        })
    }

    /// Raises the minimum run length checked at level 3 to 2, so that
    /// `param == 1` no longer rejects every non-empty password.
    pub fn with_repeat_protection(mut self, enabled: bool) -> Self {
        self.repeat_floor = if enabled { 2 } else { 1 };
        self
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn param(&self) -> u64 {
        self.param
    }

    /// Length of the forbidden run at level 3: `max(param, floor)`.
    pub fn run_length(&self) -> u64 {
        self.param.max(self.repeat_floor)
    }
}

/// Settings read from the environment once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub protect_param_one: bool,
    pub max_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            protect_param_one: false,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// - `PWCHECK_PROTECT_PARAM_ONE`: boolean, default off
    /// - `PWCHECK_MAX_LENGTH`: integer in `[1, 255]`, default 100
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Ok(value) = std::env::var(PROTECT_PARAM_ONE_VAR) {
            settings.protect_param_one =
                parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnv {
                    var: PROTECT_PARAM_ONE_VAR,
                    value: value.clone(),
                })?;
        }

        if let Ok(value) = std::env::var(MAX_LENGTH_VAR) {
            settings.max_length = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..FIELD_CAPACITY).contains(n))
                .ok_or_else(|| ConfigError::InvalidEnv {
                    var: MAX_LENGTH_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(settings)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
