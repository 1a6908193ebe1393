//! Session configuration.
//!
//! A [`GameConfig`] is validated once when a session is created; the tick loop
//! never re-checks it.
//!
//! # Environment Variables
//!
//! - `BLOCKFALL_COLUMNS`: board width (default: 10)
//! - `BLOCKFALL_ROWS`: board height (default: 20)
//! - `BLOCKFALL_LOCK_DELAY_MS`: lock grace period (default: 500)

use std::fmt;

use crate::scoring::drop_interval_with;
use crate::types::{
    BASE_DROP_MS, DEFAULT_COLUMNS, DEFAULT_ROWS, DROP_STEP_MS, LOCK_DELAY_MS, MIN_DROP_MS,
};

/// Narrowest board that still fits a flat I piece.
pub const MIN_COLUMNS: u8 = 4;

/// Shortest board that still fits a standing I piece.
pub const MIN_ROWS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension { columns: u8, rows: u8 },
    BoardTooSmall { columns: u8, rows: u8 },
    ZeroDropInterval,
    MinDropExceedsBase { min_ms: u32, base_ms: u32 },
    InvalidEnv { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension { columns, rows } => {
                write!(f, "board dimensions must be positive, got {columns}x{rows}")
            }
            ConfigError::BoardTooSmall { columns, rows } => write!(
                f,
                "board {columns}x{rows} is smaller than the minimum {MIN_COLUMNS}x{MIN_ROWS}"
            ),
            ConfigError::ZeroDropInterval => write!(f, "minimum drop interval must be positive"),
            ConfigError::MinDropExceedsBase { min_ms, base_ms } => write!(
                f,
                "minimum drop interval {min_ms}ms exceeds base interval {base_ms}ms"
            ),
            ConfigError::InvalidEnv { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Board dimensions and timing rules for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: u8,
    pub rows: u8,
    pub base_drop_ms: u32,
    pub min_drop_ms: u32,
    pub drop_step_ms: u32,
    pub lock_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            base_drop_ms: BASE_DROP_MS,
            min_drop_ms: MIN_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            lock_delay_ms: LOCK_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Default config with other board dimensions.
    pub fn with_board(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::ZeroDimension {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.columns < MIN_COLUMNS || self.rows < MIN_ROWS {
            return Err(ConfigError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.min_drop_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.min_drop_ms > self.base_drop_ms {
            return Err(ConfigError::MinDropExceedsBase {
                min_ms: self.min_drop_ms,
                base_ms: self.base_drop_ms,
            });
        }
        Ok(())
    }

    /// Gravity interval for `score` under this config.
    pub fn drop_interval_ms(&self, score: u32) -> u32 {
        drop_interval_with(score, self.base_drop_ms, self.min_drop_ms, self.drop_step_ms)
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys keep their
    /// defaults; present keys must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = parse_key(&lookup, "BLOCKFALL_COLUMNS")? {
            config.columns = v;
        }
        if let Some(v) = parse_key(&lookup, "BLOCKFALL_ROWS")? {
            config.rows = v;
        }
        if let Some(v) = parse_key(&lookup, "BLOCKFALL_LOCK_DELAY_MS")? {
            config.lock_delay_ms = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_key<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { key, value: raw })
}
