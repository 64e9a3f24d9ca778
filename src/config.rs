//! Scan configuration
//!
//! Settings are read from an optional TOML file and then overridden by
//! environment variables. The file lives at `$SYSUP_CONFIG` if set,
//! otherwise at `~/.config/sysup/config.toml` (XDG standard).
//!
//! ```toml
//! connect_timeout_ms = 3000
//! max_targets = 64
//! output = "human"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::tcp::DEFAULT_CONNECT_TIMEOUT;
use crate::core::services::DEFAULT_MAX_TARGETS;
use crate::output::OutputMode;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "SYSUP_CONFIG";

/// Environment override for `connect_timeout_ms`
pub const CONNECT_TIMEOUT_ENV: &str = "SYSUP_CONNECT_TIMEOUT_MS";

/// Environment override for `max_targets`
pub const MAX_TARGETS_ENV: &str = "SYSUP_MAX_TARGETS";

/// Environment override for `output`
pub const OUTPUT_ENV: &str = "SYSUP_OUTPUT";

/// Largest accepted `max_targets`
///
/// Keeps the failure count, and so the exit status, below 255, which is
/// reserved for invocation and configuration errors.
pub const MAX_TARGETS_LIMIT: usize = 254;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// An environment override could not be parsed
    #[error("invalid value {value:?} for {var}")]
    InvalidOverride {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// A setting is out of range
    #[error("{0}")]
    Invalid(String),
}

/// Settings for one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Upper bound on each connect attempt, in milliseconds
    pub connect_timeout_ms: u64,
    /// Maximum tokens accepted per side
    pub max_targets: usize,
    /// Report format
    pub output: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_timeout_ms: u64::try_from(DEFAULT_CONNECT_TIMEOUT.as_millis()).unwrap_or(3000),
            max_targets: DEFAULT_MAX_TARGETS,
            output: OutputMode::Human,
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sysup").join("config.toml"))
    }

    /// Config file path honoring `$SYSUP_CONFIG`
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from).or_else(Self::default_path)
    }

    /// Load from the config file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides looked up through `lookup` (normally the environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(CONNECT_TIMEOUT_ENV) {
            self.connect_timeout_ms = parse_override(CONNECT_TIMEOUT_ENV, value)?;
        }
        if let Some(value) = lookup(MAX_TARGETS_ENV) {
            self.max_targets = parse_override(MAX_TARGETS_ENV, value)?;
        }
        if let Some(value) = lookup(OUTPUT_ENV) {
            self.output = parse_override(OUTPUT_ENV, value)?;
        }
        Ok(())
    }

    /// Reject settings the scanner cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::Invalid("connect_timeout_ms must be greater than 0".to_string()));
        }
        if self.max_targets == 0 {
            return Err(ConfigError::Invalid("max_targets must be at least 1".to_string()));
        }
        if self.max_targets > MAX_TARGETS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_targets must be at most {MAX_TARGETS_LIMIT}, got {}",
                self.max_targets
            )));
        }
        Ok(())
    }

    /// Connect timeout as a duration
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

fn parse_override<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidOverride { var, value })
}
