//! Configuration for fanfetch.
//!
//! Everything has a default, so a config file is optional. When one is given
//! with `--config`, it is a TOML file with a single `[fetch]` table:
//!
//! ```toml
//! [fetch]
//! concurrency = 10
//! timeout_secs = 10
//! pacing_delay_ms = 1000
//! retry_mode = "discard"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PACING_DELAY_MS: u64 = 1000;

/// What to do with the response of the retry that follows a transport failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryMode {
    /// Perform the retry but report the URL as failed whatever it returns.
    #[default]
    Discard,
    /// Classify the retry's response like a first attempt and keep it.
    UseResult,
}

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
}

/// Settings for the bounded fetch engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum number of requests holding an admission slot (default: 10)
    pub concurrency: usize,

    /// Whole-request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// Connect timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,

    /// Pause after each successful response, while still holding the slot (default: 1000)
    pub pacing_delay_ms: u64,

    /// Handling of the single retry after a transport failure (default: discard)
    pub retry_mode: RetryMode,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            pacing_delay_ms: DEFAULT_PACING_DELAY_MS,
            retry_mode: RetryMode::Discard,
            user_agent: concat!("fanfetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            concurrency,
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "concurrency must be a positive integer".into(),
            ));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be at least 1 second".into()));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from `path`, or fall back to defaults when no path is given.
    ///
    /// Missing fields in the file use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.fetch.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::Serialize)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to render config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
