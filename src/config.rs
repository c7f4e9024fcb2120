//! Run configuration, loadable from TOML.
//!
//! ```toml
//! strict = false
//! format = "text"     # or "json"
//! log_level = "warn"  # used when RUST_LOG is unset
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

/// How the final depth is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header, buy levels, separator, sell levels per symbol
    #[default]
    Text,
    /// One JSON array of per-symbol snapshots
    Json,
}

/// Errors loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config error: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Abort the run on the first internal inconsistency instead of logging it
    pub strict: bool,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            format: OutputFormat::Text,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        Ok(())
    }

    /// The configured log level as a filter.
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)))
    }
}
