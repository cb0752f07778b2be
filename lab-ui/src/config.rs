//! Application configuration, read from an optional TOML file.
//!
//! Every key is optional; a missing file section falls back to the defaults
//! below. Command-line flags are applied on top with
//! [`AppConfig::apply_overrides`].
//!
//! The log level is resolved by [`AppConfig::log_level`], first match wins:
//!
//! 1. `--log-level`
//! 2. `[logging] level` in the config file
//! 3. `RUST_LOG`
//! 4. [`DEFAULT_LOG_LEVEL`]
//!
//! ```toml
//! lead_time_days = 2
//! layout = "tabs"        # or "panels"
//! report_dir = "."
//!
//! [logging]
//! level = "info"         # any EnvFilter directive, unset by default
//! file = "lab-reservations.log"
//! stdout = true
//! ```

use std::path::{Path, PathBuf};

use lab_core::{LeadTimeRule, SessionConfig, booking::DEFAULT_LEAD_TIME_DAYS, session::Layout};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Minimum calendar days between today and a reservation.
    pub lead_time_days: u32,
    pub layout: Layout,
    /// Directory the report file is written to.
    pub report_dir: PathBuf,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            layout: Layout::default(),
            report_dir: PathBuf::from("."),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `None` leaves the level to `RUST_LOG` or the default.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            stdout: true,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults when `path` is `None`, the parsed file otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Replaces file values with whatever was given on the command line.
    pub fn apply_overrides(
        &mut self,
        overrides: CliOverrides,
    ) {
        if let Some(level) = overrides.log_level {
            self.logging.level = Some(level);
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        if let Some(dir) = overrides.report_dir {
            self.report_dir = dir;
        }
    }

    /// The filter directive to install, given the value of `RUST_LOG`.
    pub fn log_level(
        &self,
        rust_log: Option<&str>,
    ) -> String {
        self.logging
            .level
            .as_deref()
            .or(rust_log.filter(|v| !v.trim().is_empty()))
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string()
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            lead_time: LeadTimeRule::new(self.lead_time_days),
            layout: self.layout,
        }
    }
}

/// Values from command-line flags; `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
}
