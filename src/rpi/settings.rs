//! Daemon settings
//!
//! Loaded once at startup from an optional TOML file; every key has a
//! default, so an empty file (or no file) gives the stock behaviour:
//!
//! ```toml
//! [sensor]
//! pin = 4                       # BCM numbering
//!
//! [display]
//! vcgencmd = "/usr/bin/vcgencmd"
//!
//! [timing]
//! warmup_secs = 20
//! base_on_secs = 25
//! extension_window_secs = 20
//! idle_poll_ms = 500
//! extension_poll_ms = 500
//!
//! [logging]
//! verbose = false
//! level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::error::{AppError, Result};
use crate::config::{self, ControllerConfig};
use crate::error::ConfigError;

/// Top-level daemon settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub sensor: SensorSettings,
    pub display: DisplaySettings,
    pub timing: TimingSettings,
    pub logging: LoggingSettings,
}

/// PIR input line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensorSettings {
    /// BCM GPIO number of the PIR output
    pub pin: u8,
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            pin: config::RPI_PIR_BCM_PIN,
        }
    }
}

/// Display power actuator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    /// Path of the `vcgencmd` binary
    pub vcgencmd: PathBuf,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            vcgencmd: PathBuf::from(config::RPI_VCGENCMD_PATH),
        }
    }
}

/// Controller timing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingSettings {
    pub warmup_secs: u64,
    pub base_on_secs: u64,
    pub extension_window_secs: u64,
    pub idle_poll_ms: u64,
    pub extension_poll_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            warmup_secs: config::WARMUP_SECS,
            base_on_secs: config::BASE_ON_SECS,
            extension_window_secs: config::EXTENSION_WINDOW_SECS,
            idle_poll_ms: config::IDLE_POLL_MS,
            extension_poll_ms: config::EXTENSION_POLL_MS,
        }
    }
}

/// Logging
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Log state transitions at info level instead of debug
    pub verbose: bool,
    /// Default filter when `RUST_LOG` is not set (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            verbose: config::VERBOSE,
            level: "info".to_string(),
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub pin: Option<u8>,
    pub verbose: bool,
    pub warmup_secs: Option<u64>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides. `--verbose` can only switch
    /// verbosity on.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(pin) = overrides.pin {
            self.sensor.pin = pin;
        }
        if let Some(warmup) = overrides.warmup_secs {
            self.timing.warmup_secs = warmup;
        }
        if overrides.verbose {
            self.logging.verbose = true;
        }
    }

    /// Validated controller configuration
    pub fn controller_config(&self) -> std::result::Result<ControllerConfig, ConfigError> {
        let t = &self.timing;
        let config = ControllerConfig {
            warmup: Duration::from_secs(t.warmup_secs),
            base_on: Duration::from_secs(t.base_on_secs),
            extension_window: Duration::from_secs(t.extension_window_secs),
            idle_poll: Duration::from_millis(t.idle_poll_ms),
            extension_poll: Duration::from_millis(t.extension_poll_ms),
            verbose: self.logging.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}
