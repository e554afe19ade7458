//! Error types for the Raspberry Pi daemon

use std::convert::Infallible;
use std::path::PathBuf;

use crate::error::{ConfigError, Error};

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

/// `vcgencmd` invocation failure
#[derive(Debug, thiserror::Error)]
pub enum ActuatorError {
    /// The command could not be started (not installed, not executable)
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but reported failure
    #[error("{} exited with status {}", .program.display(), status_text(.code))]
    ExitStatus {
        program: PathBuf,
        /// Exit code, `None` if terminated by a signal
        code: Option<i32>,
    },
}

fn status_text(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "signal".to_string(),
    }
}

/// Daemon error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Settings file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`Settings`](super::Settings)
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Timing values rejected by the controller
    #[error("invalid timing: {0}")]
    Timing(#[from] ConfigError),

    /// GPIO access failed (permissions, unsupported board, pin busy)
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    /// Display power command failed
    #[error("display power command failed: {0}")]
    Actuator(#[from] ActuatorError),
}

impl From<Error<Infallible, ActuatorError>> for AppError {
    fn from(e: Error<Infallible, ActuatorError>) -> Self {
        match e {
            Error::SensorRead(never) => match never {},
            Error::Actuator(e) => AppError::Actuator(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_message_names_code() {
        let e = ActuatorError::ExitStatus {
            program: PathBuf::from("/usr/bin/vcgencmd"),
            code: Some(255),
        };
        assert_eq!(e.to_string(), "/usr/bin/vcgencmd exited with status 255");

        let killed = ActuatorError::ExitStatus {
            program: PathBuf::from("vcgencmd"),
            code: None,
        };
        assert_eq!(killed.to_string(), "vcgencmd exited with status signal");
    }

    #[test]
    fn controller_actuator_error_converts() {
        let e: Error<Infallible, ActuatorError> = Error::Actuator(ActuatorError::ExitStatus {
            program: PathBuf::from("vcgencmd"),
            code: Some(1),
        });
        let app: AppError = e.into();
        assert!(matches!(
            app,
            AppError::Actuator(ActuatorError::ExitStatus { code: Some(1), .. })
        ));
    }
}
