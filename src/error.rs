//! Error types for the controller.
//!
//! We avoid `alloc` - variants carry only the collaborator's own error
//! value. `std::error::Error` is implemented when the `std` feature is on.

use core::fmt;

/// Fatal failure of a poll cycle. Nothing is retried; the driver loop
/// releases its resources and stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<SE, DE> {
    /// Reading the PIR input line failed.
    SensorRead(SE),

    /// The display power command failed.
    Actuator(DE),
}

impl<SE: fmt::Debug, DE: fmt::Debug> fmt::Display for Error<SE, DE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SensorRead(e) => write!(f, "sensor read failed: {:?}", e),
            Error::Actuator(e) => write!(f, "display power command failed: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<SE: fmt::Debug, DE: fmt::Debug> std::error::Error for Error<SE, DE> {}

/// Invalid timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A poll cadence of zero would spin the loop.
    ZeroPollInterval,

    /// The display would never stay on after motion.
    ZeroBaseOn,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPollInterval => f.write_str("poll interval must be non-zero"),
            ConfigError::ZeroBaseOn => f.write_str("base on-time must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
