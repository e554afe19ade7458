//! Application-wide defaults and the controller configuration.
//!
//! All timing parameters live here so they can be tuned in one place.
//! Front ends start from [`ControllerConfig::default`] and override what
//! their settings surface exposes.

use core::time::Duration;

use crate::error::ConfigError;

// Timing

/// PIR warm-up before the first poll (seconds). Typical HC-SR501 modules
/// need 10-60 s to settle after power-up.
pub const WARMUP_SECS: u64 = 20;

/// Guaranteed on-time after motion (seconds).
pub const BASE_ON_SECS: u64 = 25;

/// Trailing window after the base on-time in which renewed motion
/// restarts the cycle (seconds).
pub const EXTENSION_WINDOW_SECS: u64 = 20;

/// Sensor poll cadence while the display is off (ms).
pub const IDLE_POLL_MS: u64 = 500;

/// Sensor poll cadence inside the extension window (ms).
pub const EXTENSION_POLL_MS: u64 = 500;

/// Log every transition at info level.
pub const VERBOSE: bool = false;

// GPIO pin assignments
//
// nRF52840-DK:
//   PIR OUT        → P0.03
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//
// Raspberry Pi (BCM numbering):
//   PIR OUT        → GPIO4 (physical pin 7)

/// Default PIR input on the Raspberry Pi (BCM numbering).
pub const RPI_PIR_BCM_PIN: u8 = 4;

/// Default `vcgencmd` location on Raspberry Pi OS.
pub const RPI_VCGENCMD_PATH: &str = "/usr/bin/vcgencmd";

/// Immutable timing configuration consumed by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Delay before polling begins (sensor stabilisation).
    pub warmup: Duration,
    /// Minimum time the display stays on after motion.
    pub base_on: Duration,
    /// Trailing re-check window after `base_on`.
    pub extension_window: Duration,
    /// Poll cadence while idle (display off).
    pub idle_poll: Duration,
    /// Poll cadence inside the extension window.
    pub extension_poll: Duration,
    /// Emit human-readable transition logs.
    pub verbose: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            warmup: Duration::from_secs(WARMUP_SECS),
            base_on: Duration::from_secs(BASE_ON_SECS),
            extension_window: Duration::from_secs(EXTENSION_WINDOW_SECS),
            idle_poll: Duration::from_millis(IDLE_POLL_MS),
            extension_poll: Duration::from_millis(EXTENSION_POLL_MS),
            verbose: VERBOSE,
        }
    }
}

impl ControllerConfig {
    /// Total on-time of a cycle without renewed motion, before the
    /// display is switched off.
    pub fn cycle_limit(&self) -> Duration {
        self.base_on + self.extension_window
    }

    /// Reject settings that would make the loop spin or never show the
    /// display.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.idle_poll.is_zero() || self.extension_poll.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.base_on.is_zero() {
            return Err(ConfigError::ZeroBaseOn);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timing() {
        let config = ControllerConfig::default();
        assert_eq!(config.warmup, Duration::from_secs(20));
        assert_eq!(config.base_on, Duration::from_secs(25));
        assert_eq!(config.extension_window, Duration::from_secs(20));
        assert_eq!(config.idle_poll, Duration::from_millis(500));
        assert_eq!(config.extension_poll, Duration::from_millis(500));
        assert!(!config.verbose);
        assert_eq!(config.cycle_limit(), Duration::from_secs(45));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let idle = ControllerConfig {
            idle_poll: Duration::ZERO,
            ..ControllerConfig::default()
        };
        assert_eq!(idle.validate(), Err(ConfigError::ZeroPollInterval));

        let window = ControllerConfig {
            extension_poll: Duration::ZERO,
            ..ControllerConfig::default()
        };
        assert_eq!(window.validate(), Err(ConfigError::ZeroPollInterval));
    }

    #[test]
    fn zero_base_on_is_rejected() {
        let config = ControllerConfig {
            base_on: Duration::ZERO,
            ..ControllerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaseOn));
    }

    #[test]
    fn zero_extension_window_is_allowed() {
        let config = ControllerConfig {
            extension_window: Duration::ZERO,
            warmup: Duration::ZERO,
            ..ControllerConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cycle_limit(), config.base_on);
    }
}
