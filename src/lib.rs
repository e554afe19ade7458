//! Motion-activated display power controller.
//!
//! A PIR sensor is polled at a fixed cadence; motion switches the display
//! on for a base window, after which a trailing extension window watches
//! for renewed motion. Motion inside the window restarts the full cycle,
//! otherwise the display is switched off.
//!
//! The library is `no_std` and hardware-agnostic: the sensor, the display
//! actuator and the clock are injected through [`MotionSensor`],
//! [`DisplayPower`] and [`Clock`]. Front ends:
//!
//! - `src/main.rs` - nRF52840 + SSD1306 OLED (feature `embedded`)
//! - `src/bin/pirscreen-rpi.rs` - Raspberry Pi, `vcgencmd` (feature `rpi`)
//!
//! Usage: `cargo test --features std`

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod policy;
pub mod runner;
pub mod sensor;

#[cfg(any(test, feature = "std"))]
pub mod sim;

#[cfg(feature = "rpi")]
pub mod rpi;

pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use config::ControllerConfig;
pub use controller::{ControllerError, ControllerState, MotionDisplayController, Step, Transition};
pub use display::DisplayPower;
pub use error::{ConfigError, Error};
pub use sensor::{MotionSensor, PirSensor};
