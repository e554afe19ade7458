//! Raspberry Pi front end support.
//!
//! - **Sensor**: PIR output on a BCM GPIO, read through `rppal`
//! - **Display**: HDMI/DSI power via `vcgencmd display_power`
//! - **Settings**: optional TOML file plus command-line overrides

pub mod error;
pub mod settings;
pub mod vcgencmd;

pub use error::{ActuatorError, AppError};
pub use settings::{Overrides, Settings};
pub use vcgencmd::VcgencmdDisplay;
