//! Display power through the VideoCore `vcgencmd` tool.
//!
//! `vcgencmd display_power 1` / `0` blanks or restores the HDMI/DSI output
//! on Raspberry Pi OS. The call blocks until the tool exits.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::error::ActuatorError;
use crate::display::DisplayPower;

/// Display actuator that shells out to `vcgencmd`.
#[derive(Debug, Clone)]
pub struct VcgencmdDisplay {
    program: PathBuf,
}

impl VcgencmdDisplay {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the command for one directive without running it.
    pub fn command(&self, on: bool) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("display_power")
            .arg(if on { "1" } else { "0" })
            .stdin(Stdio::null())
            .stdout(Stdio::null());
        cmd
    }
}

impl DisplayPower for VcgencmdDisplay {
    type Error = ActuatorError;

    fn set_power(&mut self, on: bool) -> Result<(), ActuatorError> {
        let status = self
            .command(on)
            .status()
            .map_err(|source| ActuatorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ActuatorError::ExitStatus {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        log::trace!("{} display_power {}", self.program.display(), u8::from(on));
        Ok(())
    }
}
