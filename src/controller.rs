//! Motion-to-display state machine.
//!
//! ```text
//!   Idle ──motion──▶ DisplayOn ──base_on elapsed──▶ ExtensionWindow
//!    ▲                  ▲                              │    │
//!    │                  └────────── motion ────────────┘    │
//!    └──────────────── window expired (off) ────────────────┘
//! ```
//!
//! The controller never sleeps itself. [`MotionDisplayController::poll`]
//! evaluates one cycle at the given time and returns how long the caller
//! should wait before the next one. The blocking runner and the Embassy
//! firmware both drive it that way.

use core::time::Duration;

use crate::config::ControllerConfig;
use crate::display::DisplayPower;
use crate::error::Error;
use crate::policy;
use crate::sensor::MotionSensor;

/// Error returned by a controller built from sensor `S` and display `D`.
pub type ControllerError<S, D> =
    Error<<S as MotionSensor>::Error, <D as DisplayPower>::Error>;

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// Display off, polling at the idle cadence.
    Idle,
    /// Display on, inside the guaranteed base window.
    DisplayOn,
    /// Display on, re-checking for motion after the base window.
    ExtensionWindow,
}

/// What a poll cycle changed, for logging by the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Motion while idle; display switched on for a new cycle.
    DisplayOn,
    /// Motion inside the extension window; the cycle restarted.
    /// `after` is the time since the previous cycle began.
    Restarted { after: Duration },
    /// Base window elapsed; now watching for renewed motion.
    WindowEntered,
    /// No motion in the extension window; display switched off after
    /// being on for `on_for`.
    WindowExpired { on_for: Duration },
    /// First idle evaluation switched the display off.
    DisplayOff,
}

/// Outcome of one poll cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// How long to wait before the next poll.
    pub sleep: Duration,
    pub transition: Option<Transition>,
}

impl Step {
    fn quiet(sleep: Duration) -> Self {
        Self {
            sleep,
            transition: None,
        }
    }

    fn with(sleep: Duration, transition: Transition) -> Self {
        Self {
            sleep,
            transition: Some(transition),
        }
    }
}

/// Owns the sensor handle, the display actuator and the state machine.
///
/// Both collaborators are released when the controller is dropped.
pub struct MotionDisplayController<S, D> {
    sensor: S,
    display: D,
    config: ControllerConfig,
    state: ControllerState,
    window_start: Duration,
    last_directive: Option<bool>,
}

impl<S, D> MotionDisplayController<S, D>
where
    S: MotionSensor,
    D: DisplayPower,
{
    /// Create a controller in `Idle`. No actuator call is made until the
    /// first poll.
    pub fn new(sensor: S, display: D, config: ControllerConfig) -> Self {
        Self {
            sensor,
            display,
            config,
            state: ControllerState::Idle,
            window_start: Duration::ZERO,
            last_directive: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Last directive sent to the display, `None` before the first one.
    pub fn display_on(&self) -> Option<bool> {
        self.last_directive
    }

    /// Start of the current on-cycle (meaningless while idle).
    pub fn window_start(&self) -> Duration {
        self.window_start
    }

    /// Activate the sensor line with a throwaway read and return how long
    /// the caller must wait before the first poll.
    pub fn warm_up(&mut self) -> Result<Duration, ControllerError<S, D>> {
        self.read_motion()?;
        Ok(self.config.warmup)
    }

    /// Evaluate one cycle at time `now`.
    pub fn poll(&mut self, now: Duration) -> Result<Step, ControllerError<S, D>> {
        match self.state {
            ControllerState::Idle => self.poll_idle(now),
            ControllerState::DisplayOn => {
                let elapsed = now.saturating_sub(self.window_start);
                if elapsed < self.config.base_on {
                    return Ok(Step::quiet(self.config.base_on - elapsed));
                }
                self.state = ControllerState::ExtensionWindow;
                let step = self.poll_window(now)?;
                Ok(match step.transition {
                    None => Step::with(step.sleep, Transition::WindowEntered),
                    Some(_) => step,
                })
            }
            ControllerState::ExtensionWindow => self.poll_window(now),
        }
    }

    fn poll_idle(&mut self, now: Duration) -> Result<Step, ControllerError<S, D>> {
        if self.read_motion()? {
            return self.start_cycle(now, Transition::DisplayOn);
        }

        if policy::idle_needs_off(self.last_directive) {
            self.set_power(false)?;
            return Ok(Step::with(self.config.idle_poll, Transition::DisplayOff));
        }

        Ok(Step::quiet(self.config.idle_poll))
    }

    fn poll_window(&mut self, now: Duration) -> Result<Step, ControllerError<S, D>> {
        let elapsed = now.saturating_sub(self.window_start);

        if policy::window_expired(elapsed, self.config.cycle_limit()) {
            self.set_power(false)?;
            self.state = ControllerState::Idle;
            return Ok(Step::with(
                self.config.idle_poll,
                Transition::WindowExpired { on_for: elapsed },
            ));
        }

        if self.read_motion()? {
            return self.start_cycle(now, Transition::Restarted { after: elapsed });
        }

        Ok(Step::quiet(self.config.extension_poll))
    }

    fn start_cycle(
        &mut self,
        now: Duration,
        transition: Transition,
    ) -> Result<Step, ControllerError<S, D>> {
        self.set_power(true)?;
        self.window_start = now;
        self.state = ControllerState::DisplayOn;
        Ok(Step::with(self.config.base_on, transition))
    }

    fn read_motion(&mut self) -> Result<bool, ControllerError<S, D>> {
        self.sensor.motion_detected().map_err(Error::SensorRead)
    }

    fn set_power(&mut self, on: bool) -> Result<(), ControllerError<S, D>> {
        self.display.set_power(on).map_err(Error::Actuator)?;
        self.last_directive = Some(on);
        Ok(())
    }
}
